use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_tab_is_chat() {
    let state = UiState::default();
    assert_eq!(state.active_tab, Tab::Chat);
}

// =============================================================
// Tab
// =============================================================

#[test]
fn tabs_are_listed_in_display_order() {
    assert_eq!(Tab::ALL, [Tab::Chat, Tab::Analytics, Tab::Settings, Tab::Knowledge]);
}

#[test]
fn tab_keys_are_unique() {
    let mut keys: Vec<&str> = Tab::ALL.iter().map(|t| t.key()).collect();
    keys.dedup();
    assert_eq!(keys.len(), Tab::ALL.len());
}

#[test]
fn tab_labels_are_non_empty() {
    for tab in Tab::ALL {
        assert!(!tab.label().is_empty(), "{tab:?} has no label");
    }
}
