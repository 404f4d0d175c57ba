//! Local UI chrome state (active workspace tab).

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Workspace tabs shown once the chat unlocks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Chat,
    Analytics,
    Settings,
    Knowledge,
}

impl Tab {
    /// Tabs in display order.
    pub const ALL: [Tab; 4] = [Tab::Chat, Tab::Analytics, Tab::Settings, Tab::Knowledge];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Tab::Chat => "ЧАТ",
            Tab::Analytics => "АНАЛИТИКА",
            Tab::Settings => "НАСТРОЙКИ",
            Tab::Knowledge => "БАЗА ЗНАНИЙ",
        }
    }

    /// Stable key for CSS modifiers and element ids.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Tab::Chat => "chat",
            Tab::Analytics => "analytics",
            Tab::Settings => "settings",
            Tab::Knowledge => "knowledge",
        }
    }
}

/// UI state for the workspace shell.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub active_tab: Tab,
}
