//! Workspace tab strip and the panel switch behind it.

use leptos::prelude::*;

use crate::components::analytics_panel::AnalyticsPanel;
use crate::components::chat_panel::ChatPanel;
use crate::components::knowledge_panel::KnowledgePanel;
use crate::components::settings_panel::SettingsPanel;
use crate::state::ui::{Tab, UiState};

#[component]
pub fn TabBar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <nav class="tab-bar">
            {Tab::ALL
                .into_iter()
                .map(|tab| {
                    let class = move || {
                        if ui.get().active_tab == tab {
                            format!("btn tab-bar__tab tab-bar__tab--{} tab-bar__tab--active", tab.key())
                        } else {
                            format!("btn tab-bar__tab tab-bar__tab--{}", tab.key())
                        }
                    };
                    view! {
                        <button class=class on:click=move |_| ui.update(|u| u.active_tab = tab)>
                            {tab.label()}
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </nav>
    }
}

/// Renders the panel for the active tab.
#[component]
pub fn TabContent() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let active = Memo::new(move |_| ui.get().active_tab);

    move || match active.get() {
        Tab::Chat => view! { <ChatPanel/> }.into_any(),
        Tab::Analytics => view! { <AnalyticsPanel/> }.into_any(),
        Tab::Settings => view! { <SettingsPanel/> }.into_any(),
        Tab::Knowledge => view! { <KnowledgePanel/> }.into_any(),
    }
}
