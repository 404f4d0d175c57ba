//! UI components for the launch page.

pub mod analytics_panel;
pub mod chat_panel;
pub mod countdown;
pub mod knowledge_panel;
pub mod lead_form;
pub mod reveal_overlay;
pub mod settings_panel;
pub mod status_badge;
pub mod tab_bar;
pub mod toasts;
