//! Settings tab. Static mock: edits are not persisted.

use leptos::prelude::*;

pub const DEFAULT_BOT_NAME: &str = "AI Помощник 2025";
pub const DEFAULT_WELCOME_TEXT: &str = "👋 Привет! Я твой виртуальный помощник!";
pub const INTEGRATIONS: [&str; 3] = ["CRM Система", "Email рассылка", "Telegram"];

#[component]
pub fn SettingsPanel() -> impl IntoView {
    view! {
        <div class="panel settings">
            <h2 class="panel__title">"⚙️ НАСТРОЙКИ"</h2>

            <div class="panel__card">
                <h3 class="panel__subtitle">"🤖 НАСТРОЙКИ БОТА"</h3>
                <label class="settings__label">"Имя бота"</label>
                <input class="settings__input" type="text" value=DEFAULT_BOT_NAME/>
                <label class="settings__label">"Приветственное сообщение"</label>
                <textarea class="settings__input settings__textarea">{DEFAULT_WELCOME_TEXT}</textarea>
            </div>

            <div class="panel__card">
                <h3 class="panel__subtitle">"🔗 ИНТЕГРАЦИИ"</h3>
                {INTEGRATIONS
                    .into_iter()
                    .map(|name| {
                        view! {
                            <div class="settings__integration">
                                <span>{name}</span>
                                <button class="btn btn--outline">"ПОДКЛЮЧИТЬ"</button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}
