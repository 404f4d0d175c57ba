//! Knowledge base tab. Static mock: the editor does not save.

use leptos::prelude::*;

pub const ARTICLES: [&str; 3] = ["Как работает чат-бот?", "Интеграция с CRM", "Настройка автоответов"];

#[component]
pub fn KnowledgePanel() -> impl IntoView {
    view! {
        <div class="panel knowledge">
            <h2 class="panel__title">"📚 БАЗА ЗНАНИЙ"</h2>

            <div class="panel__card">
                <h3 class="panel__subtitle">"➕ ДОБАВИТЬ СТАТЬЮ"</h3>
                <input class="knowledge__input" type="text" placeholder="Заголовок"/>
                <textarea class="knowledge__input knowledge__textarea" placeholder="Содержание статьи..." rows="6"></textarea>
                <button class="btn btn--accent">"СОХРАНИТЬ"</button>
            </div>

            <div class="panel__card">
                <h3 class="panel__subtitle">"📖 СТАТЬИ"</h3>
                {ARTICLES
                    .into_iter()
                    .map(|title| {
                        view! {
                            <div class="knowledge__article">
                                <span>{title}</span>
                                <span class="knowledge__chevron">"›"</span>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}
