//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toasts::Toasts;
use crate::pages::launch::LaunchPage;
use crate::state::{toasts::ToastState, ui::UiState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="ru">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared UI and toast contexts and mounts the launch page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState::default());
    let toasts = RwSignal::new(ToastState::default());

    provide_context(ui);
    provide_context(toasts);

    view! {
        <Stylesheet id="leptos" href="/pkg/launchbot.css"/>
        <Title text="AI Чат-бот 2027"/>

        <Router>
            <Routes fallback=|| "Страница не найдена.".into_view()>
                <Route path=StaticSegment("") view=LaunchPage/>
            </Routes>
        </Router>
        <Toasts/>
    }
}
