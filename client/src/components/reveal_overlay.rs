//! Full-screen reveal shown between the countdown and the chat.

use leptos::prelude::*;

use launchpad::reveal::RevealStep;

/// Shows the headline for the current reveal step; blank while idle.
#[component]
pub fn RevealOverlay(#[prop(into)] step: Signal<RevealStep>) -> impl IntoView {
    let headline = move || step.get().headline().unwrap_or_default();
    let class = move || {
        if step.get() == RevealStep::Idle {
            "reveal-overlay reveal-overlay--idle"
        } else {
            "reveal-overlay"
        }
    };

    view! {
        <div class=class>
            <h2 class="reveal-overlay__headline">{headline}</h2>
        </div>
    }
}
