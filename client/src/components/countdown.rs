//! Countdown display: four labelled cells.

use leptos::prelude::*;

use launchpad::countdown::CountdownState;

#[component]
pub fn Countdown(#[prop(into)] remaining: Signal<CountdownState>) -> impl IntoView {
    let cell = move |value: fn(CountdownState) -> u64, label: &'static str| {
        view! {
            <div class="countdown__cell">
                <span class="countdown__value">{move || format!("{:02}", value(remaining.get()))}</span>
                <span class="countdown__label">{label}</span>
            </div>
        }
    };

    view! {
        <div class="countdown">
            <h2 class="countdown__title">"⏳ ДО ЗАПУСКА"</h2>
            <div class="countdown__cells">
                {cell(|s| s.days, "ДНЕЙ")}
                {cell(|s| s.hours, "ЧАСОВ")}
                {cell(|s| s.minutes, "МИНУТ")}
                {cell(|s| s.seconds, "СЕКУНД")}
            </div>
        </div>
    }
}
