//! Analytics tab: session counters, weekly chart, and recent leads.

use leptos::prelude::*;

use launchpad::analytics::Analytics;
use launchpad::chat::ChatSession;
use launchpad::labels::date_label;

use crate::util::timers::local_utc_offset_minutes;

#[component]
pub fn AnalyticsPanel() -> impl IntoView {
    let session = expect_context::<RwSignal<ChatSession>>();
    let figures = Memo::new(move |_| session.with(Analytics::from_session));
    let offset = local_utc_offset_minutes();

    let bars = Analytics::weekly_activity();
    let chart = bars
        .iter()
        .map(|bar| {
            let height = format!("{}%", bar.value);
            view! { <div class="analytics__bar" style:height=height></div> }
        })
        .collect::<Vec<_>>();
    let day_labels = bars.iter().map(|bar| view! { <span>{bar.label}</span> }).collect::<Vec<_>>();

    view! {
        <div class="panel analytics">
            <h2 class="panel__title">"📊 АНАЛИТИКА"</h2>

            <div class="analytics__cards">
                <div class="analytics__card analytics__card--primary">
                    <div class="analytics__value">{move || figures.get().messages}</div>
                    <p class="analytics__caption">"ВСЕГО СООБЩЕНИЙ"</p>
                </div>
                <div class="analytics__card analytics__card--secondary">
                    <div class="analytics__value">{move || figures.get().leads}</div>
                    <p class="analytics__caption">"СОБРАНО ЛИДОВ"</p>
                </div>
                <div class="analytics__card analytics__card--accent">
                    <div class="analytics__value">{move || format!("{}%", figures.get().conversion_percent)}</div>
                    <p class="analytics__caption">"КОНВЕРСИЯ"</p>
                </div>
            </div>

            <div class="panel__card">
                <h3 class="panel__subtitle">"📈 ГРАФИК АКТИВНОСТИ"</h3>
                <div class="analytics__chart">{chart}</div>
                <div class="analytics__days">{day_labels}</div>
            </div>

            <div class="panel__card">
                <h3 class="panel__subtitle">"🎯 ПОСЛЕДНИЕ ЛИДЫ"</h3>
                {move || {
                    let recent = figures.get().recent_leads;
                    if recent.is_empty() {
                        return view! { <p class="analytics__empty">"Пока нет лидов"</p> }.into_any();
                    }
                    recent
                        .into_iter()
                        .map(|lead| {
                            let phone = (!lead.phone.is_empty())
                                .then(|| view! { <p class="analytics__lead-line">{lead.phone.clone()}</p> });
                            view! {
                                <div class="analytics__lead">
                                    <div class="analytics__lead-head">
                                        <span class="analytics__lead-name">{lead.name.clone()}</span>
                                        <span class="analytics__lead-date">{date_label(lead.captured_at, offset)}</span>
                                    </div>
                                    <p class="analytics__lead-line">{lead.email.clone()}</p>
                                    {phone}
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                        .into_any()
                }}
            </div>
        </div>
    }
}
