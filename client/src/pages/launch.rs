//! Launch page: countdown, reveal, then the chat workspace.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page owns the two `launchpad` drivers. Both hold `Rc` state and live in
//! local stored values; their change callbacks copy fresh state into signals,
//! which is all the components ever read. Components act on the chat through
//! [`ChatControls`], a copyable handle provided as context.
//!
//! Timers are real only after hydration. During server rendering the drivers
//! run on inert timers and produce the first frame (the full countdown).

use leptos::prelude::*;

use launchpad::chat::ChatSession;
use launchpad::clock::Clock;
use launchpad::config::LaunchConfig;
use launchpad::leads::{LeadError, LeadField, LeadRecord};
use launchpad::sequencer::{LaunchSequencer, Stage};
use launchpad::widget::ChatWidget;

use crate::components::countdown::Countdown;
use crate::components::reveal_overlay::RevealOverlay;
use crate::components::status_badge::StatusBadge;
use crate::components::tab_bar::{TabBar, TabContent};
use crate::state::toasts::{ToastNotifier, ToastState};
use crate::util::timers::{BrowserClock, BrowserScheduler};

type PageWidget = ChatWidget<BrowserScheduler, BrowserClock, ToastNotifier>;
type PageSequencer = LaunchSequencer<BrowserScheduler, BrowserClock>;

/// Copyable handle for components that drive the chat widget.
#[derive(Clone, Copy)]
pub struct ChatControls {
    widget: StoredValue<PageWidget, LocalStorage>,
}

impl ChatControls {
    pub fn set_draft(&self, text: String) {
        self.widget.with_value(|w| w.set_draft(text));
    }

    /// Post the current draft. Returns `false` when nothing was sent.
    pub fn send_draft(&self) -> bool {
        self.widget.with_value(PageWidget::submit_draft)
    }

    pub fn set_form_field(&self, field: LeadField, value: String) {
        self.widget.with_value(|w| w.set_form_field(field, value));
    }

    /// Submit the lead form; notices are raised by the widget.
    ///
    /// # Errors
    ///
    /// Returns [`LeadError`] when a required field is empty or the chat is closed.
    pub fn submit_lead(&self) -> Result<LeadRecord, LeadError> {
        self.widget.with_value(PageWidget::submit_current_lead)
    }
}

/// Which block of the page is on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum PageView {
    Countdown,
    Reveal,
    Workspace,
}

impl From<Stage> for PageView {
    fn from(stage: Stage) -> Self {
        match stage {
            Stage::Counting(_) => PageView::Countdown,
            Stage::Revealing(_) => PageView::Reveal,
            Stage::Unlocked => PageView::Workspace,
        }
    }
}

#[component]
pub fn LaunchPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    let config = LaunchConfig::default();
    let clock = BrowserClock;
    let initial = ChatSession::new(clock.now_ms());

    let session = RwSignal::new(initial.clone());
    let stage = RwSignal::new(Stage::Counting(Default::default()));

    let widget = StoredValue::new_local(ChatWidget::with_session(
        BrowserScheduler,
        clock,
        ToastNotifier::new(toasts),
        initial,
        &config,
        move |snapshot: ChatSession| session.set(snapshot),
    ));

    let sequencer: StoredValue<PageSequencer, LocalStorage> =
        StoredValue::new_local(LaunchSequencer::new(BrowserScheduler, clock, &config, move |next: Stage| {
            if next.is_unlocked() {
                widget.with_value(PageWidget::unlock);
            }
            stage.set(next);
        }));
    sequencer.with_value(PageSequencer::start);

    provide_context(session);
    provide_context(ChatControls { widget });

    on_cleanup(move || {
        let _ = sequencer.try_with_value(PageSequencer::teardown);
        let _ = widget.try_with_value(PageWidget::teardown);
    });

    let view_kind = Memo::new(move |_| PageView::from(stage.get()));
    let remaining = Signal::derive(move || match stage.get() {
        Stage::Counting(state) => state,
        _ => Default::default(),
    });
    let step = Signal::derive(move || match stage.get() {
        Stage::Revealing(step) => step,
        _ => Default::default(),
    });

    view! {
        <div class="launch-page">
            <header class="launch-header">
                <h1 class="launch-header__title">"🤖 AI ЧАТ-БОТ 2027"</h1>
                <p class="launch-header__subtitle">"Запуск: 12 декабря 2027 года • Поработаем!"</p>
            </header>

            <main class="launch-page__body">
                {move || match view_kind.get() {
                    PageView::Countdown => view! { <Countdown remaining=remaining/> }.into_any(),
                    PageView::Reveal => view! { <RevealOverlay step=step/> }.into_any(),
                    PageView::Workspace => {
                        view! {
                            <TabBar/>
                            <section class="workspace">
                                <TabContent/>
                            </section>
                        }
                            .into_any()
                    }
                }}
            </main>

            <StatusBadge/>
        </div>
    }
}
