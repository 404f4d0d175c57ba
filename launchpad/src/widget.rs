//! Chat widget driver: owns a [`ChatSession`] and the timers around it.
//!
//! DESIGN
//! ======
//! The widget adds what the plain session cannot do on its own: the bot's
//! "thinking" delay before each reply, toast notices for lead submission, the
//! lock that keeps chat inert until the launch reveal finishes, and teardown.
//! Reply timers hold weak references, exactly like the launch sequencer, so
//! dropping the widget cancels every reply still in flight. Reply handles are
//! keyed by the user message they answer; a delivered reply's handle is
//! released on the next submit, never from inside its own callback.
//!
//! While locked or after teardown every input is ignored: nothing changes,
//! nothing is emitted, and no notice is raised.
//!
//! After each change the widget hands a snapshot of the session to the
//! `on_change` callback; the UI renders from snapshots and never borrows the
//! live session.

#[cfg(test)]
#[path = "widget_test.rs"]
mod widget_test;

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::rc::Rc;
use std::time::Duration;

use tracing::{debug, info};

use crate::chat::{ChatSession, PendingReply};
use crate::clock::Clock;
use crate::config::LaunchConfig;
use crate::leads::{LeadError, LeadField, LeadForm, LeadRecord};
use crate::notify::{NoticeKind, Notifier};
use crate::scheduler::{Scheduler, TimerHandle};

pub const LEAD_SUCCESS_NOTICE: &str = "✅ Заявка отправлена!";

struct Shared<S, C, N> {
    session: RefCell<ChatSession>,
    replies: RefCell<BTreeMap<u64, TimerHandle>>,
    delivered: RefCell<Vec<u64>>,
    scheduler: S,
    clock: C,
    notifier: N,
    reply_delay: Duration,
    on_change: Box<dyn Fn(ChatSession)>,
    unlocked: Cell<bool>,
    torn_down: Cell<bool>,
}

impl<S: Scheduler + 'static, C: Clock + 'static, N: Notifier + 'static> Shared<S, C, N> {
    fn accepting(&self) -> bool {
        self.unlocked.get() && !self.torn_down.get()
    }

    fn emit(&self) {
        let snapshot = self.session.borrow().clone();
        (self.on_change)(snapshot);
    }

    fn submit(self: &Rc<Self>, text: &str) -> bool {
        if !self.accepting() {
            return false;
        }
        let now = self.clock.now_ms();
        let pending = self.session.borrow_mut().submit_user_message(text, now);
        let Some(pending) = pending else {
            return false;
        };
        self.emit();
        self.schedule_reply(pending);
        true
    }

    fn schedule_reply(self: &Rc<Self>, pending: PendingReply) {
        self.release_delivered();
        let key = pending.user_message_id;
        let weak = Rc::downgrade(self);
        let handle = self.scheduler.after(
            self.reply_delay,
            Box::new(move || {
                if let Some(shared) = weak.upgrade() {
                    shared.deliver(&pending);
                }
            }),
        );
        self.replies.borrow_mut().insert(key, handle);
    }

    fn release_delivered(&self) {
        let delivered = std::mem::take(&mut *self.delivered.borrow_mut());
        let mut replies = self.replies.borrow_mut();
        for key in delivered {
            replies.remove(&key);
        }
    }

    fn edit(&self, change: impl FnOnce(&mut ChatSession)) {
        if !self.accepting() {
            return;
        }
        change(&mut self.session.borrow_mut());
        self.emit();
    }

    fn deliver(&self, pending: &PendingReply) {
        if self.torn_down.get() {
            return;
        }
        let now = self.clock.now_ms();
        let reply_id = self.session.borrow_mut().deliver_reply(pending, now);
        self.delivered.borrow_mut().push(pending.user_message_id);
        debug!(reply_id, user_message_id = pending.user_message_id, "bot reply delivered");
        self.emit();
    }

    fn submit_lead(&self, form: LeadForm) -> Result<LeadRecord, LeadError> {
        if !self.accepting() {
            return Err(LeadError::ChatClosed);
        }
        let now = self.clock.now_ms();
        let result = self.session.borrow_mut().submit_lead(form, now);
        match result {
            Ok(record) => {
                info!(leads = self.session.borrow().leads().len(), "lead captured");
                self.notifier.notify(NoticeKind::Success, LEAD_SUCCESS_NOTICE);
                self.emit();
                Ok(record)
            }
            Err(err) => {
                debug!(error = %err, "lead rejected");
                self.notifier.notify(NoticeKind::Error, err.user_message());
                Err(err)
            }
        }
    }
}

/// Timer-owning chat widget. Starts locked; see [`ChatWidget::unlock`].
pub struct ChatWidget<S: Scheduler + 'static, C: Clock + 'static, N: Notifier + 'static> {
    shared: Rc<Shared<S, C, N>>,
}

impl<S: Scheduler + 'static, C: Clock + 'static, N: Notifier + 'static> ChatWidget<S, C, N> {
    /// Open a fresh session at the clock's current time.
    pub fn new(
        scheduler: S,
        clock: C,
        notifier: N,
        config: &LaunchConfig,
        on_change: impl Fn(ChatSession) + 'static,
    ) -> Self {
        let session = ChatSession::new(clock.now_ms());
        Self::with_session(scheduler, clock, notifier, session, config, on_change)
    }

    /// Drive an existing session.
    pub fn with_session(
        scheduler: S,
        clock: C,
        notifier: N,
        session: ChatSession,
        config: &LaunchConfig,
        on_change: impl Fn(ChatSession) + 'static,
    ) -> Self {
        let shared = Rc::new(Shared {
            session: RefCell::new(session),
            replies: RefCell::new(BTreeMap::new()),
            delivered: RefCell::new(Vec::new()),
            scheduler,
            clock,
            notifier,
            reply_delay: config.reply_delay,
            on_change: Box::new(on_change),
            unlocked: Cell::new(false),
            torn_down: Cell::new(false),
        });
        Self { shared }
    }

    /// Accept messages from now on.
    pub fn unlock(&self) {
        if !self.shared.unlocked.replace(true) {
            debug!("chat widget unlocked");
        }
    }

    #[must_use]
    pub fn is_unlocked(&self) -> bool {
        self.shared.unlocked.get()
    }

    /// Copy of the current session.
    #[must_use]
    pub fn snapshot(&self) -> ChatSession {
        self.shared.session.borrow().clone()
    }

    /// Reply timers currently held, delivered ones not yet released included.
    #[must_use]
    pub fn reply_timers(&self) -> usize {
        self.shared.replies.borrow().len()
    }

    pub fn set_draft(&self, text: impl Into<String>) {
        self.shared.edit(|session| session.set_draft(text));
    }

    pub fn set_form_field(&self, field: LeadField, value: impl Into<String>) {
        self.shared.edit(|session| session.set_form_field(field, value));
    }

    /// Post a user message and schedule the bot's reply.
    ///
    /// Returns `false` when nothing was posted: blank text, a locked widget,
    /// or a torn-down one.
    pub fn submit_user_message(&self, text: &str) -> bool {
        self.shared.submit(text)
    }

    /// Post the current draft.
    pub fn submit_draft(&self) -> bool {
        let draft = self.shared.session.borrow().draft().to_owned();
        self.shared.submit(&draft)
    }

    /// Submit `form` as a lead, notifying the visitor either way.
    ///
    /// # Errors
    ///
    /// Returns [`LeadError::MissingRequired`] when name or email is empty, or
    /// [`LeadError::ChatClosed`] while locked or after teardown. Only the
    /// first raises a notice.
    pub fn submit_lead(&self, form: LeadForm) -> Result<LeadRecord, LeadError> {
        self.shared.submit_lead(form)
    }

    /// Submit the form the session is holding.
    ///
    /// # Errors
    ///
    /// See [`ChatWidget::submit_lead`].
    pub fn submit_current_lead(&self) -> Result<LeadRecord, LeadError> {
        let form = self.shared.session.borrow().form().clone();
        self.shared.submit_lead(form)
    }

    /// Cancel pending replies and ignore all further input.
    pub fn teardown(&self) {
        if self.shared.torn_down.replace(true) {
            return;
        }
        self.shared.replies.borrow_mut().clear();
        self.shared.delivered.borrow_mut().clear();
        debug!("chat widget torn down");
    }
}
