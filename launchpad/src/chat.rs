//! Chat session state: transcript, input draft, and lead capture.
//!
//! DESIGN
//! ======
//! `ChatSession` is plain owned state with synchronous transitions. It never
//! schedules anything itself: [`ChatSession::submit_user_message`] returns a
//! [`PendingReply`] and the caller decides when to deliver it (see
//! `widget::ChatWidget`, which does so after the "thinking" delay).
//!
//! The transcript is append-only. Ids are allocated as `max + 1` at append
//! time, so they stay unique and increasing however replies interleave.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::clock::Millis;
use crate::leads::{LeadError, LeadField, LeadForm, LeadRecord};
use crate::rules::{RuleEffect, RuleSet};

pub const WELCOME_MESSAGE: &str = "👋 Привет! Я твой виртуальный помощник! Как тебя зовут?";

/// Who wrote a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    Bot,
    User,
}

/// One transcript entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: u64,
    pub text: String,
    pub sender: Sender,
    pub sent_at: Millis,
}

/// Lead-capture mode. Only a lead-intent reply enters `Collecting`; only a
/// successful lead submission leaves it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LeadMode {
    #[default]
    Idle,
    Collecting,
}

/// A user message waiting for its bot reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingReply {
    pub prompt: String,
    pub user_message_id: u64,
}

/// Per-session chat state.
#[derive(Debug, Clone)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    draft: String,
    lead_mode: LeadMode,
    form: LeadForm,
    leads: Vec<LeadRecord>,
    rules: RuleSet,
}

impl ChatSession {
    /// New session opened at `now`, greeted by the bot.
    #[must_use]
    pub fn new(now: Millis) -> Self {
        Self::with_rules(RuleSet::launch_bot(), now)
    }

    #[must_use]
    pub fn with_rules(rules: RuleSet, now: Millis) -> Self {
        let mut session = Self {
            messages: Vec::new(),
            draft: String::new(),
            lead_mode: LeadMode::Idle,
            form: LeadForm::default(),
            leads: Vec::new(),
            rules,
        };
        session.append(WELCOME_MESSAGE.to_owned(), Sender::Bot, now);
        session
    }

    // --- Reads ---

    #[must_use]
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    #[must_use]
    pub fn draft(&self) -> &str {
        &self.draft
    }

    #[must_use]
    pub fn lead_mode(&self) -> LeadMode {
        self.lead_mode
    }

    #[must_use]
    pub fn is_collecting(&self) -> bool {
        self.lead_mode == LeadMode::Collecting
    }

    #[must_use]
    pub fn form(&self) -> &LeadForm {
        &self.form
    }

    #[must_use]
    pub fn leads(&self) -> &[LeadRecord] {
        &self.leads
    }

    /// Id the next appended message will get.
    #[must_use]
    pub fn next_id(&self) -> u64 {
        self.messages.iter().map(|m| m.id).max().map_or(1, |max| max + 1)
    }

    // --- Input ---

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    pub fn set_form_field(&mut self, field: LeadField, value: impl Into<String>) {
        self.form.set(field, value);
    }

    /// Append a user message and clear the draft.
    ///
    /// Returns `None` (and changes nothing) for blank text.
    pub fn submit_user_message(&mut self, text: &str, now: Millis) -> Option<PendingReply> {
        if text.trim().is_empty() {
            return None;
        }
        let id = self.append(text.to_owned(), Sender::User, now);
        self.draft.clear();
        Some(PendingReply { prompt: text.to_owned(), user_message_id: id })
    }

    /// Submit whatever is in the draft.
    pub fn submit_draft(&mut self, now: Millis) -> Option<PendingReply> {
        let text = self.draft.clone();
        self.submit_user_message(&text, now)
    }

    // --- Replies ---

    /// Choose the canned reply for `text` and apply the matching rule's effect.
    pub fn classify(&mut self, text: &str) -> &'static str {
        let verdict = self.rules.classify(text);
        if let Some(effect) = verdict.effect {
            self.apply_effect(effect);
        }
        verdict.reply
    }

    /// Append the bot's reply to a pending user message.
    pub fn deliver_reply(&mut self, pending: &PendingReply, now: Millis) -> u64 {
        let reply = self.classify(&pending.prompt);
        self.append(reply.to_owned(), Sender::Bot, now)
    }

    // --- Leads ---

    /// Submit the form currently held by the session.
    ///
    /// # Errors
    ///
    /// See [`ChatSession::submit_lead`].
    pub fn submit_current_lead(&mut self, now: Millis) -> Result<LeadRecord, LeadError> {
        let form = self.form.clone();
        self.submit_lead(form, now)
    }

    /// Capture a lead, reset the form, leave collecting mode, and confirm in chat.
    ///
    /// # Errors
    ///
    /// Returns [`LeadError::MissingRequired`] when name or email is empty; the
    /// session is left untouched.
    pub fn submit_lead(&mut self, form: LeadForm, now: Millis) -> Result<LeadRecord, LeadError> {
        form.validate()?;

        let record = LeadRecord::capture(form, now);
        self.leads.push(record.clone());
        self.form = LeadForm::default();
        self.lead_mode = LeadMode::Idle;
        self.append(confirmation_text(&record.name), Sender::Bot, now);
        Ok(record)
    }

    fn apply_effect(&mut self, effect: RuleEffect) {
        match effect {
            RuleEffect::BeginLeadCapture => self.lead_mode = LeadMode::Collecting,
        }
    }

    fn append(&mut self, text: String, sender: Sender, now: Millis) -> u64 {
        let id = self.next_id();
        self.messages.push(ChatMessage { id, text, sender, sent_at: now });
        id
    }
}

/// Bot message confirming a captured lead.
#[must_use]
pub fn confirmation_text(name: &str) -> String {
    format!("✨ Спасибо, {name}! Твоя заявка принята. Скоро свяжемся!")
}
