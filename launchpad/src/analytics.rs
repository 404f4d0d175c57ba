//! Dashboard figures for the analytics tab.
//!
//! Counts come from the live session. The weekly activity series is a fixed
//! demo curve; nothing on the page records per-day traffic.

#[cfg(test)]
#[path = "analytics_test.rs"]
mod analytics_test;

use crate::chat::ChatSession;
use crate::leads::LeadRecord;

/// Bar heights for the weekly activity chart, Monday first.
pub const WEEKLY_ACTIVITY: [u8; 7] = [65, 85, 45, 95, 75, 55, 80];

/// Short weekday labels matching [`WEEKLY_ACTIVITY`].
pub const WEEKDAY_LABELS: [&str; 7] = ["ПН", "ВТ", "СР", "ЧТ", "ПТ", "СБ", "ВС"];

/// How many captured leads the "recent" list shows.
pub const RECENT_LEADS: usize = 5;

/// One bar of the activity chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivityBar {
    pub label: &'static str,
    pub value: u8,
}

/// Snapshot of the analytics tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analytics {
    pub messages: usize,
    pub leads: usize,
    pub conversion_percent: u32,
    pub recent_leads: Vec<LeadRecord>,
}

impl Analytics {
    #[must_use]
    pub fn from_session(session: &ChatSession) -> Self {
        let messages = session.messages().len();
        let leads = session.leads().len();
        let recent_leads = session.leads().iter().rev().take(RECENT_LEADS).cloned().collect();
        Self { messages, leads, conversion_percent: conversion_percent(leads, messages), recent_leads }
    }

    /// The activity chart, Monday to Sunday.
    #[must_use]
    pub fn weekly_activity() -> Vec<ActivityBar> {
        WEEKDAY_LABELS.iter().zip(WEEKLY_ACTIVITY).map(|(label, value)| ActivityBar { label, value }).collect()
    }
}

/// Leads as a rounded percentage of messages; zero until the first lead.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
pub fn conversion_percent(leads: usize, messages: usize) -> u32 {
    if leads == 0 || messages == 0 {
        return 0;
    }
    (leads as f64 / messages as f64 * 100.0).round() as u32
}
