//! Toast queue and the browser [`Notifier`] that feeds it.
//!
//! DESIGN
//! ======
//! `ToastState` is a plain queue so it can be tested natively. The notifier
//! pushes into the shared signal and, in the browser, schedules the toast's
//! own dismissal; on the server the toast simply stays until hydration
//! replaces the page.

#[cfg(test)]
#[path = "toasts_test.rs"]
mod toasts_test;

use leptos::prelude::*;

use launchpad::notify::{NoticeKind, Notifier};

/// How long a toast stays on screen.
pub const TOAST_TTL_MS: u32 = 3_000;

/// One visible toast.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: NoticeKind,
    pub message: String,
}

/// Toasts currently shown, oldest first.
#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Queue a toast and return its id.
    pub fn push(&mut self, kind: NoticeKind, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push(Toast { id, kind, message: message.into() });
        id
    }

    /// Remove a toast. Unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }
}

/// [`Notifier`] backed by the shared toast signal.
#[derive(Clone, Copy)]
pub struct ToastNotifier {
    toasts: RwSignal<ToastState>,
}

impl ToastNotifier {
    pub fn new(toasts: RwSignal<ToastState>) -> Self {
        Self { toasts }
    }
}

impl Notifier for ToastNotifier {
    fn notify(&self, kind: NoticeKind, message: &str) {
        let mut id = 0;
        self.toasts.update(|t| id = t.push(kind, message));

        #[cfg(feature = "hydrate")]
        {
            let toasts = self.toasts;
            gloo_timers::callback::Timeout::new(TOAST_TTL_MS, move || {
                toasts.update(|t| t.dismiss(id));
            })
            .forget();
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    }
}
