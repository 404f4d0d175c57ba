//! Toast notification seam.

use std::cell::RefCell;

/// Severity of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A notification that was raised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

/// Shows transient notices to the visitor.
pub trait Notifier {
    fn notify(&self, kind: NoticeKind, message: &str);
}

impl<N: Notifier + ?Sized> Notifier for std::rc::Rc<N> {
    fn notify(&self, kind: NoticeKind, message: &str) {
        (**self).notify(kind, message);
    }
}

/// Notifier that keeps every notice, for tests and headless hosts.
#[derive(Debug, Default)]
pub struct NoticeLog {
    notices: RefCell<Vec<Notice>>,
}

impl NoticeLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything notified so far, oldest first.
    #[must_use]
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.borrow().clone()
    }
}

impl Notifier for NoticeLog {
    fn notify(&self, kind: NoticeKind, message: &str) {
        self.notices.borrow_mut().push(Notice { kind, message: message.to_owned() });
    }
}
