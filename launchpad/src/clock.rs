//! Time source for the launch page.
//!
//! All launch logic works in epoch milliseconds so the same arithmetic runs
//! against `Date.now()` in the browser, `SystemTime` on the server, and a
//! virtual clock in tests.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Milliseconds since the Unix epoch.
pub type Millis = i64;

/// Convert a [`Duration`] to whole milliseconds, saturating at [`Millis::MAX`].
#[must_use]
pub fn millis(duration: Duration) -> Millis {
    Millis::try_from(duration.as_millis()).unwrap_or(Millis::MAX)
}

/// Source of the current time.
pub trait Clock {
    /// Current time in epoch milliseconds.
    fn now_ms(&self) -> Millis;
}

/// Wall clock backed by [`SystemTime`]. Not usable in the browser.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> Millis {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, millis)
    }
}

impl<C: Clock + ?Sized> Clock for std::rc::Rc<C> {
    fn now_ms(&self) -> Millis {
        (**self).now_ms()
    }
}
