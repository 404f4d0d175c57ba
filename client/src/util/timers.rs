//! Browser implementations of the `launchpad` timer and clock seams.
//!
//! DESIGN
//! ======
//! `gloo-timers` handles already cancel on drop, so a [`TimerHandle`] simply
//! owns the gloo handle. Server rendering has no event loop: without the
//! `hydrate` feature every registration is inert and the clock falls back to
//! the system time, which is enough to render the first frame.

use std::time::Duration;

use launchpad::clock::{Clock, Millis};
use launchpad::scheduler::{RepeatingTask, Scheduler, Task, TimerHandle};

#[cfg(feature = "hydrate")]
use gloo_timers::callback::{Interval, Timeout};

#[cfg(feature = "hydrate")]
fn as_timer_ms(duration: Duration) -> u32 {
    u32::try_from(duration.as_millis()).unwrap_or(u32::MAX)
}

/// [`Scheduler`] on `setTimeout` / `setInterval`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    fn after(&self, delay: Duration, task: Task) -> TimerHandle {
        #[cfg(feature = "hydrate")]
        {
            let timeout = Timeout::new(as_timer_ms(delay), task);
            TimerHandle::new(move || drop(timeout))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (delay, task);
            TimerHandle::inert()
        }
    }

    fn every(&self, period: Duration, task: RepeatingTask) -> TimerHandle {
        #[cfg(feature = "hydrate")]
        {
            let interval = Interval::new(as_timer_ms(period), task);
            TimerHandle::new(move || drop(interval))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (period, task);
            TimerHandle::inert()
        }
    }
}

/// [`Clock`] on `Date.now()`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserClock;

impl Clock for BrowserClock {
    #[allow(clippy::cast_possible_truncation)]
    fn now_ms(&self) -> Millis {
        #[cfg(feature = "hydrate")]
        {
            js_sys::Date::now() as Millis
        }
        #[cfg(not(feature = "hydrate"))]
        {
            launchpad::clock::SystemClock.now_ms()
        }
    }
}

/// The visitor's offset from UTC in minutes, east positive.
#[allow(clippy::cast_possible_truncation)]
pub fn local_utc_offset_minutes() -> i32 {
    #[cfg(feature = "hydrate")]
    {
        -(js_sys::Date::new_0().get_timezone_offset() as i32)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0
    }
}
