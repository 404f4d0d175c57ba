//! Countdown to the launch instant.
//!
//! The displayed breakdown is always derived from `target - now`; nothing is
//! decremented between ticks, so a late or missed tick only leaves the display
//! stale until the next one. Once the delta goes negative the countdown
//! becomes ready and never counts again.

#[cfg(test)]
#[path = "countdown_test.rs"]
mod countdown_test;

use crate::clock::Millis;

pub const MS_PER_SECOND: u64 = 1_000;
pub const MS_PER_MINUTE: u64 = 60 * MS_PER_SECOND;
pub const MS_PER_HOUR: u64 = 60 * MS_PER_MINUTE;
pub const MS_PER_DAY: u64 = 24 * MS_PER_HOUR;

/// Remaining time, split into calendar units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CountdownState {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl CountdownState {
    /// Break a non-negative millisecond delta into days/hours/minutes/seconds.
    #[must_use]
    pub fn from_delta_ms(delta: u64) -> Self {
        Self {
            days: delta / MS_PER_DAY,
            hours: (delta % MS_PER_DAY) / MS_PER_HOUR,
            minutes: (delta % MS_PER_HOUR) / MS_PER_MINUTE,
            seconds: (delta % MS_PER_MINUTE) / MS_PER_SECOND,
        }
    }

    /// The breakdown folded back into milliseconds (whole seconds only).
    #[must_use]
    pub fn as_millis(self) -> u64 {
        self.days * MS_PER_DAY + self.hours * MS_PER_HOUR + self.minutes * MS_PER_MINUTE + self.seconds * MS_PER_SECOND
    }
}

/// Where the countdown is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownPhase {
    Counting(CountdownState),
    Ready,
}

/// Result of one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Still counting; the breakdown was recomputed.
    Updated(CountdownState),
    /// This tick observed the target passing. Reported exactly once.
    BecameReady,
    /// Already ready; nothing changed.
    Idle,
}

/// Countdown towards a fixed target instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    target: Millis,
    phase: CountdownPhase,
}

impl Countdown {
    /// Count towards `target`. Nothing is read until the first [`Countdown::tick`].
    #[must_use]
    pub fn new(target: Millis) -> Self {
        Self { target, phase: CountdownPhase::Counting(CountdownState::default()) }
    }

    #[must_use]
    pub fn target(&self) -> Millis {
        self.target
    }

    #[must_use]
    pub fn phase(&self) -> CountdownPhase {
        self.phase
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.phase == CountdownPhase::Ready
    }

    /// Recompute from the current time.
    pub fn tick(&mut self, now: Millis) -> TickOutcome {
        if self.is_ready() {
            return TickOutcome::Idle;
        }

        let delta = self.target.saturating_sub(now);
        match u64::try_from(delta) {
            Ok(delta) => {
                let state = CountdownState::from_delta_ms(delta);
                self.phase = CountdownPhase::Counting(state);
                TickOutcome::Updated(state)
            }
            Err(_) => {
                self.phase = CountdownPhase::Ready;
                TickOutcome::BecameReady
            }
        }
    }
}
