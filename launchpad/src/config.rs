//! Timing constants for one launch session.

use std::time::Duration;

/// Countdown length when the page mounts.
pub const DEFAULT_COUNTDOWN: Duration = Duration::from_secs(10);
/// Countdown tick period.
pub const DEFAULT_TICK_PERIOD: Duration = Duration::from_secs(1);
/// Reveal step 1 offset from the ready moment.
pub const DEFAULT_STEP1_AT: Duration = Duration::from_millis(500);
/// Reveal step 2 offset from the ready moment.
pub const DEFAULT_STEP2_AT: Duration = Duration::from_millis(3_000);
/// Reveal step 3 offset from the ready moment.
pub const DEFAULT_STEP3_AT: Duration = Duration::from_millis(5_500);
/// Chat unlock offset from the ready moment.
pub const DEFAULT_UNLOCK_AT: Duration = Duration::from_millis(8_000);
/// Bot "thinking" delay before each canned reply.
pub const DEFAULT_REPLY_DELAY: Duration = Duration::from_millis(800);

/// Timing for the countdown, the reveal chain, and the chat widget.
///
/// Reveal offsets are measured from the tick that observed the target
/// passing, and must be non-decreasing in step order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaunchConfig {
    pub countdown: Duration,
    pub tick_period: Duration,
    pub step1_at: Duration,
    pub step2_at: Duration,
    pub step3_at: Duration,
    pub unlock_at: Duration,
    pub reply_delay: Duration,
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self {
            countdown: DEFAULT_COUNTDOWN,
            tick_period: DEFAULT_TICK_PERIOD,
            step1_at: DEFAULT_STEP1_AT,
            step2_at: DEFAULT_STEP2_AT,
            step3_at: DEFAULT_STEP3_AT,
            unlock_at: DEFAULT_UNLOCK_AT,
            reply_delay: DEFAULT_REPLY_DELAY,
        }
    }
}
