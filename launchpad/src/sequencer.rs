//! Launch sequencer: countdown, then the one-shot reveal chain, then chat.
//!
//! DESIGN
//! ======
//! [`Sequencer`] is the pure state machine. It only moves when told to: a
//! tick with the current time, or a reveal action. [`LaunchSequencer`] is the
//! driver that owns the timers feeding it: one recurring tick, plus the cue
//! timers armed once when the countdown first reports ready. All timers live
//! in one [`TimerGroup`], so teardown cancels them atomically.
//!
//! Timer callbacks hold only a weak reference to the driver state. Dropping
//! the driver therefore drops the group and cancels every pending timer, and
//! a callback already in flight sees the state gone and does nothing.

#[cfg(test)]
#[path = "sequencer_test.rs"]
mod sequencer_test;

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use std::time::Duration;

use tracing::{debug, info};

use crate::clock::{Clock, Millis, millis};
use crate::config::LaunchConfig;
use crate::countdown::{Countdown, CountdownPhase, CountdownState, TickOutcome};
use crate::reveal::{RevealAction, RevealPlan, RevealStep};
use crate::scheduler::{Scheduler, TimerGroup};

/// Which view the launch page renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Counting down; show the breakdown.
    Counting(CountdownState),
    /// Countdown over; show the current reveal step (idle before step 1).
    Revealing(RevealStep),
    /// Reveal finished; the chat workspace is live.
    Unlocked,
}

impl Stage {
    #[must_use]
    pub fn is_unlocked(self) -> bool {
        self == Self::Unlocked
    }
}

// =============================================================================
// STATE MACHINE
// =============================================================================

/// Pure launch state machine.
#[derive(Debug, Clone)]
pub struct Sequencer {
    countdown: Countdown,
    reveal: RevealStep,
    unlocked: bool,
    chain_armed: bool,
}

impl Sequencer {
    #[must_use]
    pub fn new(target: Millis) -> Self {
        Self { countdown: Countdown::new(target), reveal: RevealStep::Idle, unlocked: false, chain_armed: false }
    }

    #[must_use]
    pub fn target(&self) -> Millis {
        self.countdown.target()
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.countdown.is_ready()
    }

    #[must_use]
    pub fn stage(&self) -> Stage {
        if self.unlocked {
            return Stage::Unlocked;
        }
        match self.countdown.phase() {
            CountdownPhase::Counting(state) => Stage::Counting(state),
            CountdownPhase::Ready => Stage::Revealing(self.reveal),
        }
    }

    /// Feed the current time to the countdown.
    pub fn tick(&mut self, now: Millis) -> TickOutcome {
        self.countdown.tick(now)
    }

    /// Claim the reveal chain. Returns `true` only the first time after ready.
    pub fn arm_chain(&mut self) -> bool {
        if !self.is_ready() || self.chain_armed {
            return false;
        }
        self.chain_armed = true;
        true
    }

    /// Apply one reveal action. Ignored before ready and after unlock.
    pub fn apply(&mut self, action: RevealAction) -> Stage {
        if self.is_ready() && !self.unlocked {
            match action {
                RevealAction::Show(step) => self.reveal = step,
                RevealAction::UnlockChat => {
                    self.reveal = RevealStep::Idle;
                    self.unlocked = true;
                }
            }
        }
        self.stage()
    }
}

// =============================================================================
// DRIVER
// =============================================================================

struct Shared<S, C> {
    machine: RefCell<Sequencer>,
    timers: RefCell<TimerGroup>,
    scheduler: S,
    clock: C,
    plan: RevealPlan,
    tick_period: Duration,
    on_change: Box<dyn Fn(Stage)>,
    started: Cell<bool>,
    torn_down: Cell<bool>,
}

impl<S: Scheduler + 'static, C: Clock + 'static> Shared<S, C> {
    fn emit(&self) {
        let stage = self.machine.borrow().stage();
        (self.on_change)(stage);
    }

    fn tick(self: &Rc<Self>) {
        if self.torn_down.get() {
            return;
        }
        let now = self.clock.now_ms();
        let outcome = self.machine.borrow_mut().tick(now);
        match outcome {
            TickOutcome::Idle => return,
            TickOutcome::Updated(_) => {}
            TickOutcome::BecameReady => {
                info!(target_ms = self.machine.borrow().target(), now_ms = now, "launch countdown finished");
                self.arm_chain();
            }
        }
        self.emit();
    }

    fn arm_chain(self: &Rc<Self>) {
        if !self.machine.borrow_mut().arm_chain() {
            return;
        }
        for cue in self.plan.cues() {
            let weak: Weak<Self> = Rc::downgrade(self);
            let action = cue.action;
            let handle = self.scheduler.after(
                cue.at,
                Box::new(move || {
                    if let Some(shared) = weak.upgrade() {
                        shared.fire(action);
                    }
                }),
            );
            self.timers.borrow_mut().push(handle);
        }
        debug!(cues = self.plan.cues().len(), "reveal chain armed");
    }

    fn fire(&self, action: RevealAction) {
        if self.torn_down.get() {
            return;
        }
        let stage = self.machine.borrow_mut().apply(action);
        debug!(?action, ?stage, "reveal cue fired");
        if stage.is_unlocked() {
            info!("chat unlocked");
        }
        self.emit();
    }
}

/// Timer-owning driver around [`Sequencer`].
///
/// Every state change is pushed to the `on_change` callback given at
/// construction. Nothing runs until [`LaunchSequencer::start`].
pub struct LaunchSequencer<S: Scheduler + 'static, C: Clock + 'static> {
    shared: Rc<Shared<S, C>>,
}

impl<S: Scheduler + 'static, C: Clock + 'static> LaunchSequencer<S, C> {
    /// Count down `config.countdown` from the clock's current time.
    pub fn new(scheduler: S, clock: C, config: &LaunchConfig, on_change: impl Fn(Stage) + 'static) -> Self {
        let target = clock.now_ms().saturating_add(millis(config.countdown));
        Self::with_target(scheduler, clock, target, config, on_change)
    }

    /// Count down to a fixed `target` instant.
    pub fn with_target(
        scheduler: S,
        clock: C,
        target: Millis,
        config: &LaunchConfig,
        on_change: impl Fn(Stage) + 'static,
    ) -> Self {
        let shared = Rc::new(Shared {
            machine: RefCell::new(Sequencer::new(target)),
            timers: RefCell::new(TimerGroup::new()),
            scheduler,
            clock,
            plan: RevealPlan::from_config(config),
            tick_period: config.tick_period,
            on_change: Box::new(on_change),
            started: Cell::new(false),
            torn_down: Cell::new(false),
        });
        Self { shared }
    }

    /// Take the first reading now and start the recurring tick.
    ///
    /// Calling it again, or after teardown, does nothing.
    pub fn start(&self) {
        let shared = &self.shared;
        if shared.torn_down.get() || shared.started.replace(true) {
            return;
        }

        let weak = Rc::downgrade(shared);
        let handle = shared.scheduler.every(
            shared.tick_period,
            Box::new(move || {
                if let Some(shared) = weak.upgrade() {
                    shared.tick();
                }
            }),
        );
        shared.timers.borrow_mut().push(handle);
        debug!(target_ms = shared.machine.borrow().target(), "launch sequencer started");

        shared.tick();
    }

    /// Current page stage.
    #[must_use]
    pub fn stage(&self) -> Stage {
        self.shared.machine.borrow().stage()
    }

    /// Launch instant in epoch milliseconds.
    #[must_use]
    pub fn target(&self) -> Millis {
        self.shared.machine.borrow().target()
    }

    /// Cancel every tick and cue timer. Nothing fires afterwards.
    pub fn teardown(&self) {
        if self.shared.torn_down.replace(true) {
            return;
        }
        self.shared.timers.borrow_mut().cancel_all();
        debug!("launch sequencer torn down");
    }
}
