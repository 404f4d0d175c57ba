//! Timer seam between launch logic and the host event loop.
//!
//! DESIGN
//! ======
//! The page runs on one cooperative thread: "waiting" means registering a
//! callback and returning. [`Scheduler`] is that registration primitive. Every
//! registration returns a [`TimerHandle`] that cancels the timer when dropped,
//! mirroring `gloo-timers`, so owners release timers by dropping handles. A
//! [`TimerGroup`] collects the handles of one owner so teardown cancels all of
//! them at once.
//!
//! [`ManualScheduler`] drives the same seam from virtual time. Tests advance
//! it explicitly and observe callbacks firing in due order.

#[cfg(test)]
#[path = "scheduler_test.rs"]
mod scheduler_test;

use std::cell::RefCell;
use std::collections::HashSet;
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

use crate::clock::{Clock, Millis, millis};

/// A callback that fires once.
pub type Task = Box<dyn FnOnce()>;

/// A callback that fires on every period of a recurring timer.
pub type RepeatingTask = Box<dyn FnMut()>;

/// Registers delayed and recurring callbacks on the host event loop.
pub trait Scheduler {
    /// Run `task` once after `delay`.
    fn after(&self, delay: Duration, task: Task) -> TimerHandle;

    /// Run `task` every `period` until the returned handle is dropped.
    fn every(&self, period: Duration, task: RepeatingTask) -> TimerHandle;
}

impl<S: Scheduler + ?Sized> Scheduler for Rc<S> {
    fn after(&self, delay: Duration, task: Task) -> TimerHandle {
        (**self).after(delay, task)
    }

    fn every(&self, period: Duration, task: RepeatingTask) -> TimerHandle {
        (**self).every(period, task)
    }
}

// =============================================================================
// HANDLES
// =============================================================================

/// Ownership of one registered timer. Dropping it cancels the timer.
#[must_use = "dropping a TimerHandle cancels its timer"]
pub struct TimerHandle {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl TimerHandle {
    /// Wrap the host-specific cancellation for one timer.
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self { cancel: Some(Box::new(cancel)) }
    }

    /// A handle with nothing to cancel, for hosts that never fire timers.
    pub fn inert() -> Self {
        Self { cancel: None }
    }

    /// Cancel the timer now.
    pub fn cancel(self) {
        drop(self);
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl fmt::Debug for TimerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimerHandle")
            .field("armed", &self.cancel.is_some())
            .finish()
    }
}

/// All timers registered by one owner.
#[derive(Debug, Default)]
pub struct TimerGroup {
    handles: Vec<TimerHandle>,
}

impl TimerGroup {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Take ownership of a timer.
    pub fn push(&mut self, handle: TimerHandle) {
        self.handles.push(handle);
    }

    /// Number of handles held (fired timers included).
    #[must_use]
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Cancel every held timer.
    pub fn cancel_all(&mut self) {
        self.handles.clear();
    }
}

// =============================================================================
// MANUAL SCHEDULER
// =============================================================================

enum Job {
    Once(Task),
    Every { period: Millis, task: RepeatingTask },
}

struct Entry {
    id: u64,
    due: Millis,
    job: Job,
}

#[derive(Default)]
struct ManualInner {
    now: Millis,
    next_id: u64,
    entries: Vec<Entry>,
    cancelled: HashSet<u64>,
}

impl ManualInner {
    fn register(&mut self, delay: Millis, job: Job) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.entries.push(Entry { id, due: self.now.saturating_add(delay.max(0)), job });
        id
    }

    fn cancel(&mut self, id: u64) {
        self.cancelled.insert(id);
        self.entries.retain(|e| e.id != id);
    }

    /// Remove the earliest entry due at or before `target`, advancing `now` to it.
    fn pop_due(&mut self, target: Millis) -> Option<Entry> {
        let index = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.due <= target)
            .min_by_key(|(_, e)| (e.due, e.id))
            .map(|(i, _)| i)?;
        let entry = self.entries.swap_remove(index);
        self.now = self.now.max(entry.due);
        Some(entry)
    }
}

/// Virtual-time scheduler and clock.
///
/// Nothing fires until [`ManualScheduler::advance`] moves time forward.
/// Callbacks run in due order (registration order on ties) with the scheduler
/// unborrowed, so they may register or cancel further timers.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    inner: Rc<RefCell<ManualInner>>,
}

impl ManualScheduler {
    /// Start virtual time at `now`.
    #[must_use]
    pub fn starting_at(now: Millis) -> Self {
        let scheduler = Self::default();
        scheduler.inner.borrow_mut().now = now;
        scheduler
    }

    /// Number of timers still waiting to fire.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.inner.borrow().entries.len()
    }

    /// Move virtual time forward by `by`, firing everything that falls due.
    pub fn advance(&self, by: Duration) {
        let target = self.now_ms().saturating_add(millis(by));
        self.run_until(target);
    }

    /// Move virtual time forward to `target`, firing everything that falls due.
    pub fn run_until(&self, target: Millis) {
        loop {
            let next = self.inner.borrow_mut().pop_due(target);
            let Some(entry) = next else {
                let mut inner = self.inner.borrow_mut();
                inner.now = inner.now.max(target);
                return;
            };

            match entry.job {
                Job::Once(task) => task(),
                Job::Every { period, mut task } => {
                    task();
                    let mut inner = self.inner.borrow_mut();
                    if !inner.cancelled.contains(&entry.id) {
                        inner.entries.push(Entry {
                            id: entry.id,
                            due: entry.due.saturating_add(period),
                            job: Job::Every { period, task },
                        });
                    }
                }
            }
        }
    }

    fn handle_for(&self, id: u64) -> TimerHandle {
        let inner = Rc::clone(&self.inner);
        TimerHandle::new(move || inner.borrow_mut().cancel(id))
    }
}

impl Scheduler for ManualScheduler {
    fn after(&self, delay: Duration, task: Task) -> TimerHandle {
        let id = self.inner.borrow_mut().register(millis(delay), Job::Once(task));
        self.handle_for(id)
    }

    fn every(&self, period: Duration, task: RepeatingTask) -> TimerHandle {
        let period = millis(period).max(1);
        let id = self.inner.borrow_mut().register(period, Job::Every { period, task });
        self.handle_for(id)
    }
}

impl Clock for ManualScheduler {
    fn now_ms(&self) -> Millis {
        self.inner.borrow().now
    }
}

impl fmt::Debug for ManualScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("ManualScheduler")
            .field("now", &inner.now)
            .field("pending", &inner.entries.len())
            .finish()
    }
}
