//! Clock and timer queue behind the strip's time-boxed visual markers.
//!
//! The strip never sleeps or spawns: it records deadlines against an
//! injected [`Clock`] and the host calls back in when the deadline passes.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use crate::strip::state::TabId;

/// Source of the current time.
pub trait Clock {
    fn now(&self) -> Instant;
}

/// Wall clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Clock that only moves when told to.  Clones share the same time, so a
/// test can hand one to the strip and keep one to advance.
#[derive(Clone, Debug)]
pub struct ManualClock {
    base: Instant,
    elapsed: Rc<Cell<Duration>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            base: Instant::now(),
            elapsed: Rc::new(Cell::new(Duration::ZERO)),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.elapsed.set(self.elapsed.get() + by);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.base + self.elapsed.get()
    }
}

/// Work to run once a deadline passes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum TimerTask {
    ClearJustAdded(TabId),
}

/// Fire-and-forget deadlines.  Entries are never cancelled; a task whose
/// tab is gone by the time it fires is simply a no-op for the caller.
#[derive(Debug, Default)]
pub(crate) struct TimerQueue {
    entries: Vec<(Instant, TimerTask)>,
}

impl TimerQueue {
    pub(crate) fn schedule(&mut self, deadline: Instant, task: TimerTask) {
        self.entries.push((deadline, task));
    }

    pub(crate) fn next_deadline(&self) -> Option<Instant> {
        self.entries.iter().map(|(deadline, _)| *deadline).min()
    }

    /// Removes and returns every task due at `now`, earliest first.
    pub(crate) fn take_due(&mut self, now: Instant) -> Vec<TimerTask> {
        let mut due: Vec<(Instant, TimerTask)> = Vec::new();
        self.entries.retain(|entry| {
            if entry.0 <= now {
                due.push(*entry);
                false
            } else {
                true
            }
        });
        due.sort_by_key(|(deadline, _)| *deadline);
        due.into_iter().map(|(_, task)| task).collect()
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}
