//! A single pending action that fires once its window has passed without
//! being rescheduled.

use std::time::{Duration, Instant};

/// Trailing edge debouncer, driven by explicit timestamps.
///
/// Not thread-safe; it is owned by whoever owns the state being persisted.
#[derive(Clone, Debug)]
pub struct Debouncer {
    window: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    /// Create a debouncer that fires `window` after the last schedule.
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            deadline: None,
        }
    }

    /// Schedule the action at `now + window`, replacing any pending one.
    /// Returns the new deadline.
    pub fn schedule_at(&mut self, now: Instant) -> Instant {
        let deadline = now + self.window;
        self.deadline = Some(deadline);
        deadline
    }

    /// Drop the pending action, if any. Returns whether one was pending.
    pub fn cancel(&mut self) -> bool {
        self.deadline.take().is_some()
    }

    /// Deadline of the pending action, if any.
    pub fn pending(&self) -> Option<Instant> {
        self.deadline
    }

    /// Time left until the pending action fires.
    pub fn time_until_fire(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    /// Returns `true` exactly once, when the pending action's deadline has
    /// been reached, and clears it.
    pub fn fire_at(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
