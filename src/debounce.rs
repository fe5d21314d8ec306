//! One-shot debounce timer for the frame loop.
//!
//! egui has no timers of its own, so the debouncer stores a deadline and the
//! owner polls it every frame. Callers pass `now` in explicitly; the app uses
//! `Instant::now()` and tests use fixed offsets.

use std::time::{Duration, Instant};

/// Pending value with the moment it becomes due.
#[derive(Debug, Clone)]
struct Pending<T> {
    value: T,
    deadline: Instant,
}

/// Coalesces rapid updates into a single value released after a quiet period.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<Pending<T>>,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self { delay, pending: None }
    }

    /// Arm the timer for `value`, replacing whatever was pending.
    pub fn schedule(&mut self, value: T, now: Instant) {
        self.pending = Some(Pending {
            value,
            deadline: now + self.delay,
        });
    }

    /// Release the pending value if its deadline has passed.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some(p) if now >= p.deadline => self.pending.take().map(|p| p.value),
            _ => None,
        }
    }

    /// Drop the pending value without releasing it. Returns whether one was armed.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    #[cfg(test)]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Time left until the pending value is due, if any.
    pub fn time_remaining(&self, now: Instant) -> Option<Duration> {
        self.pending
            .as_ref()
            .map(|p| p.deadline.saturating_duration_since(now))
    }
}
