//! Fixed-interval tick schedule

use std::time::{Duration, Instant};

/// Tracks when the next generation is due.
///
/// A late tick reschedules from the moment it ran; missed ticks are dropped
/// rather than replayed in a burst.
#[derive(Debug, Clone, Copy)]
pub struct Ticker {
    interval: Duration,
    next_due: Instant,
}

impl Ticker {
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            next_due: now + interval,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.next_due
    }

    /// Time left until the next tick, zero once it is due
    pub fn remaining(&self, now: Instant) -> Duration {
        self.next_due.saturating_duration_since(now)
    }

    /// Schedule the next tick one interval after `now`
    pub fn advance(&mut self, now: Instant) {
        self.next_due = now + self.interval;
    }
}
