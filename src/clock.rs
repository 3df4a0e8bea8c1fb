use std::time::{Duration, Instant};

/// Fixed-delay tick scheduler.
///
/// The next tick is due one full interval after the previous tick finished,
/// using whatever interval was current when it was scheduled. Display
/// refresh is not involved; callers pass the clock readings in.
#[derive(Debug, Clone, Copy)]
pub struct TickClock {
    next_due: Instant,
}

impl TickClock {
    /// Creates a clock whose first tick is due one `interval` after `now`.
    #[must_use]
    pub fn new(now: Instant, interval: Duration) -> Self {
        Self {
            next_due: now + interval,
        }
    }

    /// Returns true once the scheduled tick time has passed.
    #[must_use]
    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.next_due
    }

    /// Schedules the next tick `interval` after `completed_at`.
    pub fn schedule_next(&mut self, completed_at: Instant, interval: Duration) {
        self.next_due = completed_at + interval;
    }

    /// Time left until the next tick, zero when already due.
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Duration {
        self.next_due.saturating_duration_since(now)
    }
}
