//! Accumulator-based fixed timestep with an anti-spiral reset and a hybrid
//! sleep/spin pacing wait.

use std::time::{Duration, Instant};

use crate::types::{COARSE_SLEEP_MIN, FRAME_PERIOD, RESET_AFTER, SLEEP_MARGIN};

/// Fixed-rate tick scheduler.
///
/// The first tick is due immediately. After each tick, [`FixedStep::advance`]
/// moves the deadline forward by one period, except when the schedule has
/// fallen more than [`RESET_AFTER`] behind (a long pause, a suspended
/// terminal): then the missed ticks are discarded and the next deadline is
/// one period from now.
#[derive(Debug, Clone)]
pub struct FixedStep {
    period: Duration,
    reset_after: Duration,
    next_tick: Instant,
}

impl FixedStep {
    /// Scheduler at the demo's frame rate, first tick due now.
    pub fn new(now: Instant) -> Self {
        Self::with_period(now, FRAME_PERIOD)
    }

    pub fn with_period(now: Instant, period: Duration) -> Self {
        Self {
            period,
            reset_after: RESET_AFTER,
            next_tick: now,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn next_tick(&self) -> Instant {
        self.next_tick
    }

    /// Whether a tick is due at `now`.
    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.next_tick
    }

    /// Time left until the deadline (zero when due).
    pub fn remaining(&self, now: Instant) -> Duration {
        self.next_tick.saturating_duration_since(now)
    }

    /// Advance the schedule after a completed tick.
    pub fn advance(&mut self, now: Instant) {
        if now.saturating_duration_since(self.next_tick) > self.reset_after {
            // Too far behind: drop the backlog instead of replaying it.
            self.next_tick = now + self.period;
        } else {
            self.next_tick += self.period;
        }
    }

    /// Block until the deadline.
    ///
    /// Two-phase wait: while more than [`COARSE_SLEEP_MIN`] remains, sleep to
    /// [`SLEEP_MARGIN`] short of the deadline to yield the CPU; inside that
    /// window, busy-spin for sub-millisecond precision.
    pub fn pace(&self) {
        loop {
            let remaining = self.remaining(Instant::now());
            if remaining.is_zero() {
                return;
            }
            if remaining > COARSE_SLEEP_MIN {
                std::thread::sleep(remaining - SLEEP_MARGIN);
            } else {
                std::hint::spin_loop();
            }
        }
    }
}
