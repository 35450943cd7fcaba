//! Deterministic clocks for event timestamps.

use std::sync::atomic::{AtomicI32, Ordering};

use chrono::{DateTime, TimeDelta, Utc};
use trail_core::clock::Clock;

use crate::fixtures::fixed_now;

/// Always reports the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Default for FixedClock {
    fn default() -> Self {
        Self(fixed_now())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Starts at [`fixed_now`] and moves forward by `step` on every reading,
/// like a token that records one event per tick.
#[derive(Debug)]
pub struct SteppingClock {
    step: TimeDelta,
    readings: AtomicI32,
}

impl SteppingClock {
    /// A clock advancing by `step` per reading.
    #[must_use]
    pub fn new(step: TimeDelta) -> Self {
        Self {
            step,
            readings: AtomicI32::new(0),
        }
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> DateTime<Utc> {
        let n = self.readings.fetch_add(1, Ordering::SeqCst);
        fixed_now() + self.step * n
    }
}
