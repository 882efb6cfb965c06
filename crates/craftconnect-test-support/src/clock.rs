//! Test clock — deterministic `Clock` implementation for tests.

use chrono::{DateTime, Utc};
use craftconnect_core::clock::Clock;

/// A clock that always returns a fixed point in time.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// A `FixedClock` pinned to 2026-01-15T10:00:00Z.
#[must_use]
pub fn fixed_clock() -> FixedClock {
    FixedClock(DateTime::from_timestamp(1_768_471_200, 0).unwrap_or_default())
}
