use chrono::{Local, NaiveDateTime};

/// Source of "now" for date-window and timing computations.
///
/// Injected everywhere so the providers stay pure and tests can pin the
/// reference instant.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// Device wall clock in the local timezone
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Pinned clock for deterministic tests
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
