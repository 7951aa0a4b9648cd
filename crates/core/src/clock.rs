use chrono::{Local, NaiveDateTime};

/// Source of "now" for same-day slot filtering.
///
/// Injected into the availability queries so tests can pin the current
/// moment instead of depending on the wall clock at execution time.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// The local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock frozen at a fixed instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    now: NaiveDateTime,
}

impl FixedClock {
    pub fn new(now: NaiveDateTime) -> Self {
        Self { now }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.now
    }
}
