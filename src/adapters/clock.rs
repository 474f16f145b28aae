//! ClockPort implementations: system local time, and a pinned clock for tests.

use chrono::{Local, NaiveDateTime};

use crate::ports::ClockPort;

/// Wall clock. The only place ambient time enters the application.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl ClockPort for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Clock pinned to a fixed instant. Deterministic tests, no time mocking.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl ClockPort for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
