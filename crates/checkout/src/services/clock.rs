//! System clock.

use chrono::{Local, NaiveDateTime};

use super::Clock;

/// Reads the machine's local time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}
