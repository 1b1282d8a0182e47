// Server-side time source.
//
// Purpose
// - Give handlers one trusted reading of "now" per request.
//
// Boundaries
// - Client-supplied timestamps never reach admission checks; only a Clock does.

use chrono::{Local, NaiveDate, NaiveDateTime, Timelike};

pub trait Clock: Send + Sync {
    /// Current local date and time, truncated to whole seconds.
    fn now(&self) -> NaiveDateTime;

    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

#[derive(Debug, Clone, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        let now = Local::now().naive_local();
        now.with_nanosecond(0).unwrap_or(now)
    }
}

pub mod fixed;
