//! Source of "now" for a layout computation.
//!
//! The chart's right edge is the current time. The caller samples a [`Clock`]
//! exactly once per invocation and passes the instant into the layout engine, so
//! every position in one rendered chart shares the same reference point.

use chrono::{DateTime, NaiveDate, Utc};

use crate::dates::start_of_day;

pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A frozen instant, for reproducible output and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(DateTime<Utc>);

impl FixedClock {
    #[must_use]
    pub const fn new(instant: DateTime<Utc>) -> Self {
        Self(instant)
    }

    /// Freeze the clock at UTC midnight of `date`.
    #[must_use]
    pub fn at_date(date: NaiveDate) -> Self {
        Self(start_of_day(date))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
