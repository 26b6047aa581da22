use chrono::{DateTime, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::dates::start_of_day;
use crate::entities::{LastRelease, LifespanRecord};
use crate::errors::LayoutError;

/// Positions are rounded to 4 decimal places so repeated renders of the same
/// input produce identical coordinates.
const POSITION_SCALE: f64 = 10_000.0;

/// Position of every date when the range is a single instant.
const FULL_WIDTH_PCT: f64 = 100.0;

/// Round a percentage to 4 decimal places.
#[must_use]
pub fn round_position(value: f64) -> f64 {
    (value * POSITION_SCALE).round() / POSITION_SCALE
}

/// The shared horizontal axis of the lifespan chart.
///
/// `earliest` is the oldest first release in view; `latest` is "now" as sampled
/// once by the caller. `earliest <= latest` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TimeRange {
    pub earliest: DateTime<Utc>,
    pub latest: DateTime<Utc>,
}

impl TimeRange {
    /// Build a range, clamping `latest` up to `earliest` when the clock reads
    /// earlier than the oldest release.
    #[must_use]
    pub fn new(earliest: DateTime<Utc>, latest: DateTime<Utc>) -> Self {
        Self {
            earliest,
            latest: latest.max(earliest),
        }
    }

    /// True when the range has zero duration.
    #[must_use]
    pub fn is_instant(&self) -> bool {
        self.earliest == self.latest
    }

    /// Linear position of `instant` between `earliest` (0) and `latest` (100).
    ///
    /// Instants outside the range land outside `[0, 100]`; nothing is clamped.
    /// A zero-duration range places every instant at 100.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn position_of(&self, instant: DateTime<Utc>) -> f64 {
        let span = (self.latest - self.earliest).num_milliseconds();
        if span == 0 {
            return FULL_WIDTH_PCT;
        }
        let elapsed = (instant - self.earliest).num_milliseconds();
        round_position(elapsed as f64 / span as f64 * 100.0)
    }

    /// Position of a calendar date, taken at UTC midnight.
    #[must_use]
    pub fn position_of_date(&self, date: NaiveDate) -> f64 {
        self.position_of(start_of_day(date))
    }

    /// Position of a lifespan end. `Present` is pinned to exactly 100 so open
    /// bars always reach the right edge.
    #[must_use]
    pub fn position_of_last(&self, last: LastRelease) -> f64 {
        match last {
            LastRelease::On(date) => self.position_of_date(date),
            LastRelease::Present => FULL_WIDTH_PCT,
        }
    }
}

/// Compute the chart axis: oldest first release to `now`.
///
/// # Errors
///
/// Returns `LayoutError::EmptyInput` if `lifespans` is empty.
pub fn compute_time_range(
    lifespans: &[LifespanRecord],
    now: DateTime<Utc>,
) -> Result<TimeRange, LayoutError> {
    let earliest = lifespans
        .iter()
        .map(LifespanRecord::first_instant)
        .min()
        .ok_or(LayoutError::EmptyInput)?;
    Ok(TimeRange::new(earliest, now))
}
