//! Calendar helpers shared by the records and the layout engine.
//!
//! Dates coming from the release tables are plain calendar days. On the chart axis
//! they are treated as UTC midnight, so a release on `2010-09-20` sits at
//! `2010-09-20T00:00:00Z`.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

/// Storage and wire format for calendar dates.
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Display label for an open-ended lifespan.
pub const PRESENT_LABEL: &str = "Present";

/// UTC midnight at the start of `date`.
#[must_use]
pub fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

/// Long en-US form used on timeline cards: `"March 14, 2022"`.
#[must_use]
pub fn long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Short en-US form used in chart tooltips: `"Mar 14, 2022"`.
#[must_use]
pub fn short_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}
