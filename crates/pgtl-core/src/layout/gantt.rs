use chrono::{DateTime, Datelike, NaiveDate, Utc};

use super::range::{TimeRange, compute_time_range, round_position};
use crate::dates::{PRESENT_LABEL, short_date};
use crate::entities::{LastRelease, LifespanRecord};
use crate::enums::Side;
use crate::errors::LayoutError;
use crate::responses::{GanttBar, GanttLayout, Gridline};

/// Number of oldest lifespans whose labels go to the right of the bar.
///
/// The oldest lines cluster at the left edge of the chart, where a left-hand label
/// would run off the canvas. This is a fixed positional cutoff tuned for one chart
/// width and font size, not a measured text-collision check.
pub const DEFAULT_RIGHT_LABEL_COUNT: usize = 6;

/// Tunables for [`layout_gantt`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GanttOptions {
    pub right_label_count: usize,
}

impl Default for GanttOptions {
    fn default() -> Self {
        Self {
            right_label_count: DEFAULT_RIGHT_LABEL_COUNT,
        }
    }
}

/// Horizontal extent of one lifespan bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarGeometry {
    pub start_pct: f64,
    pub end_pct: f64,
    pub width_pct: f64,
}

/// One gridline per calendar year touched by the range, at January 1.
///
/// The first gridline is negative unless `earliest` falls on January 1.
#[must_use]
pub fn generate_year_gridlines(range: &TimeRange) -> Vec<Gridline> {
    (range.earliest.year()..=range.latest.year())
        .filter_map(|year| NaiveDate::from_ymd_opt(year, 1, 1))
        .map(|new_year| Gridline {
            year: new_year.year(),
            position_pct: range.position_of_date(new_year),
        })
        .collect()
}

/// Place one lifespan on the axis.
///
/// # Errors
///
/// Returns `LayoutError::InvalidRange` if the bar would have negative width,
/// which means the feed delivered a first release after the last one (or a
/// first release after "now" on an open-ended line).
pub fn compute_bar(lifespan: &LifespanRecord, range: &TimeRange) -> Result<BarGeometry, LayoutError> {
    let start_pct = range.position_of_date(lifespan.first_release_date);
    let end_pct = range.position_of_last(lifespan.last_release_date);
    let width_pct = round_position(end_pct - start_pct);

    let reversed = lifespan
        .last_release_date
        .date()
        .is_some_and(|last| last < lifespan.first_release_date);
    if reversed || width_pct < 0.0 {
        return Err(LayoutError::InvalidRange {
            major_version: lifespan.major_version.clone(),
            start_pct,
            end_pct,
        });
    }

    Ok(BarGeometry {
        start_pct,
        end_pct,
        width_pct,
    })
}

/// Order lifespans for display: newest first release on top.
///
/// Ties on the first release date fall back to the major version, descending,
/// so the order never depends on feed order.
#[must_use]
pub fn sort_for_display(lifespans: &[LifespanRecord]) -> Vec<LifespanRecord> {
    let mut ordered = lifespans.to_vec();
    ordered.sort_by(|a, b| {
        b.first_release_date
            .cmp(&a.first_release_date)
            .then_with(|| b.major_version.cmp(&a.major_version))
    });
    ordered
}

/// Label side for the row at `index` out of `count` display-ordered rows.
#[must_use]
pub const fn label_side_for(index: usize, count: usize, right_label_count: usize) -> Side {
    if index < count.saturating_sub(right_label_count) {
        Side::Left
    } else {
        Side::Right
    }
}

/// Lay out the whole lifespan chart against a single sampled `now`.
///
/// # Errors
///
/// Returns `LayoutError::EmptyInput` for an empty set, or the first
/// `LayoutError::InvalidRange` encountered.
pub fn layout_gantt(
    lifespans: &[LifespanRecord],
    now: DateTime<Utc>,
    options: &GanttOptions,
) -> Result<GanttLayout, LayoutError> {
    let range = compute_time_range(lifespans, now)?;
    let ordered = sort_for_display(lifespans);
    let count = ordered.len();

    let bars = ordered
        .into_iter()
        .enumerate()
        .map(|(index, lifespan)| {
            let geometry = compute_bar(&lifespan, &range)?;
            let label_side = label_side_for(index, count, options.right_label_count);
            Ok(build_bar(lifespan, geometry, label_side))
        })
        .collect::<Result<Vec<_>, LayoutError>>()?;

    Ok(GanttLayout {
        gridlines: generate_year_gridlines(&range),
        range,
        bars,
    })
}

fn build_bar(lifespan: LifespanRecord, geometry: BarGeometry, label_side: Side) -> GanttBar {
    let label_pct = match label_side {
        Side::Left => geometry.start_pct,
        Side::Right => geometry.end_pct,
    };
    let last_release_label = match lifespan.last_release_date {
        LastRelease::On(date) => short_date(date),
        LastRelease::Present => PRESENT_LABEL.to_string(),
    };

    GanttBar {
        first_release_label: short_date(lifespan.first_release_date),
        last_release_label,
        major_version: lifespan.major_version,
        first_release_date: lifespan.first_release_date,
        last_release_date: lifespan.last_release_date,
        start_pct: geometry.start_pct,
        end_pct: geometry.end_pct,
        width_pct: geometry.width_pct,
        label_side,
        label_pct,
    }
}
