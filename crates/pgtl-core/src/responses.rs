//! Output types returned as JSON by `pgtl` commands.
//!
//! These structs define the shape of the layout handed to the presentation layer:
//! `pgtl timeline` emits a [`TimelineLayout`], `pgtl lifespans` a [`GanttLayout`].

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{LastRelease, VersionRecord};
use crate::enums::Side;
use crate::layout::TimeRange;

/// One card on the vertical timeline.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TimelineEntry {
    #[serde(flatten)]
    pub record: VersionRecord,
    /// False when the previous entry already showed the same year.
    pub show_year_label: bool,
    pub side: Side,
}

/// Response from `pgtl timeline`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TimelineLayout {
    pub entries: Vec<TimelineEntry>,
    /// Year labels in display order (one per run of same-year entries).
    pub years: Vec<i32>,
    pub total_entries: u32,
}

/// A vertical year marker on the lifespan chart.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Gridline {
    pub year: i32,
    pub position_pct: f64,
}

/// One row of the lifespan chart.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct GanttBar {
    pub major_version: String,
    pub first_release_date: NaiveDate,
    pub last_release_date: LastRelease,
    pub start_pct: f64,
    pub end_pct: f64,
    pub width_pct: f64,
    pub label_side: Side,
    /// Horizontal anchor of the version label: the bar start for left labels,
    /// the bar end for right labels.
    pub label_pct: f64,
    pub first_release_label: String,
    pub last_release_label: String,
}

/// Response from `pgtl lifespans`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct GanttLayout {
    pub range: TimeRange,
    pub gridlines: Vec<Gridline>,
    /// Bars in display order, newest first release on top.
    pub bars: Vec<GanttBar>,
}
