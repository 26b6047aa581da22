//! The timeline layout engine.
//!
//! Pure, deterministic transformations from dated records to normalized display
//! coordinates (0–100 percent of the chart width) and grouping metadata. Nothing
//! here performs I/O or reads the wall clock; "now" arrives as an argument.

mod gantt;
mod grouping;
mod range;

pub use gantt::{
    BarGeometry, DEFAULT_RIGHT_LABEL_COUNT, GanttOptions, compute_bar, generate_year_gridlines,
    label_side_for, layout_gantt, sort_for_display,
};
pub use grouping::{compute_year_grouping, layout_timeline};
pub use range::{TimeRange, compute_time_range, round_position};
