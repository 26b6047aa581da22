//! Layout error types for pgtimeline.
//!
//! Errors from the data feeds (`DatabaseError`) live in `pgtl-db`. The CLI is
//! where both converge into a single reported failure.

use thiserror::Error;

/// Errors raised by the layout engine. Layout is all-or-nothing: no partial
/// result accompanies an error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    /// No lifespan records were supplied, so the chart's time range is undefined.
    #[error("Cannot lay out an empty lifespan set: time range is undefined")]
    EmptyInput,

    /// A lifespan ends before it starts (first release after last release).
    #[error(
        "Invalid range for major version {major_version}: ends at {end_pct}% before it starts at {start_pct}%"
    )]
    InvalidRange {
        major_version: String,
        start_pct: f64,
        end_pct: f64,
    },
}
