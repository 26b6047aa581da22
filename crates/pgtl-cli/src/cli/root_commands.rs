use chrono::NaiveDate;
use clap::{Args, Subcommand, ValueEnum};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Vertical release timeline, newest first.
    Timeline(TimelineArgs),
    /// Lifespan chart layout, one bar per major version.
    Lifespans(LifespansArgs),
    /// Print the JSON Schema of an output type.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct TimelineArgs {
    /// Only show the first release (`.0`) of each major version.
    #[arg(long)]
    pub first_releases: bool,
}

#[derive(Clone, Debug, Args)]
pub struct LifespansArgs {
    /// Freeze "now" at midnight UTC of this date (YYYY-MM-DD).
    #[arg(long)]
    pub today: Option<NaiveDate>,

    /// How many of the oldest bars get their label on the right.
    #[arg(long)]
    pub right_labels: Option<usize>,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Output type to describe.
    pub kind: SchemaKind,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum SchemaKind {
    TimelineLayout,
    GanttLayout,
    VersionRecord,
    LifespanRecord,
}
