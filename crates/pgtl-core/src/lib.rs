//! # pgtl-core
//!
//! Release records, the timeline layout engine, and error types for pgtimeline.
//!
//! This crate provides the foundational types shared across all pgtimeline crates:
//! - Record structs for released versions and major version lifespans
//! - Side enums and feed identifiers
//! - The injected clock used to sample "now" once per layout
//! - The pure layout engine (year grouping, time range, positions, gridlines, bars)
//! - Output types rendered by the `pgtl` CLI
//! - Layout error types

pub mod clock;
pub mod dates;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod layout;
pub mod responses;
