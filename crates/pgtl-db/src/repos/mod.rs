//! Feed queries over the release tables.
//!
//! Each module adds methods to `ReleaseStore` via `impl ReleaseStore` blocks.

pub mod lifespans;
pub mod versions;
