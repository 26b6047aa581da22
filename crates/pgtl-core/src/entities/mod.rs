//! Record structs handed to the layout engine by the feeds.
//!
//! Each record maps to a query over the release tables in the libSQL database.
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for JSON output
//! and schema validation.

mod lifespan;
mod version;

pub use lifespan::{LastRelease, LifespanRecord};
pub use version::VersionRecord;
