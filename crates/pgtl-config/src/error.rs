//! Configuration error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A TOML file or `PGTL_*` variable could not be read into [`crate::PgtlConfig`].
    #[error("Cannot load pgtl configuration: {0}")]
    Figment(#[from] figment::Error),

    /// A field parsed but holds a value pgtl cannot use.
    #[error("Bad value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}
