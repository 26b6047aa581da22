//! General application configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Default entry limit for `pgtl timeline`. Unset shows every release.
    #[serde(default)]
    pub default_limit: Option<u32>,
}
