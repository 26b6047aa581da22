//! Lifespan chart layout configuration.

use serde::{Deserialize, Serialize};

/// Oldest lines whose labels sit to the right of their bar.
const fn default_right_label_count() -> usize {
    6
}

/// A major line whose last release is this recent counts as still active.
const fn default_active_window_days() -> u32 {
    180
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LayoutConfig {
    /// How many of the oldest lifespans get right-hand labels.
    #[serde(default = "default_right_label_count")]
    pub right_label_count: usize,

    /// Days since the last release within which a major line is shown as
    /// "present". `0` disables the substitution.
    #[serde(default = "default_active_window_days")]
    pub active_window_days: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            right_label_count: default_right_label_count(),
            active_window_days: default_active_window_days(),
        }
    }
}
