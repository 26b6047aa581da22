//! Release database configuration.

use serde::{Deserialize, Serialize};

/// Default local database file, relative to the working directory.
fn default_path() -> String {
    "pgtimeline.db".to_string()
}

/// URL schemes accepted for a remote libSQL database.
const REMOTE_SCHEMES: [&str; 3] = ["libsql://", "https://", "http://"];

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Local libSQL/SQLite file holding `postgres_releases` and `postgres_features`.
    #[serde(default = "default_path")]
    pub path: String,

    /// Remote database URL (e.g., `libsql://releases-myorg.turso.io`).
    /// When set together with `auth_token`, the remote database is used instead of `path`.
    #[serde(default)]
    pub url: String,

    /// Database auth token for the remote URL.
    #[serde(default)]
    pub auth_token: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            url: String::new(),
            auth_token: String::new(),
        }
    }
}

impl DatabaseConfig {
    /// Check if the remote database has the minimum required fields.
    pub fn is_remote(&self) -> bool {
        !self.url.is_empty() && !self.auth_token.is_empty()
    }

    /// A URL without a token usually means a misnamed env var.
    pub fn has_url_without_token(&self) -> bool {
        !self.url.is_empty() && self.auth_token.is_empty()
    }

    /// Check that a configured URL uses a scheme libSQL can connect to.
    pub fn url_scheme_is_supported(&self) -> bool {
        self.url.is_empty() || REMOTE_SCHEMES.iter().any(|scheme| self.url.starts_with(scheme))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_local() {
        let config = DatabaseConfig::default();
        assert_eq!(config.path, "pgtimeline.db");
        assert!(!config.is_remote());
        assert!(!config.has_url_without_token());
        assert!(config.url_scheme_is_supported());
    }

    #[test]
    fn remote_when_url_and_token_set() {
        let config = DatabaseConfig {
            url: "libsql://releases-neon.turso.io".into(),
            auth_token: "token123".into(),
            ..Default::default()
        };
        assert!(config.is_remote());
        assert!(config.url_scheme_is_supported());
    }

    #[test]
    fn url_without_token_is_flagged() {
        let config = DatabaseConfig {
            url: "libsql://releases-neon.turso.io".into(),
            ..Default::default()
        };
        assert!(!config.is_remote());
        assert!(config.has_url_without_token());
    }

    #[test]
    fn postgres_url_is_not_a_supported_scheme() {
        let config = DatabaseConfig {
            url: "postgres://neon.tech/releases".into(),
            ..Default::default()
        };
        assert!(!config.url_scheme_is_supported());
    }
}
