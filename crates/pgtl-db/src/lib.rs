//! # pgtl-db
//!
//! libSQL-backed release feeds for pgtimeline.
//!
//! Reads the two record sets the layout engine consumes: the version feed
//! (every release with its notable features, newest first) and the lifespan feed
//! (first and last release per major version line). The tables are populated by
//! an external scraper; nothing in this crate writes release data.
//!
//! Uses the `libsql` crate so the same code reads a local `SQLite` file or a
//! remote Turso/libSQL database.

pub mod error;
pub mod helpers;
mod migrations;
pub mod present;
pub mod repos;
pub mod service;
mod test_support;

use error::DatabaseError;
use libsql::Builder;
use pgtl_config::DatabaseConfig;

/// Database handle for the release tables.
pub struct ReleaseDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
    remote: bool,
}

impl ReleaseDb {
    /// Open a local database at the given path (`":memory:"` for tests).
    ///
    /// Runs migrations automatically so an empty file gets the release schema.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        // Enable foreign keys (must be per-connection in SQLite)
        conn.execute("PRAGMA foreign_keys = ON", ())
            .await
            .map_err(|e| DatabaseError::Migration(format!("PRAGMA foreign_keys: {e}")))?;

        let release_db = Self {
            db,
            conn,
            remote: false,
        };
        release_db.run_migrations().await?;
        tracing::debug!(path, "opened local release database");
        Ok(release_db)
    }

    /// Open a remote libSQL database. The schema is owned by the scraper, so
    /// no migrations run against it.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::LibSql` if the connection cannot be built.
    pub async fn open_remote(url: &str, auth_token: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_remote(url.to_string(), auth_token.to_string())
            .build()
            .await?;
        let conn = db.connect()?;
        tracing::debug!(url, "opened remote release database");
        Ok(Self {
            db,
            conn,
            remote: true,
        })
    }

    /// Open whichever database the configuration points at: remote when a URL
    /// and token are set, the local file otherwise.
    ///
    /// # Errors
    ///
    /// See [`Self::open_local`] and [`Self::open_remote`].
    pub async fn open(config: &DatabaseConfig) -> Result<Self, DatabaseError> {
        if config.is_remote() {
            Self::open_remote(&config.url, &config.auth_token).await
        } else {
            Self::open_local(&config.path).await
        }
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    /// Whether this handle talks to a remote database.
    #[must_use]
    pub const fn is_remote(&self) -> bool {
        self.remote
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper to create an in-memory database for testing.
    async fn test_db() -> ReleaseDb {
        ReleaseDb::open_local(":memory:").await.unwrap()
    }

    #[tokio::test]
    async fn open_local_creates_schema() {
        let db = test_db().await;

        for table in ["postgres_releases", "postgres_features"] {
            let mut rows = db
                .conn()
                .query(
                    "SELECT name FROM sqlite_master WHERE type='table' AND name=?1",
                    [table],
                )
                .await
                .unwrap();
            let row = rows.next().await.unwrap();
            assert!(row.is_some(), "table '{table}' should exist");
        }
        assert!(!db.is_remote());
    }

    #[tokio::test]
    async fn idempotent_migrations() {
        let db = test_db().await;
        // Second run must be a no-op
        db.run_migrations().await.unwrap();
    }

    #[tokio::test]
    async fn features_require_a_release_row() {
        let db = test_db().await;
        let result = db
            .conn()
            .execute(
                "INSERT INTO postgres_features (version, major_version, release_date) VALUES ('99.0', '99', '2099-01-01')",
                (),
            )
            .await;
        assert!(result.is_err(), "foreign key should reject orphan feature rows");
    }

    #[tokio::test]
    async fn open_uses_local_path_without_remote_credentials() {
        let config = DatabaseConfig {
            path: ":memory:".into(),
            url: "libsql://releases.turso.io".into(),
            ..Default::default()
        };
        let db = ReleaseDb::open(&config).await.unwrap();
        assert!(!db.is_remote());
    }
}
