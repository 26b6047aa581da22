//! Service layer exposing the two read-only feeds.
//!
//! `ReleaseStore` wraps `ReleaseDb` (raw database access) and the
//! `PresentPolicy` that decides which lines are still active. The feed
//! methods are implemented as `impl ReleaseStore` blocks in `repos`.

use pgtl_config::PgtlConfig;

use crate::ReleaseDb;
use crate::error::DatabaseError;
use crate::present::PresentPolicy;

pub struct ReleaseStore {
    db: ReleaseDb,
    present: PresentPolicy,
}

impl ReleaseStore {
    /// Open the configured database with the configured present policy.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn open(config: &PgtlConfig) -> Result<Self, DatabaseError> {
        let db = ReleaseDb::open(&config.database).await?;
        Ok(Self::from_db(
            db,
            PresentPolicy::new(config.layout.active_window_days),
        ))
    }

    /// Create a store over a local database file, or `":memory:"` for tests.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn new_local(path: &str, present: PresentPolicy) -> Result<Self, DatabaseError> {
        let db = ReleaseDb::open_local(path).await?;
        Ok(Self::from_db(db, present))
    }

    /// Create from an existing `ReleaseDb`.
    #[must_use]
    pub const fn from_db(db: ReleaseDb, present: PresentPolicy) -> Self {
        Self { db, present }
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &ReleaseDb {
        &self.db
    }

    #[must_use]
    pub const fn present_policy(&self) -> PresentPolicy {
        self.present
    }
}
