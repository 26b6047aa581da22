//! Database error types for pgtl-db.

use pgtl_core::enums::Feed;
use thiserror::Error;

/// Errors from opening the release database or reading a feed.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// A feed query failed in transport or execution. Not retried here.
    #[error("{feed} feed unavailable: {reason}")]
    FeedUnavailable { feed: Feed, reason: String },

    /// A row was missing a required field or held an unparsable value.
    #[error("Invalid {feed} row: {reason}")]
    InvalidRow { feed: Feed, reason: String },

    /// Schema migration failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// Underlying libSQL error (open/connect).
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),
}

impl DatabaseError {
    pub(crate) fn unavailable(feed: Feed, error: &libsql::Error) -> Self {
        Self::FeedUnavailable {
            feed,
            reason: error.to_string(),
        }
    }

    pub(crate) fn invalid_row(feed: Feed, reason: impl Into<String>) -> Self {
        Self::InvalidRow {
            feed,
            reason: reason.into(),
        }
    }
}
