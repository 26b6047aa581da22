//! Version feed.
//!
//! Every release with its notable features, newest first.

use chrono::NaiveDate;
use pgtl_core::entities::VersionRecord;
use pgtl_core::enums::Feed;

use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, get_required_string, parse_date, parse_features, version_key};
use crate::service::ReleaseStore;

/// Narrowing options for [`ReleaseStore::fetch_version_feed`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VersionFeedQuery {
    /// Only `.0` releases, one per major version line.
    pub first_releases_only: bool,
    /// Keep at most this many records, counted from the newest.
    pub limit: Option<u32>,
}

impl ReleaseStore {
    /// Fetch the version feed, sorted by release date descending.
    ///
    /// Releases sharing a date (PostgreSQL ships several minors at once) are
    /// ordered by numeric version, highest first.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::FeedUnavailable` if the query fails, or
    /// `DatabaseError::InvalidRow` for a row missing its version or date.
    pub async fn fetch_version_feed(
        &self,
        query: &VersionFeedQuery,
    ) -> Result<Vec<VersionRecord>, DatabaseError> {
        let sql = if query.first_releases_only {
            "SELECT version, release_date, features FROM postgres_features WHERE is_first_release = 1"
        } else {
            "SELECT version, release_date, features FROM postgres_features"
        };

        let mut rows = self
            .db()
            .conn()
            .query(sql, ())
            .await
            .map_err(|e| DatabaseError::unavailable(Feed::Versions, &e))?;

        let mut dated = Vec::new();
        while let Some(row) = rows
            .next()
            .await
            .map_err(|e| DatabaseError::unavailable(Feed::Versions, &e))?
        {
            dated.push(row_to_dated_version(&row)?);
        }

        dated.sort_by(|(a_date, a), (b_date, b)| {
            b_date
                .cmp(a_date)
                .then_with(|| version_key(&b.version).cmp(&version_key(&a.version)))
        });
        if let Some(limit) = query.limit {
            dated.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
        }

        tracing::debug!(count = dated.len(), ?query, "fetched version feed");
        Ok(dated.into_iter().map(|(_, record)| record).collect())
    }
}

fn row_to_dated_version(row: &libsql::Row) -> Result<(NaiveDate, VersionRecord), DatabaseError> {
    let version = get_required_string(Feed::Versions, row, 0, "version")?;
    let raw_date = get_required_string(Feed::Versions, row, 1, "release_date")
        .map_err(|e| with_version(e, &version))?;
    let released_on = parse_date(Feed::Versions, &raw_date).map_err(|e| with_version(e, &version))?;
    let features = parse_features(get_opt_string(Feed::Versions, row, 2)?.as_deref())
        .map_err(|e| with_version(e, &version))?;
    Ok((released_on, VersionRecord::new(version, released_on, features)))
}

fn with_version(error: DatabaseError, version: &str) -> DatabaseError {
    match error {
        DatabaseError::InvalidRow { feed, reason } => DatabaseError::InvalidRow {
            feed,
            reason: format!("{version}: {reason}"),
        },
        other => other,
    }
}
