//! Lifespan feed.
//!
//! One record per major version line: its first and last release date,
//! with the last date replaced by `Present` for lines that are still active.

use chrono::NaiveDate;
use pgtl_core::entities::LifespanRecord;
use pgtl_core::enums::Feed;

use crate::error::DatabaseError;
use crate::helpers::{get_required_string, parse_date};
use crate::service::ReleaseStore;

const LIFESPAN_QUERY: &str = "SELECT major_version, MIN(release_date), MAX(release_date)
     FROM postgres_releases
     WHERE release_date IS NOT NULL
     GROUP BY major_version
     ORDER BY MIN(release_date) ASC, major_version ASC";

impl ReleaseStore {
    /// Fetch one lifespan per major version, ordered by first release ascending.
    ///
    /// `today` feeds the present policy; it should be the same day the layout
    /// engine uses as "now".
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::FeedUnavailable` if the query fails, or
    /// `DatabaseError::InvalidRow` for a group without a major version or with
    /// an unparsable date.
    pub async fn fetch_lifespan_feed(
        &self,
        today: NaiveDate,
    ) -> Result<Vec<LifespanRecord>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(LIFESPAN_QUERY, ())
            .await
            .map_err(|e| DatabaseError::unavailable(Feed::Lifespans, &e))?;

        let mut lifespans = Vec::new();
        while let Some(row) = rows
            .next()
            .await
            .map_err(|e| DatabaseError::unavailable(Feed::Lifespans, &e))?
        {
            lifespans.push(self.row_to_lifespan(&row, today)?);
        }

        let active = lifespans
            .iter()
            .filter(|l| l.last_release_date.is_present())
            .count();
        tracing::debug!(count = lifespans.len(), active, "fetched lifespan feed");
        Ok(lifespans)
    }

    fn row_to_lifespan(
        &self,
        row: &libsql::Row,
        today: NaiveDate,
    ) -> Result<LifespanRecord, DatabaseError> {
        let major_version = get_required_string(Feed::Lifespans, row, 0, "major_version")?;
        let first = parse_date(
            Feed::Lifespans,
            &get_required_string(Feed::Lifespans, row, 1, "first_release_date")?,
        )?;
        let last = parse_date(
            Feed::Lifespans,
            &get_required_string(Feed::Lifespans, row, 2, "last_release_date")?,
        )?;
        Ok(LifespanRecord::new(
            major_version,
            first,
            self.present_policy().resolve(last, today),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::{insert_release, test_store};

    #[tokio::test]
    async fn release_without_major_version_fails_fast() {
        let store = test_store().await;
        store
            .db()
            .conn()
            .execute(
                "INSERT INTO postgres_releases (version, release_date) VALUES ('6.0', '1997-01-29')",
                (),
            )
            .await
            .unwrap();

        let err = store
            .fetch_lifespan_feed(NaiveDate::from_ymd_opt(2025, 6, 1).unwrap())
            .await
            .unwrap_err();
        assert!(matches!(err, DatabaseError::InvalidRow { feed: Feed::Lifespans, .. }));
    }

    #[tokio::test]
    async fn groups_by_major_version() {
        let store = test_store().await;
        insert_release(&store, "9.0.0", "9.0", "2010-09-20", None).await;
        insert_release(&store, "9.0.1", "9.0", "2010-10-04", None).await;
        insert_release(&store, "9.0.23", "9.0", "2015-10-08", None).await;

        let feed = store
            .fetch_lifespan_feed(NaiveDate::from_ymd_opt(2025, 6, 1).unwrap())
            .await
            .unwrap();
        assert_eq!(feed.len(), 1);
        assert_eq!(feed[0].major_version, "9.0");
        assert_eq!(feed[0].first_release_date.to_string(), "2010-09-20");
        assert_eq!(feed[0].last_release_date.to_string(), "2015-10-08");
    }
}
