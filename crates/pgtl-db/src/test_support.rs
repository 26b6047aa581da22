//! Shared test utilities for pgtl-db unit tests.

#[cfg(test)]
pub(crate) mod helpers {
    use crate::present::PresentPolicy;
    use crate::service::ReleaseStore;

    /// Create an in-memory store with the default present policy.
    pub async fn test_store() -> ReleaseStore {
        ReleaseStore::new_local(":memory:", PresentPolicy::default())
            .await
            .unwrap()
    }

    /// Insert one release into both tables, the way the scraper does.
    pub async fn insert_release(
        store: &ReleaseStore,
        version: &str,
        major: &str,
        date: &str,
        features: Option<&str>,
    ) {
        let first = i64::from(version.ends_with(".0"));
        let features = features.map_or(libsql::Value::Null, |f| libsql::Value::Text(f.to_string()));
        store
            .db()
            .conn()
            .execute(
                "INSERT INTO postgres_releases (version, major_version, is_first_release, release_date, content)
                 VALUES (?1, ?2, ?3, ?4, '')",
                libsql::params![version, major, first, date],
            )
            .await
            .unwrap();
        store
            .db()
            .conn()
            .execute(
                "INSERT INTO postgres_features (version, major_version, is_first_release, release_date, features)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                libsql::params![version, major, first, date, features],
            )
            .await
            .unwrap();
    }
}
