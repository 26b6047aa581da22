use chrono::{Datelike, NaiveDate};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::dates::long_date;

/// One released PostgreSQL version as shown on the vertical timeline.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct VersionRecord {
    pub version: String,
    pub year: i32,
    /// Display-only date string, e.g. `"March 14, 2022"`.
    pub release_date: String,
    pub features: Vec<String>,
}

impl VersionRecord {
    /// Build a record from its release date, deriving `year` and the display string.
    #[must_use]
    pub fn new(version: impl Into<String>, released_on: NaiveDate, features: Vec<String>) -> Self {
        Self {
            version: version.into(),
            year: released_on.year(),
            release_date: long_date(released_on),
            features,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_derives_year_and_display_date() {
        let date = NaiveDate::from_ymd_opt(2022, 2, 10).unwrap();
        let record = VersionRecord::new("14.2", date, vec!["JSONB subscripting".into()]);
        assert_eq!(record.year, 2022);
        assert_eq!(record.release_date, "February 10, 2022");
        assert_eq!(record.features.len(), 1);
    }
}
