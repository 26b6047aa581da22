use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use schemars::{JsonSchema, Schema, SchemaGenerator, json_schema};
use serde::{Deserialize, Serialize};

use crate::dates::{ISO_DATE_FORMAT, start_of_day};

/// Active date range of one major version line.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct LifespanRecord {
    pub major_version: String,
    pub first_release_date: NaiveDate,
    pub last_release_date: LastRelease,
}

impl LifespanRecord {
    #[must_use]
    pub fn new(
        major_version: impl Into<String>,
        first_release_date: NaiveDate,
        last_release_date: LastRelease,
    ) -> Self {
        Self {
            major_version: major_version.into(),
            first_release_date,
            last_release_date,
        }
    }

    /// The first release as an instant on the chart axis (UTC midnight).
    #[must_use]
    pub fn first_instant(&self) -> DateTime<Utc> {
        start_of_day(self.first_release_date)
    }
}

/// End of a lifespan: a calendar date, or `Present` for a line that is still active.
///
/// Serialized as `"YYYY-MM-DD"` or the literal string `"present"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum LastRelease {
    On(NaiveDate),
    Present,
}

impl LastRelease {
    /// Sentinel string used on the wire for an open-ended lifespan.
    pub const PRESENT: &'static str = "present";

    #[must_use]
    pub const fn is_present(self) -> bool {
        matches!(self, Self::Present)
    }

    /// The concrete date, or `None` for `Present`.
    #[must_use]
    pub const fn date(self) -> Option<NaiveDate> {
        match self {
            Self::On(date) => Some(date),
            Self::Present => None,
        }
    }
}

impl fmt::Display for LastRelease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::On(date) => write!(f, "{}", date.format(ISO_DATE_FORMAT)),
            Self::Present => f.write_str(Self::PRESENT),
        }
    }
}

impl FromStr for LastRelease {
    type Err = chrono::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s == Self::PRESENT {
            return Ok(Self::Present);
        }
        NaiveDate::parse_from_str(s, ISO_DATE_FORMAT).map(Self::On)
    }
}

impl From<LastRelease> for String {
    fn from(value: LastRelease) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for LastRelease {
    type Error = chrono::ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<NaiveDate> for LastRelease {
    fn from(date: NaiveDate) -> Self {
        Self::On(date)
    }
}

impl JsonSchema for LastRelease {
    fn schema_name() -> Cow<'static, str> {
        "LastRelease".into()
    }

    fn json_schema(_generator: &mut SchemaGenerator) -> Schema {
        json_schema!({
            "description": "Last release date (YYYY-MM-DD), or \"present\" for an active line.",
            "type": "string",
            "anyOf": [
                { "format": "date" },
                { "const": "present" }
            ]
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn present_sentinel_parses_and_displays() {
        let last: LastRelease = "present".parse().unwrap();
        assert!(last.is_present());
        assert_eq!(last.date(), None);
        assert_eq!(last.to_string(), "present");
    }

    #[test]
    fn calendar_date_parses_and_displays() {
        let last: LastRelease = " 2010-10-14 ".parse().unwrap();
        assert_eq!(last, LastRelease::On(date(2010, 10, 14)));
        assert_eq!(last.to_string(), "2010-10-14");
    }

    #[test]
    fn garbage_is_rejected() {
        assert!("Present day".parse::<LastRelease>().is_err());
        assert!("2010/10/14".parse::<LastRelease>().is_err());
    }

    #[test]
    fn serde_uses_string_form() {
        let record = LifespanRecord::new("17", date(2024, 9, 26), LastRelease::Present);
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["first_release_date"], "2024-09-26");
        assert_eq!(json["last_release_date"], "present");

        let recovered: LifespanRecord = serde_json::from_value(json).unwrap();
        assert_eq!(recovered, record);
    }

    #[test]
    fn first_instant_is_utc_midnight() {
        let record = LifespanRecord::new("9.0", date(2010, 9, 20), date(2010, 10, 14).into());
        assert_eq!(record.first_instant().to_rfc3339(), "2010-09-20T00:00:00+00:00");
    }
}
