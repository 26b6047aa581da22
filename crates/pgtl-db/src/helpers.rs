//! Row-to-record parsing helpers.
//!
//! Rows arrive column-indexed and loosely typed. These helpers validate them at
//! the feed boundary so the layout engine only ever sees typed records.

use chrono::NaiveDate;
use pgtl_core::dates::ISO_DATE_FORMAT;
use pgtl_core::enums::Feed;

use crate::error::DatabaseError;

/// Parse a TEXT date column.
///
/// Accepts a plain `YYYY-MM-DD` as well as a datetime whose date part comes
/// first (`"2022-02-10 00:00:00"`, `"2022-02-10T00:00:00Z"`); the time is dropped.
///
/// # Errors
///
/// Returns `DatabaseError::InvalidRow` if no calendar date can be read.
pub fn parse_date(feed: Feed, s: &str) -> Result<NaiveDate, DatabaseError> {
    let s = s.trim();
    let date_part = match s.get(..10) {
        Some(prefix) if s.len() == 10 || matches!(s.as_bytes().get(10), Some(b' ' | b'T')) => prefix,
        _ => s,
    };
    NaiveDate::parse_from_str(date_part, ISO_DATE_FORMAT)
        .map_err(|e| DatabaseError::invalid_row(feed, format!("Failed to parse date '{s}': {e}")))
}

/// Parse the features column: a JSON array of strings. NULL or empty means none.
///
/// # Errors
///
/// Returns `DatabaseError::InvalidRow` if the text is not a JSON string array.
pub fn parse_features(s: Option<&str>) -> Result<Vec<String>, DatabaseError> {
    match s {
        Some(s) if !s.trim().is_empty() => serde_json::from_str(s).map_err(|e| {
            DatabaseError::invalid_row(Feed::Versions, format!("Invalid features JSON: {e}"))
        }),
        _ => Ok(Vec::new()),
    }
}

/// Read a nullable TEXT column. Returns `None` for both SQL NULL and empty string.
///
/// `row.get::<String>(idx)` on a NULL column returns an error, not `""`.
/// You must use `get::<Option<String>>()` for nullable columns.
///
/// # Errors
///
/// Returns `DatabaseError::InvalidRow` if the column read fails.
pub fn get_opt_string(
    feed: Feed,
    row: &libsql::Row,
    idx: i32,
) -> Result<Option<String>, DatabaseError> {
    match row.get::<Option<String>>(idx) {
        Ok(Some(s)) if s.trim().is_empty() => Ok(None),
        Ok(other) => Ok(other),
        Err(e) => Err(DatabaseError::invalid_row(feed, format!("column {idx}: {e}"))),
    }
}

/// Read a TEXT column that must be present, failing fast with the column name.
///
/// # Errors
///
/// Returns `DatabaseError::InvalidRow` if the column is NULL, empty, or unreadable.
pub fn get_required_string(
    feed: Feed,
    row: &libsql::Row,
    idx: i32,
    column: &str,
) -> Result<String, DatabaseError> {
    get_opt_string(feed, row, idx)?
        .ok_or_else(|| DatabaseError::invalid_row(feed, format!("missing {column}")))
}

/// Numeric sort key for a dotted version string: `"9.6.24"` -> `[9, 6, 24]`.
///
/// Non-numeric components (`"8.0beta1"`) contribute their leading digits only.
#[must_use]
pub fn version_key(version: &str) -> Vec<u32> {
    version
        .split('.')
        .map(|part| {
            let digits: String = part.chars().take_while(char::is_ascii_digit).collect();
            digits.parse().unwrap_or(0)
        })
        .collect()
}
