use crate::entities::VersionRecord;
use crate::enums::Side;
use crate::responses::{TimelineEntry, TimelineLayout};

/// Pair each record with its year-label flag and card side.
///
/// Records keep the caller's order. A year label is shown for the first record and
/// whenever the year differs from the previous record's.
#[must_use]
pub fn compute_year_grouping(versions: Vec<VersionRecord>) -> Vec<TimelineEntry> {
    let mut previous_year = None;
    versions
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            let show_year_label = previous_year != Some(record.year);
            previous_year = Some(record.year);
            TimelineEntry {
                record,
                show_year_label,
                side: Side::alternating(index),
            }
        })
        .collect()
}

/// Build the full vertical timeline response.
#[must_use]
pub fn layout_timeline(versions: Vec<VersionRecord>) -> TimelineLayout {
    let entries = compute_year_grouping(versions);
    let years = entries
        .iter()
        .filter(|entry| entry.show_year_label)
        .map(|entry| entry.record.year)
        .collect();
    let total_entries = u32::try_from(entries.len()).unwrap_or(u32::MAX);
    TimelineLayout {
        entries,
        years,
        total_entries,
    }
}
