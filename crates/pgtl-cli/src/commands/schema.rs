use pgtl_core::entities::{LifespanRecord, VersionRecord};
use pgtl_core::responses::{GanttLayout, TimelineLayout};
use schemars::{Schema, schema_for};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{SchemaArgs, SchemaKind};
use crate::output::output_json;

/// Handle `pgtl schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    output_json(&schema_of(args.kind), flags.format)
}

fn schema_of(kind: SchemaKind) -> Schema {
    match kind {
        SchemaKind::TimelineLayout => schema_for!(TimelineLayout),
        SchemaKind::GanttLayout => schema_for!(GanttLayout),
        SchemaKind::VersionRecord => schema_for!(VersionRecord),
        SchemaKind::LifespanRecord => schema_for!(LifespanRecord),
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pgtl_core::clock::{Clock, FixedClock};
    use pgtl_core::entities::{LastRelease, LifespanRecord, VersionRecord};
    use pgtl_core::layout::{GanttOptions, layout_gantt, layout_timeline};

    use super::schema_of;
    use crate::cli::root_commands::SchemaKind;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn assert_valid(kind: SchemaKind, instance: &serde_json::Value) {
        let schema = serde_json::to_value(schema_of(kind)).unwrap();
        let validator = jsonschema::validator_for(&schema).expect("schema should compile");
        let errors: Vec<String> = validator.iter_errors(instance).map(|e| e.to_string()).collect();
        assert!(errors.is_empty(), "{kind:?} output failed its schema: {errors:?}");
    }

    #[test]
    fn schemas_are_titled_after_their_type() {
        let title = |kind| serde_json::to_value(schema_of(kind)).unwrap()["title"].clone();
        assert_eq!(title(SchemaKind::TimelineLayout), "TimelineLayout");
        assert_eq!(title(SchemaKind::GanttLayout), "GanttLayout");
        assert_eq!(title(SchemaKind::VersionRecord), "VersionRecord");
        assert_eq!(title(SchemaKind::LifespanRecord), "LifespanRecord");
    }

    #[test]
    fn command_output_matches_published_schemas() {
        let timeline = layout_timeline(vec![
            VersionRecord::new("17.0", date(2024, 9, 26), vec!["Incremental backup".into()]),
            VersionRecord::new("16.4", date(2024, 8, 8), Vec::new()),
        ]);
        assert_valid(SchemaKind::TimelineLayout, &serde_json::to_value(&timeline).unwrap());

        let lifespans = vec![
            LifespanRecord::new("16", date(2023, 9, 14), LastRelease::On(date(2024, 8, 8))),
            LifespanRecord::new("17", date(2024, 9, 26), LastRelease::Present),
        ];
        assert_valid(
            SchemaKind::LifespanRecord,
            &serde_json::to_value(&lifespans[1]).unwrap(),
        );

        let now = FixedClock::at_date(date(2025, 6, 1)).now();
        let gantt = layout_gantt(&lifespans, now, &GanttOptions::default()).unwrap();
        assert_valid(SchemaKind::GanttLayout, &serde_json::to_value(&gantt).unwrap());
    }
}
