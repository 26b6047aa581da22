use anyhow::Context;
use chrono::{DateTime, NaiveDate, Utc};
use pgtl_core::clock::{Clock, FixedClock, SystemClock};
use pgtl_core::layout::{GanttOptions, layout_gantt};
use pgtl_core::responses::GanttLayout;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::LifespansArgs;
use crate::context::AppContext;
use crate::output::{Tabular, output};

/// Handle `pgtl lifespans`.
pub async fn handle(args: &LifespansArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    // One sample of "now" feeds both the present policy and the chart's right edge.
    let now = sample_now(args.today);
    let options = GanttOptions {
        right_label_count: args
            .right_labels
            .unwrap_or(ctx.config.layout.right_label_count),
    };

    if flags.limit.is_some() {
        tracing::debug!("--limit does not apply to the lifespan chart; ignoring");
    }

    let lifespans = ctx
        .store
        .fetch_lifespan_feed(now.date_naive())
        .await
        .context("failed to load the lifespan feed")?;
    tracing::debug!(count = lifespans.len(), %now, "lifespan feed loaded");

    let layout = layout_gantt(&lifespans, now, &options).context("cannot lay out the lifespan chart")?;

    output(&layout, flags.format)
}

fn sample_now(today: Option<NaiveDate>) -> DateTime<Utc> {
    match today {
        Some(date) => FixedClock::at_date(date).now(),
        None => SystemClock.now(),
    }
}

fn pct(value: f64) -> String {
    format!("{value:.4}")
}

impl Tabular for GanttLayout {
    fn headers(&self) -> &'static [&'static str] {
        &[
            "major_version",
            "first_release",
            "last_release",
            "start_pct",
            "end_pct",
            "width_pct",
            "label_side",
        ]
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.bars
            .iter()
            .map(|bar| {
                vec![
                    bar.major_version.clone(),
                    bar.first_release_label.clone(),
                    bar.last_release_label.clone(),
                    pct(bar.start_pct),
                    pct(bar.end_pct),
                    pct(bar.width_pct),
                    bar.label_side.to_string(),
                ]
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, Utc};
    use pgtl_core::clock::{Clock, FixedClock};
    use pgtl_core::entities::{LastRelease, LifespanRecord};
    use pgtl_core::layout::{GanttOptions, layout_gantt};
    use pretty_assertions::assert_eq;

    use super::sample_now;
    use crate::output::Tabular;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn frozen_today_is_midnight_utc() {
        let now = sample_now(Some(date(2025, 6, 1)));
        assert_eq!(now, FixedClock::at_date(date(2025, 6, 1)).now());
    }

    #[test]
    fn missing_today_uses_wall_clock() {
        let before = Utc::now();
        let now = sample_now(None);
        assert!(now >= before);
    }

    #[test]
    fn rows_show_dates_and_four_decimal_positions() {
        let lifespans = vec![
            LifespanRecord::new("9.0", date(2010, 9, 20), LastRelease::On(date(2015, 10, 8))),
            LifespanRecord::new("17", date(2024, 9, 26), LastRelease::Present),
        ];
        let now = FixedClock::at_date(date(2025, 6, 1)).now();
        let layout = layout_gantt(&lifespans, now, &GanttOptions { right_label_count: 1 })
            .expect("layout should succeed");

        let rows = layout.rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0][0], "17");
        assert_eq!(rows[0][2], "Present");
        assert_eq!(rows[0][4], "100.0000");
        assert_eq!(rows[0][6], "left");
        assert_eq!(
            rows[1][..4],
            ["9.0", "Sep 20, 2010", "Oct 8, 2015", "0.0000"]
        );
        assert_eq!(rows[1][6], "right");
    }
}
