use anyhow::Context;
use pgtl_core::layout::layout_timeline;
use pgtl_core::responses::TimelineLayout;
use pgtl_db::repos::versions::VersionFeedQuery;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::TimelineArgs;
use crate::context::AppContext;
use crate::output::{Tabular, output};

/// Handle `pgtl timeline`.
pub async fn handle(args: &TimelineArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let query = VersionFeedQuery {
        first_releases_only: args.first_releases,
        limit: flags.limit.or(ctx.config.general.default_limit),
    };

    let versions = ctx
        .store
        .fetch_version_feed(&query)
        .await
        .context("failed to load the version feed")?;
    tracing::debug!(count = versions.len(), ?query, "version feed loaded");

    output(&layout_timeline(versions), flags.format)
}

impl Tabular for TimelineLayout {
    fn headers(&self) -> &'static [&'static str] {
        &["version", "year", "release_date", "side", "features"]
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.entries
            .iter()
            .map(|entry| {
                let year = if entry.show_year_label {
                    entry.record.year.to_string()
                } else {
                    String::new()
                };
                vec![
                    entry.record.version.clone(),
                    year,
                    entry.record.release_date.clone(),
                    entry.side.to_string(),
                    entry.record.features.join("; "),
                ]
            })
            .collect()
    }
}
