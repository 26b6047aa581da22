use serde::Serialize;

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

/// A response that can also be shown as an aligned table.
pub trait Tabular {
    /// Column headers, in display order.
    fn headers(&self) -> &'static [&'static str];
    /// One row of cells per displayed item, matching [`Tabular::headers`].
    fn rows(&self) -> Vec<Vec<String>>;
}

/// Render a response to a string in the requested format.
pub fn render<T: Serialize + Tabular>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => Ok(render_table(value)),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a response in the requested format.
pub fn output<T: Serialize + Tabular>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

/// Print a JSON document that has no tabular form. `raw` stays on one line.
pub fn output_json<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = if format == OutputFormat::Raw {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    println!("{rendered}");
    Ok(())
}

fn render_table<T: Tabular>(value: &T) -> String {
    let rows = value.rows();
    if rows.is_empty() {
        return String::from("(no rows)");
    }

    let prefs = ui::prefs();
    let options = table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    };
    table::render_entity_table(value.headers(), &rows, options)
}

#[cfg(test)]
mod tests {
    use serde::Serialize;

    use super::{Tabular, render, table::render_entity_table};
    use crate::cli::OutputFormat;

    #[derive(Serialize)]
    struct Example {
        version: &'static str,
        year: i32,
    }

    impl Tabular for Example {
        fn headers(&self) -> &'static [&'static str] {
            &["version", "year"]
        }

        fn rows(&self) -> Vec<Vec<String>> {
            vec![vec![self.version.to_string(), self.year.to_string()]]
        }
    }

    struct Empty;

    impl Tabular for Empty {
        fn headers(&self) -> &'static [&'static str] {
            &["version"]
        }

        fn rows(&self) -> Vec<Vec<String>> {
            Vec::new()
        }
    }

    impl Serialize for Empty {
        fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_unit()
        }
    }

    #[test]
    fn json_render_is_valid_json() {
        let value = Example { version: "14.2", year: 2022 };
        let out = render(&value, OutputFormat::Json).expect("json render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["version"], "14.2");
        assert_eq!(parsed["year"], 2022);
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let value = Example { version: "14.2", year: 2022 };
        let out = render(&value, OutputFormat::Raw).expect("raw render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["version"], "14.2");
        assert!(!out.contains('\n'));
    }

    #[test]
    fn table_render_keeps_header_order() {
        let value = Example { version: "14.2", year: 2022 };
        let out = render(&value, OutputFormat::Table).expect("table render should work");
        let header = out.lines().next().expect("header line");
        let version_at = header.find("version").expect("version column");
        let year_at = header.find("year").expect("year column");
        assert!(version_at < year_at);
        assert!(out.contains("2022"));
    }

    #[test]
    fn table_render_of_nothing_says_so() {
        let out = render(&Empty, OutputFormat::Table).expect("table render should work");
        assert_eq!(out, "(no rows)");
    }

    #[test]
    fn table_alignment_handles_mixed_widths() {
        let headers = ["version", "side", "features"];
        let rows = vec![
            vec!["9.0".to_string(), "left".to_string(), "short".to_string()],
            vec![
                "17.0".to_string(),
                "right".to_string(),
                "a much longer feature list".to_string(),
            ],
        ];

        let table = render_entity_table(
            &headers,
            &rows,
            super::table::TableOptions {
                max_width: None,
                color: false,
            },
        );
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("version"));
        assert!(lines[0].contains("features"));
        assert!(lines[1].chars().all(|c| c == '-'));
    }
}
