use std::io::IsTerminal;
use std::sync::OnceLock;

use crate::cli::{ColorMode, GlobalFlags, OutputFormat};

/// Narrower `COLUMNS` values are ignored; the table would be unreadable anyway.
const MIN_TERM_WIDTH: usize = 40;

#[derive(Clone, Copy, Debug, Default)]
pub struct UiPrefs {
    pub table_color: bool,
    pub term_width: Option<usize>,
}

static UI_PREFS: OnceLock<UiPrefs> = OnceLock::new();

/// Resolve terminal preferences once, before any output is rendered.
pub fn init(flags: &GlobalFlags) {
    let prefs = UiPrefs {
        table_color: wants_color(
            flags.color,
            flags.format,
            std::io::stdout().is_terminal(),
            std::env::var_os("NO_COLOR").is_some(),
        ),
        term_width: std::env::var("COLUMNS")
            .ok()
            .and_then(|value| value.parse::<usize>().ok())
            .filter(|width| *width >= MIN_TERM_WIDTH),
    };
    let _ = UI_PREFS.set(prefs);
}

#[must_use]
pub fn prefs() -> UiPrefs {
    UI_PREFS.get().copied().unwrap_or_default()
}

/// Only tables are ever colored; JSON output stays machine-clean.
const fn wants_color(mode: ColorMode, format: OutputFormat, is_tty: bool, no_color: bool) -> bool {
    if !matches!(format, OutputFormat::Table) {
        return false;
    }
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => is_tty && !no_color,
    }
}
