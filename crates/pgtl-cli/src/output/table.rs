use pgtl_core::dates::PRESENT_LABEL;

/// Narrowest a column is squeezed to when the terminal is too small.
const MIN_COLUMN_WIDTH: usize = 6;

const COLUMN_GAP: &str = "  ";

#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

/// Render rows under `headers` as space-aligned columns with a dashed rule.
///
/// Numeric cells (positions, years) are right-aligned. When `max_width` is set,
/// the widest columns give up space first and overflowing cells end in `…`.
#[must_use]
pub fn render_entity_table(headers: &[&str], rows: &[Vec<String>], options: TableOptions) -> String {
    let mut widths = column_widths(headers, rows);
    if let Some(max_width) = options.max_width {
        shrink_to(&mut widths, headers, max_width);
    }

    let header_line = join_cells(headers.iter().zip(&widths).map(|(header, width)| {
        pad(&ellipsize(header, *width), *width, Align::Left)
    }));
    let rule = "-".repeat(header_line.chars().count());

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(header_line);
    lines.push(rule);
    for row in rows {
        lines.push(join_cells(widths.iter().enumerate().map(|(index, width)| {
            let cell = ellipsize(row.get(index).map_or("-", String::as_str), *width);
            let align = if is_numeric(&cell) { Align::Right } else { Align::Left };
            let padded = pad(&cell, *width, align);
            if options.color {
                highlight(&padded, &cell)
            } else {
                padded
            }
        })));
    }
    lines.join("\n")
}

#[derive(Clone, Copy)]
enum Align {
    Left,
    Right,
}

fn column_widths(headers: &[&str], rows: &[Vec<String>]) -> Vec<usize> {
    headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .chain([header.chars().count(), MIN_COLUMN_WIDTH])
                .max()
                .unwrap_or(MIN_COLUMN_WIDTH)
        })
        .collect()
}

/// Narrow the widest shrinkable column one step at a time until the row fits.
fn shrink_to(widths: &mut [usize], headers: &[&str], max_width: usize) {
    let gaps = widths.len().saturating_sub(1) * COLUMN_GAP.len();
    let floor = |index: usize| headers[index].chars().count().max(MIN_COLUMN_WIDTH);

    while widths.iter().sum::<usize>() + gaps > max_width {
        let widest = widths
            .iter()
            .enumerate()
            .filter(|(index, width)| **width > floor(*index))
            .max_by_key(|(_, width)| **width)
            .map(|(index, _)| index);
        let Some(index) = widest else {
            break;
        };
        widths[index] -= 1;
    }
}

fn join_cells(cells: impl Iterator<Item = String>) -> String {
    cells.collect::<Vec<_>>().join(COLUMN_GAP)
}

fn ellipsize(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    let mut out: String = value.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}

fn pad(value: &str, width: usize, align: Align) -> String {
    match align {
        Align::Left => format!("{value:<width$}"),
        Align::Right => format!("{value:>width$}"),
    }
}

fn is_numeric(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty()
        && trimmed
            .chars()
            .all(|ch| ch.is_ascii_digit() || matches!(ch, '-' | '.'))
}

/// Color a padded cell: active lines green, off-chart (negative) positions dim.
fn highlight(padded: &str, cell: &str) -> String {
    let code = if cell == PRESENT_LABEL {
        "32"
    } else if cell.starts_with('-') && is_numeric(cell) {
        "2"
    } else {
        return padded.to_string();
    };
    format!("\u{1b}[{code}m{padded}\u{1b}[0m")
}
