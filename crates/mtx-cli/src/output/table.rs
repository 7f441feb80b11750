#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

/// Render an aligned table for string rows. Columns shrink to fit
/// `max_width`, the widest first.
#[must_use]
pub fn render_table(headers: &[&str], rows: &[Vec<String>], options: TableOptions) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
                .max(header.len())
        })
        .collect();

    fit_widths(&mut widths, headers, options.max_width);

    let header_line = headers
        .iter()
        .zip(widths.iter())
        .map(|(header, width)| pad(&truncate_text(header, *width), *width, None))
        .collect::<Vec<_>>()
        .join("  ");
    let divider = "-".repeat(header_line.trim_end().chars().count());

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(header_line.trim_end().to_string());
    lines.push(divider);
    for row in rows {
        let line = widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let value = row.get(index).map_or("-", String::as_str);
                let text = truncate_text(value, *width);
                let color = if options.color { level_color(&text) } else { None };
                pad(&text, *width, color)
            })
            .collect::<Vec<_>>()
            .join("  ");
        lines.push(line.trim_end().to_string());
    }
    lines.join("\n")
}

fn fit_widths(widths: &mut [usize], headers: &[&str], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };
    let separators = widths.len().saturating_sub(1) * 2;

    while widths.iter().sum::<usize>() + separators > max_width {
        let candidate = widths
            .iter()
            .enumerate()
            .filter(|(index, width)| **width > headers[*index].len().max(6))
            .max_by_key(|(_, width)| **width)
            .map(|(index, _)| index);
        let Some(index) = candidate else {
            break;
        };
        widths[index] -= 1;
    }
}

fn truncate_text(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    if width <= 1 {
        return "…".to_string();
    }
    let mut out: String = value.chars().take(width - 1).collect();
    out.push('…');
    out
}

fn pad(value: &str, width: usize, color: Option<&str>) -> String {
    let padding = " ".repeat(width.saturating_sub(value.chars().count()));
    match color {
        Some(code) => format!("\u{1b}[{code}m{value}\u{1b}[0m{padding}"),
        None => format!("{value}{padding}"),
    }
}

/// ANSI color for finding levels and severities.
fn level_color(value: &str) -> Option<&'static str> {
    match value {
        "pass" => Some("32"),
        "warning" | "info" => Some("33"),
        "error" | "critical" => Some("31"),
        _ => None,
    }
}
