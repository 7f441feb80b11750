use serde::Serialize;

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

/// Serialize `value` as JSON in the requested format. Table output is built
/// by each command from its own rows, so it falls back to pretty JSON here.
pub fn render_json<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json | OutputFormat::Table => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print `value` as JSON in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    println!("{}", render_json(value, format)?);
    Ok(())
}

/// Render rows with the current terminal preferences.
#[must_use]
pub fn table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let prefs = ui::prefs();
    if rows.is_empty() {
        return String::from("(no rows)");
    }
    table::render_table(
        headers,
        rows,
        table::TableOptions {
            max_width: prefs.term_width,
            color: prefs.table_color,
        },
    )
}
