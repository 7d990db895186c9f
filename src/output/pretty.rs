//! Pretty key/value cards for single records

use colored::Colorize;

/// Render a titled card of label/value rows with aligned labels.
pub fn format_card(title: &str, rows: &[(&str, String)]) -> String {
    let width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);

    let mut out = format!("{}\n", title.bold());
    for (label, value) in rows {
        let label = format!("{:<width$}", format!("{}:", label), width = width + 1);
        out.push_str(&format!("  {}  {}\n", label.dimmed(), value));
    }
    out.trim_end().to_string()
}
