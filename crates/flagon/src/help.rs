//! Help text rendering.

use flagon_args::{Flag, Kind};

use crate::app::App;

/// Render the column-aligned help text for an app: title line, usage,
/// options table, authors and version.
pub fn render(app: &App) -> String {
    let mut out = String::new();

    if app.description().trim().is_empty() {
        out.push_str(app.name());
        out.push('\n');
    } else {
        out.push_str(&format!("{} - {}\n", app.name(), app.description().trim()));
    }

    if app.usage().trim().is_empty() {
        out.push_str(&format!("\nUsage: {}\n", app.name()));
    } else {
        out.push_str(&format!("\nUsage: {}\n", app.usage().trim()));
    }

    if !app.flags().is_empty() {
        out.push_str("\nOptions:\n");
        let rows: Vec<(String, String)> = app
            .flags()
            .iter()
            .map(|flag| (left_column(flag), right_column(flag)))
            .collect();
        let width = rows.iter().map(|(left, _)| left.len()).max().unwrap_or(0);
        for (left, help) in rows {
            if help.is_empty() {
                out.push_str(&format!("  {left}\n"));
            } else {
                out.push_str(&format!("  {left:width$}  {help}\n"));
            }
        }
    }

    if !app.authors().is_empty() {
        out.push_str(&format!("\nAuthors: {}\n", app.authors().join(", ")));
    }
    if let Some(version) = app.version() {
        out.push_str(&format!("\nVersion: {version}\n"));
    }

    out
}

fn left_column(flag: &Flag) -> String {
    let mut names = Vec::new();
    if let Some(short) = flag.short {
        names.push(format!("-{short}"));
    }
    if let Some(long) = flag.long.as_deref() {
        names.push(format!("--{long}"));
    }
    let mut out = names.join(", ");
    if flag.kind != Kind::Bool {
        let placeholder = flag.kind.to_string().to_ascii_uppercase();
        out.push_str(&format!(" <{placeholder}>"));
    }
    out
}

fn right_column(flag: &Flag) -> String {
    let mut out = flag.help.trim().to_owned();
    if flag.required {
        if out.is_empty() {
            out.push_str("required");
        } else {
            out.push_str(" (required)");
        }
    }
    out
}
