//! Common utilities for output formatters

use chrono::{DateTime, Utc};
use comfy_table::{presets::NOTHING, Table};
use serde::Serialize;

use crate::cli::OutputFormat;

/// Escape a value for CSV output
/// Handles commas, quotes, and newlines according to RFC 4180
pub fn escape_csv(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Display form of an optional record timestamp
pub fn format_date(value: Option<&DateTime<Utc>>) -> String {
    value
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_default()
}

/// RFC 3339 form for structured output
pub fn iso_date(value: Option<&DateTime<Utc>>) -> Option<String> {
    value.map(|dt| dt.to_rfc3339())
}

/// Render rows as a borderless table
pub fn render_table(headers: &[&str], rows: &[Vec<String>], no_header: bool) -> String {
    let mut table = Table::new();
    table.load_preset(NOTHING);
    if !no_header {
        table.set_header(headers.to_vec());
    }
    for row in rows {
        table.add_row(row.clone());
    }
    table.to_string()
}

/// Render rows as CSV; headers are lowercased with underscores
pub fn render_csv(headers: &[&str], rows: &[Vec<String>], no_header: bool) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 1);
    if !no_header {
        let header: Vec<String> = headers
            .iter()
            .map(|h| h.to_lowercase().replace(' ', "_"))
            .collect();
        lines.push(header.join(","));
    }
    for row in rows {
        let fields: Vec<String> = row.iter().map(|f| escape_csv(f)).collect();
        lines.push(fields.join(","));
    }
    lines.join("\n")
}

/// Print rows in a tabular format (table or CSV)
pub fn print_rows(
    format: OutputFormat,
    headers: &[&str],
    rows: &[Vec<String>],
    no_header: bool,
    noun: &str,
) {
    match format {
        OutputFormat::Csv => println!("{}", render_csv(headers, rows, no_header)),
        _ => {
            println!();
            println!("{}", render_table(headers, rows, no_header));
            if !no_header {
                println!("\nTotal: {} {}", rows.len(), noun);
            }
        }
    }
}

/// Print JSON or YAML for any serializable value
pub fn print_structured<T: Serialize + ?Sized>(value: &T, format: OutputFormat) {
    let rendered = match format {
        OutputFormat::Yaml => serde_yml::to_string(value).map_err(|e| e.to_string()),
        _ => serde_json::to_string_pretty(value).map_err(|e| e.to_string()),
    };
    match rendered {
        Ok(text) => println!("{}", text),
        Err(e) => eprintln!("Error serializing output: {}", e),
    }
}
