//! Common CLI types shared across commands

use chrono::NaiveDateTime;
use clap::ValueEnum;

use crate::rest::serialize::parse_date_time;

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// ASCII table (default)
    Table,
    /// Comma-separated values
    Csv,
    /// JSON array
    Json,
    /// YAML format
    Yaml,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Csv => write!(f, "csv"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Yaml => write!(f, "yaml"),
        }
    }
}

/// clap value parser for `YYYY-MM-DD` / `YYYY-MM-DDTHH:MM:SS`
pub fn parse_date_arg(value: &str) -> Result<NaiveDateTime, String> {
    parse_date_time(value).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_display() {
        assert_eq!(OutputFormat::Table.to_string(), "table");
        assert_eq!(OutputFormat::Csv.to_string(), "csv");
        assert_eq!(OutputFormat::Json.to_string(), "json");
        assert_eq!(OutputFormat::Yaml.to_string(), "yaml");
    }

    #[test]
    fn test_parse_date_arg() {
        let value = parse_date_arg("2024-03-01").unwrap();
        assert_eq!(value.to_string(), "2024-03-01 00:00:00");
        assert!(parse_date_arg("yesterday").unwrap_err().contains("invalid date"));
    }
}
