//! Recording output formatter

use serde::Serialize;

use super::common::{format_date, iso_date, print_rows, print_structured};
use crate::cli::OutputFormat;
use crate::rest::recordings::Recording;

const HEADERS: [&str; 7] = [
    "SID", "Call SID", "Status", "Duration", "Channels", "Source", "Created",
];

/// Serializable recording for structured output (JSON/YAML)
#[derive(Serialize)]
struct SerializableRecording {
    sid: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    account_sid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    call_sid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    conference_sid: Option<String>,
    status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    duration: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    channels: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    price_unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    date_created: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    start_time: Option<String>,
}

impl From<&Recording> for SerializableRecording {
    fn from(r: &Recording) -> Self {
        Self {
            sid: r.sid.clone(),
            account_sid: r.account_sid.clone(),
            call_sid: r.call_sid.clone(),
            conference_sid: r.conference_sid.clone(),
            status: r.status().to_string(),
            duration: r.duration_secs(),
            channels: r.channels,
            source: r.source.clone(),
            price: r.price.clone(),
            price_unit: r.price_unit.clone(),
            date_created: iso_date(r.date_created.as_ref()),
            start_time: iso_date(r.start_time.as_ref()),
        }
    }
}

fn build_rows(recordings: &[Recording]) -> Vec<Vec<String>> {
    recordings
        .iter()
        .map(|r| {
            vec![
                r.sid.clone(),
                r.call_sid().to_string(),
                r.status().to_string(),
                r.duration_secs()
                    .map(|d| format!("{}s", d))
                    .unwrap_or_else(|| "-".to_string()),
                r.channels.map(|c| c.to_string()).unwrap_or_default(),
                r.source.clone().unwrap_or_default(),
                format_date(r.date_created.as_ref()),
            ]
        })
        .collect()
}

/// Output recordings in the specified format
pub fn output_recordings(recordings: &[Recording], format: OutputFormat, no_header: bool) {
    match format {
        OutputFormat::Json | OutputFormat::Yaml => {
            let data: Vec<SerializableRecording> =
                recordings.iter().map(SerializableRecording::from).collect();
            print_structured(&data, format);
        }
        _ => print_rows(format, &HEADERS, &build_rows(recordings), no_header, "recordings"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_recording() -> Recording {
        serde_json::from_value(serde_json::json!({
            "sid": "RE1",
            "call_sid": "CA1",
            "status": "completed",
            "duration": "7",
            "channels": 2,
            "date_created": "Mon, 15 Jan 2024 10:00:00 +0000"
        }))
        .unwrap()
    }

    #[test]
    fn test_build_rows() {
        let rows = build_rows(&[test_recording()]);
        assert_eq!(
            rows[0],
            vec!["RE1", "CA1", "completed", "7s", "2", "", "2024-01-15 10:00:00"]
        );
    }

    #[test]
    fn test_serializable_recording_skips_absent() {
        let data = SerializableRecording::from(&test_recording());
        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json["duration"], 7);
        assert_eq!(json["date_created"], "2024-01-15T10:00:00+00:00");
        assert!(json.get("conference_sid").is_none());
    }

    #[test]
    fn test_output_recordings_all_formats() {
        // Should not panic
        for format in [
            OutputFormat::Table,
            OutputFormat::Csv,
            OutputFormat::Json,
            OutputFormat::Yaml,
        ] {
            output_recordings(&[test_recording()], format, false);
        }
        output_recordings(&[], OutputFormat::Table, true);
    }
}
