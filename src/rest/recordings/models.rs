//! Recording data models

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::rest::request::Domain;
use crate::rest::serialize::deserialize_optional_date;
use crate::rest::traits::Resource;

/// Call recording from the REST API
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Recording {
    pub sid: String,
    pub account_sid: Option<String>,
    pub api_version: Option<String>,
    pub call_sid: Option<String>,
    pub conference_sid: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub date_created: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub date_updated: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub start_time: Option<DateTime<Utc>>,
    /// Length in seconds, as reported by the API (a string)
    pub duration: Option<String>,
    pub price: Option<String>,
    pub price_unit: Option<String>,
    pub status: Option<String>,
    pub channels: Option<u32>,
    pub source: Option<String>,
    pub error_code: Option<i64>,
    pub uri: Option<String>,
}

impl Resource for Recording {
    const NAME: &'static str = "recording";
    const RECORDS_KEY: &'static str = "recordings";
    const DOMAIN: Domain = Domain::Api;

    fn sid(&self) -> &str {
        &self.sid
    }

    fn matches_filter(&self, filter: &str) -> bool {
        self.sid.contains(filter)
            || self.call_sid.as_deref().is_some_and(|c| c.contains(filter))
            || self.status.as_deref().is_some_and(|s| s.contains(filter))
    }
}

impl Recording {
    pub fn status(&self) -> &str {
        self.status.as_deref().unwrap_or("")
    }

    pub fn call_sid(&self) -> &str {
        self.call_sid.as_deref().unwrap_or("")
    }

    /// Duration in whole seconds; `None` while the recording is in progress
    pub fn duration_secs(&self) -> Option<u64> {
        self.duration.as_deref().and_then(|d| d.parse().ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recording_json() -> serde_json::Value {
        serde_json::json!({
            "account_sid": "ACaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa",
            "api_version": "2010-04-01",
            "call_sid": "CAaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa",
            "conference_sid": null,
            "date_created": "Fri, 14 Oct 2016 21:56:34 +0000",
            "date_updated": "Fri, 14 Oct 2016 21:56:38 +0000",
            "start_time": "Fri, 14 Oct 2016 21:56:34 +0000",
            "duration": "4",
            "sid": "REaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa",
            "price": "-0.0025",
            "price_unit": "USD",
            "status": "completed",
            "channels": 1,
            "source": "Trunking",
            "error_code": null,
            "uri": "/2010-04-01/Accounts/ACaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa/Recordings/REaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa.json"
        })
    }

    #[test]
    fn test_recording_deserialization() {
        let recording: Recording = serde_json::from_value(recording_json()).unwrap();
        assert_eq!(recording.sid(), "REaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa");
        assert_eq!(recording.status(), "completed");
        assert_eq!(recording.duration_secs(), Some(4));
        assert_eq!(recording.channels, Some(1));
        assert!(recording.conference_sid.is_none());
        assert_eq!(
            recording.date_created.unwrap().to_rfc3339(),
            "2016-10-14T21:56:34+00:00"
        );
    }

    #[test]
    fn test_recording_minimal() {
        let recording: Recording =
            serde_json::from_value(serde_json::json!({ "sid": "RE1" })).unwrap();
        assert!(recording.date_created.is_none());
        assert_eq!(recording.call_sid(), "");
        assert_eq!(recording.duration_secs(), None);
    }

    #[test]
    fn test_recording_filter() {
        let recording: Recording = serde_json::from_value(recording_json()).unwrap();
        assert!(recording.matches_filter("CAaaa"));
        assert!(recording.matches_filter("completed"));
        assert!(!recording.matches_filter("absent"));
    }
}
