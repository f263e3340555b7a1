//! Recording operation options

use chrono::NaiveDateTime;

use crate::rest::options::{Options, PageOptions, ReadOptions};
use crate::rest::request::Params;
use crate::rest::serialize::push_date_range;

/// Fetch one recording
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchRecordingOptions {
    /// Account owning the recording; the client's account when unset
    pub path_account_sid: Option<String>,
    pub path_sid: String,
}

impl FetchRecordingOptions {
    pub fn new(path_sid: impl Into<String>) -> Self {
        Self {
            path_account_sid: None,
            path_sid: path_sid.into(),
        }
    }

    pub fn with_account_sid(mut self, account_sid: impl Into<String>) -> Self {
        self.path_account_sid = Some(account_sid.into());
        self
    }
}

impl Options for FetchRecordingOptions {
    fn params(&self) -> Params {
        Params::new()
    }
}

/// Delete one recording
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteRecordingOptions {
    pub path_account_sid: Option<String>,
    pub path_sid: String,
}

impl DeleteRecordingOptions {
    pub fn new(path_sid: impl Into<String>) -> Self {
        Self {
            path_account_sid: None,
            path_sid: path_sid.into(),
        }
    }

    pub fn with_account_sid(mut self, account_sid: impl Into<String>) -> Self {
        self.path_account_sid = Some(account_sid.into());
        self
    }
}

impl Options for DeleteRecordingOptions {
    fn params(&self) -> Params {
        Params::new()
    }
}

/// List recordings
///
/// `date_created` is an exact-match filter; when it is set the
/// `date_created_before`/`date_created_after` bounds are not sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReadRecordingOptions {
    pub path_account_sid: Option<String>,
    pub date_created_before: Option<NaiveDateTime>,
    pub date_created: Option<NaiveDateTime>,
    pub date_created_after: Option<NaiveDateTime>,
    pub call_sid: Option<String>,
    pub page_size: Option<u32>,
    pub limit: Option<u64>,
}

impl ReadRecordingOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_account_sid(mut self, account_sid: impl Into<String>) -> Self {
        self.path_account_sid = Some(account_sid.into());
        self
    }

    pub fn with_date_created(mut self, value: NaiveDateTime) -> Self {
        self.date_created = Some(value);
        self
    }

    pub fn with_date_created_before(mut self, value: NaiveDateTime) -> Self {
        self.date_created_before = Some(value);
        self
    }

    pub fn with_date_created_after(mut self, value: NaiveDateTime) -> Self {
        self.date_created_after = Some(value);
        self
    }

    pub fn with_call_sid(mut self, call_sid: impl Into<String>) -> Self {
        self.call_sid = Some(call_sid.into());
        self
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    pub fn with_limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }
}

impl Options for ReadRecordingOptions {
    fn params(&self) -> Params {
        let mut params = Params::new();
        push_date_range(
            &mut params,
            "DateCreated",
            self.date_created.as_ref(),
            self.date_created_before.as_ref(),
            self.date_created_after.as_ref(),
        );
        params.push_opt("CallSid", self.call_sid.as_deref());
        self.page_options().push_params(&mut params);
        params
    }
}

impl ReadOptions for ReadRecordingOptions {
    fn page_options(&self) -> PageOptions {
        PageOptions::new(self.page_size, self.limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::serialize::parse_date_time;

    fn date(s: &str) -> NaiveDateTime {
        parse_date_time(s).unwrap()
    }

    #[test]
    fn test_read_params_order() {
        let options = ReadRecordingOptions::new()
            .with_date_created_before(date("2024-02-01"))
            .with_date_created_after(date("2024-01-01T08:30:00"))
            .with_call_sid("CA123")
            .with_page_size(50);

        let params = options.params();
        let pairs: Vec<(&str, &str)> = params.iter().collect();
        assert_eq!(
            pairs,
            vec![
                ("DateCreated<", "2024-02-01T00:00:00"),
                ("DateCreated>", "2024-01-01T08:30:00"),
                ("CallSid", "CA123"),
                ("PageSize", "50"),
            ]
        );
    }

    #[test]
    fn test_exact_date_suppresses_range() {
        let options = ReadRecordingOptions::new()
            .with_date_created(date("2024-01-15"))
            .with_date_created_before(date("2024-02-01"))
            .with_date_created_after(date("2024-01-01"));

        let params = options.params();
        assert_eq!(params.get("DateCreated"), Some("2024-01-15T00:00:00"));
        assert!(!params.contains_key("DateCreated<"));
        assert!(!params.contains_key("DateCreated>"));
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn test_empty_read_options_have_no_params() {
        assert!(ReadRecordingOptions::new().params().is_empty());
    }

    #[test]
    fn test_limit_is_not_a_param() {
        let options = ReadRecordingOptions::new().with_limit(10);
        assert!(options.params().is_empty());
        assert_eq!(options.page_options().limit, Some(10));
    }

    #[test]
    fn test_fetch_and_delete_have_no_params() {
        assert!(FetchRecordingOptions::new("RE1").params().is_empty());
        let delete = DeleteRecordingOptions::new("RE1").with_account_sid("AC9");
        assert!(delete.params().is_empty());
        assert_eq!(delete.path_account_sid.as_deref(), Some("AC9"));
    }
}
