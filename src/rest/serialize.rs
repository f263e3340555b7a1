//! Parameter serialization rules and record date parsing

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};

use crate::config::api;
use crate::error::{Result, TwilioError};
use crate::rest::request::Params;

/// Format a date filter value as `yyyy-MM-ddTHH:mm:ss`
pub fn format_date_time(value: &NaiveDateTime) -> String {
    value.format(api::DATE_TIME_FORMAT).to_string()
}

/// Append an exact/range date filter for `field`
///
/// When `exact` is set only `field` is emitted and both bounds are dropped.
/// Otherwise `field<` carries `before` and `field>` carries `after`.
pub fn push_date_range(
    params: &mut Params,
    field: &str,
    exact: Option<&NaiveDateTime>,
    before: Option<&NaiveDateTime>,
    after: Option<&NaiveDateTime>,
) {
    if let Some(exact) = exact {
        params.push(field, format_date_time(exact));
        return;
    }
    if let Some(before) = before {
        params.push(format!("{}<", field), format_date_time(before));
    }
    if let Some(after) = after {
        params.push(format!("{}>", field), format_date_time(after));
    }
}

/// Parse a user-supplied date: `YYYY-MM-DD` or `YYYY-MM-DDTHH:MM:SS`
pub fn parse_date_time(input: &str) -> Result<NaiveDateTime> {
    let input = input.trim();
    if let Ok(value) = NaiveDateTime::parse_from_str(input, api::DATE_TIME_FORMAT) {
        return Ok(value);
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .ok_or_else(|| {
            TwilioError::Config(format!(
                "invalid date '{}', expected YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS",
                input
            ))
        })
}

/// Parse a record timestamp in either RFC 2822 or RFC 3339 form
pub fn parse_record_date(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc2822(value)
        .or_else(|_| DateTime::parse_from_rfc3339(value))
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// serde helper for optional record timestamps
pub fn deserialize_optional_date<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw {
        None => Ok(None),
        Some(s) if s.is_empty() => Ok(None),
        Some(s) => parse_record_date(&s)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp '{}'", s))),
    }
}
