//! Raw HTTP responses and the API error envelope

use serde::Deserialize;

use crate::config::api;
use crate::error::{Result, TwilioError};

/// Status and body returned by a transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub body: String,
}

impl Response {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Status lies within [200, 204]
    pub fn is_success(&self) -> bool {
        (api::SUCCESS_MIN..=api::SUCCESS_MAX).contains(&self.status)
    }
}

/// Error envelope: `{ "code", "message", "more_info", "status" }`
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct RestException {
    #[serde(default)]
    pub code: Option<i64>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub more_info: Option<String>,
    #[serde(default)]
    pub status: Option<u16>,
}

impl RestException {
    /// Parse an error envelope; `None` when the body is not a JSON object
    pub fn from_json(body: &str) -> Option<Self> {
        let value: serde_json::Value = serde_json::from_str(body).ok()?;
        if !value.is_object() {
            return None;
        }
        serde_json::from_value(value).ok()
    }
}

/// Turn a non-success response into an `ApiError`
///
/// `action` completes the fallback message, e.g. "read records" gives
/// "Unable to read records, 404".
pub fn ensure_success(response: &Response, action: &str) -> Result<()> {
    if response.is_success() {
        return Ok(());
    }

    let exception = RestException::from_json(&response.body)
        .ok_or_else(|| TwilioError::api(response.status, "Server Error, no content"))?;

    Err(TwilioError::Api {
        code: exception.code,
        status: response.status,
        message: exception
            .message
            .unwrap_or_else(|| format!("Unable to {}, {}", action, response.status)),
        more_info: exception.more_info,
    })
}
