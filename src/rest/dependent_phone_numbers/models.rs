//! Dependent phone number data models

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::rest::request::Domain;
use crate::rest::serialize::deserialize_optional_date;
use crate::rest::traits::Resource;

/// Incoming phone number that depends on an address
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct DependentPhoneNumber {
    pub sid: String,
    pub account_sid: Option<String>,
    pub friendly_name: Option<String>,
    pub phone_number: Option<String>,
    pub api_version: Option<String>,
    pub voice_url: Option<String>,
    pub voice_method: Option<String>,
    pub sms_url: Option<String>,
    pub sms_method: Option<String>,
    pub address_requirements: Option<String>,
    pub emergency_status: Option<String>,
    pub emergency_address_sid: Option<String>,
    /// Voice/SMS/MMS/fax flags, kept as returned
    pub capabilities: Option<serde_json::Value>,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub date_created: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub date_updated: Option<DateTime<Utc>>,
    pub uri: Option<String>,
}

impl Resource for DependentPhoneNumber {
    const NAME: &'static str = "dependent phone number";
    const RECORDS_KEY: &'static str = "dependent_phone_numbers";
    const DOMAIN: Domain = Domain::Api;

    fn sid(&self) -> &str {
        &self.sid
    }

    fn display_name(&self) -> &str {
        self.friendly_name.as_deref().unwrap_or(&self.sid)
    }

    fn matches_filter(&self, filter: &str) -> bool {
        self.sid.contains(filter)
            || self.display_name().contains(filter)
            || self
                .phone_number
                .as_deref()
                .is_some_and(|n| n.contains(filter))
    }
}
