//! Public key credential data models

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::rest::request::Domain;
use crate::rest::serialize::deserialize_optional_date;
use crate::rest::traits::Resource;

/// Public key credential (Accounts API)
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct PublicKey {
    pub sid: String,
    pub account_sid: Option<String>,
    pub friendly_name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub date_created: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub date_updated: Option<DateTime<Utc>>,
    pub url: Option<String>,
}

impl Resource for PublicKey {
    const NAME: &'static str = "public key";
    const RECORDS_KEY: &'static str = "credentials";
    const DOMAIN: Domain = Domain::Accounts;

    fn sid(&self) -> &str {
        &self.sid
    }

    fn display_name(&self) -> &str {
        self.friendly_name.as_deref().unwrap_or(&self.sid)
    }
}
