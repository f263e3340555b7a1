//! Public key credential output formatter

use serde::Serialize;

use super::common::{format_date, iso_date, print_rows, print_structured};
use crate::cli::OutputFormat;
use crate::rest::public_keys::PublicKey;

const HEADERS: [&str; 5] = ["SID", "Friendly Name", "Account SID", "Created", "Updated"];

/// Serializable public key for structured output (JSON/YAML)
#[derive(Serialize)]
struct SerializablePublicKey {
    sid: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    friendly_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    account_sid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    date_created: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    date_updated: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<String>,
}

impl From<&PublicKey> for SerializablePublicKey {
    fn from(key: &PublicKey) -> Self {
        Self {
            sid: key.sid.clone(),
            friendly_name: key.friendly_name.clone(),
            account_sid: key.account_sid.clone(),
            date_created: iso_date(key.date_created.as_ref()),
            date_updated: iso_date(key.date_updated.as_ref()),
            url: key.url.clone(),
        }
    }
}

fn build_rows(keys: &[PublicKey]) -> Vec<Vec<String>> {
    keys.iter()
        .map(|key| {
            vec![
                key.sid.clone(),
                key.friendly_name.clone().unwrap_or_default(),
                key.account_sid.clone().unwrap_or_default(),
                format_date(key.date_created.as_ref()),
                format_date(key.date_updated.as_ref()),
            ]
        })
        .collect()
}

/// Output public keys in the specified format
pub fn output_public_keys(keys: &[PublicKey], format: OutputFormat, no_header: bool) {
    match format {
        OutputFormat::Json | OutputFormat::Yaml => {
            let data: Vec<SerializablePublicKey> =
                keys.iter().map(SerializablePublicKey::from).collect();
            print_structured(&data, format);
        }
        _ => print_rows(format, &HEADERS, &build_rows(keys), no_header, "public keys"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_rows_missing_name() {
        let key: PublicKey = serde_json::from_value(serde_json::json!({
            "sid": "CR1",
            "account_sid": "AC1",
            "friendly_name": null,
            "date_created": "2024-01-15T10:00:00Z",
            "date_updated": null
        }))
        .unwrap();

        let rows = build_rows(&[key]);
        assert_eq!(rows[0], vec!["CR1", "", "AC1", "2024-01-15 10:00:00", ""]);
    }
}
