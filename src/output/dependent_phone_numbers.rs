//! Dependent phone number output formatter

use serde::Serialize;

use super::common::{format_date, iso_date, print_rows, print_structured};
use crate::cli::OutputFormat;
use crate::rest::dependent_phone_numbers::DependentPhoneNumber;

const HEADERS: [&str; 5] = ["SID", "Phone Number", "Friendly Name", "Emergency", "Created"];

#[derive(Serialize)]
struct SerializableDependentPhoneNumber {
    sid: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    friendly_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    account_sid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    emergency_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    capabilities: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    date_created: Option<String>,
}

impl From<&DependentPhoneNumber> for SerializableDependentPhoneNumber {
    fn from(n: &DependentPhoneNumber) -> Self {
        Self {
            sid: n.sid.clone(),
            phone_number: n.phone_number.clone(),
            friendly_name: n.friendly_name.clone(),
            account_sid: n.account_sid.clone(),
            emergency_status: n.emergency_status.clone(),
            capabilities: n.capabilities.clone(),
            date_created: iso_date(n.date_created.as_ref()),
        }
    }
}

fn build_rows(numbers: &[DependentPhoneNumber]) -> Vec<Vec<String>> {
    numbers
        .iter()
        .map(|n| {
            vec![
                n.sid.clone(),
                n.phone_number.clone().unwrap_or_default(),
                n.friendly_name.clone().unwrap_or_default(),
                n.emergency_status.clone().unwrap_or_else(|| "-".to_string()),
                format_date(n.date_created.as_ref()),
            ]
        })
        .collect()
}

/// Output dependent phone numbers in the specified format
pub fn output_dependent_phone_numbers(
    numbers: &[DependentPhoneNumber],
    format: OutputFormat,
    no_header: bool,
) {
    match format {
        OutputFormat::Json | OutputFormat::Yaml => {
            let data: Vec<SerializableDependentPhoneNumber> = numbers
                .iter()
                .map(SerializableDependentPhoneNumber::from)
                .collect();
            print_structured(&data, format);
        }
        _ => print_rows(
            format,
            &HEADERS,
            &build_rows(numbers),
            no_header,
            "phone numbers",
        ),
    }
}
