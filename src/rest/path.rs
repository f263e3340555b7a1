//! Path template rendering
//!
//! Templates use `{Name}` placeholders, e.g.
//! `/2010-04-01/Accounts/{AccountSid}/Recordings/{Sid}.json`.

use crate::error::{Result, TwilioError};

/// Substitute placeholders in `template` with the given values
///
/// Values are percent-encoded. A placeholder without a matching value, or an
/// unterminated `{`, is an error.
pub fn render(template: &str, values: &[(&str, &str)]) -> Result<String> {
    let mut out = String::with_capacity(template.len() + 32);
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let end = after.find('}').ok_or_else(|| {
            TwilioError::Template(format!("unterminated placeholder in '{}'", template))
        })?;
        let name = &after[..end];

        let value = values
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| *value)
            .ok_or_else(|| {
                TwilioError::Template(format!("no value for '{{{}}}' in '{}'", name, template))
            })?;
        out.push_str(&urlencoding::encode(value));

        rest = &after[end + 1..];
    }

    out.push_str(rest);
    Ok(out)
}

/// Pick the explicit account SID, falling back to the client's account
pub fn account_sid_or<'a>(explicit: Option<&'a str>, ambient: &'a str) -> &'a str {
    explicit.unwrap_or(ambient)
}
