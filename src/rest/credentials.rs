//! Account credential resolution from multiple sources

use log::debug;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::credentials;
use crate::error::{Result, TwilioError};
use crate::rest::transport::Credentials;

/// Credentials file structure
#[derive(Deserialize, Debug)]
struct CredentialsFile {
    #[serde(default)]
    profiles: HashMap<String, ProfileEntry>,
}

/// Single profile entry
#[derive(Deserialize, Debug, Clone)]
struct ProfileEntry {
    account_sid: Option<String>,
    auth_token: Option<String>,
}

/// Credential resolution with fallback logic
pub struct CredentialResolver {
    profile: String,
    path: Option<PathBuf>,
}

impl CredentialResolver {
    /// Create a resolver reading `profile` from the default credentials file
    pub fn new(profile: Option<&str>) -> Self {
        Self {
            profile: profile.unwrap_or(credentials::DEFAULT_PROFILE).to_string(),
            path: Self::get_credentials_path(),
        }
    }

    /// Read profiles from `path` instead of the default location
    pub fn with_credentials_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn profile(&self) -> &str {
        &self.profile
    }

    /// Resolve account SID and auth token, each field independently:
    /// 1. CLI argument (if provided)
    /// 2. Environment variables (TWILIO_ACCOUNT_SID, TWILIO_AUTH_TOKEN)
    /// 3. Profile in the credentials file (~/.twilio/credentials.json)
    pub fn resolve(
        &self,
        cli_account_sid: Option<&str>,
        cli_auth_token: Option<&str>,
    ) -> Result<Credentials> {
        let mut account_sid = pick("account SID", cli_account_sid, credentials::ACCOUNT_SID_ENV);
        let mut auth_token = pick("auth token", cli_auth_token, credentials::AUTH_TOKEN_ENV);

        if account_sid.is_none() || auth_token.is_none() {
            let entry = self.read_profile()?;
            account_sid = account_sid.or(entry.account_sid);
            auth_token = auth_token.or(entry.auth_token);
        }

        match (account_sid, auth_token) {
            (Some(sid), Some(token)) => Ok(Credentials::new(sid, token)),
            _ => Err(TwilioError::CredentialsNotFound(
                self.not_found_message(self.path.as_deref()),
            )),
        }
    }

    /// Profile entry from the credentials file; empty when the file is absent
    fn read_profile(&self) -> Result<ProfileEntry> {
        let empty = ProfileEntry {
            account_sid: None,
            auth_token: None,
        };
        let Some(path) = self.path.as_deref() else {
            return Ok(empty);
        };

        debug!("Looking for credentials file at: {}", path.display());
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(_) => {
                debug!("Credentials file {} not readable", path.display());
                return Ok(empty);
            }
        };

        let file: CredentialsFile = serde_json::from_str(&content).map_err(|e| {
            TwilioError::Credentials(format!(
                "Could not parse credentials file {}: {}",
                path.display(),
                e
            ))
        })?;

        match file.profiles.get(&self.profile) {
            Some(entry) => {
                debug!(
                    "Using profile '{}' from credentials file {}",
                    self.profile,
                    path.display()
                );
                Ok(entry.clone())
            }
            None => Ok(empty),
        }
    }

    fn not_found_message(&self, credentials_path: Option<&Path>) -> String {
        let creds_info = credentials_path
            .map(|p| format!(" or profile '{}' in {}", self.profile, p.display()))
            .unwrap_or_default();

        format!(
            "No account credentials found. Please provide them using one of:\n\
             \n\
             1. CLI arguments:     twctl --account-sid <SID> --auth-token <TOKEN>\n\
             2. Environment vars:  export {}=<SID> {}=<TOKEN>\n\
             3. Credentials file:  {{\"profiles\": {{\"{}\": {{\"account_sid\": ..., \"auth_token\": ...}}}}}}\n\
             \n\
             Checked: CLI, env vars{}",
            credentials::ACCOUNT_SID_ENV,
            credentials::AUTH_TOKEN_ENV,
            self.profile,
            creds_info
        )
    }

    /// Path to the credentials file in the user's home directory
    fn get_credentials_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(credentials::FILE_PATH))
    }
}

fn pick(what: &str, cli: Option<&str>, env_var: &str) -> Option<String> {
    if let Some(value) = cli {
        debug!("Using {} from CLI argument", what);
        return Some(value.to_string());
    }
    match std::env::var(env_var) {
        Ok(value) if !value.is_empty() => {
            debug!("Using {} from {} environment variable", what, env_var);
            Some(value)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn credentials_file(json: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_cli_credentials_take_precedence() {
        let resolver = CredentialResolver::new(None);
        let creds = resolver.resolve(Some("ACcli"), Some("cli-token")).unwrap();
        assert_eq!(creds.username(), "ACcli");
        assert_eq!(creds, Credentials::new("ACcli", "cli-token"));
    }

    #[test]
    fn test_default_profile_name() {
        assert_eq!(CredentialResolver::new(None).profile(), "default");
        assert_eq!(CredentialResolver::new(Some("work")).profile(), "work");
    }

    #[test]
    fn test_profile_from_file() {
        let file = credentials_file(
            r#"{
                "profiles": {
                    "default": { "account_sid": "ACdefault", "auth_token": "t1" },
                    "work": { "account_sid": "ACwork", "auth_token": "t2" }
                }
            }"#,
        );
        let resolver = CredentialResolver::new(Some("work")).with_credentials_path(file.path());
        let entry = resolver.read_profile().unwrap();
        assert_eq!(entry.account_sid.as_deref(), Some("ACwork"));
        assert_eq!(entry.auth_token.as_deref(), Some("t2"));

        // CLI fills in what it has, the profile supplies nothing further
        let creds = resolver.resolve(Some("ACcli"), Some("tok")).unwrap();
        assert_eq!(creds.username(), "ACcli");
    }

    #[test]
    fn test_unknown_profile_is_empty() {
        let file = credentials_file(r#"{"profiles": {}}"#);
        let resolver = CredentialResolver::new(Some("nope")).with_credentials_path(file.path());
        let entry = resolver.read_profile().unwrap();
        assert!(entry.account_sid.is_none());
    }

    #[test]
    fn test_missing_file_is_empty() {
        let resolver =
            CredentialResolver::new(None).with_credentials_path("/nonexistent/credentials.json");
        assert!(resolver.read_profile().unwrap().auth_token.is_none());
    }

    #[test]
    fn test_malformed_file_is_error() {
        let file = credentials_file("{ not json");
        let resolver = CredentialResolver::new(None).with_credentials_path(file.path());
        let err = resolver.read_profile().unwrap_err();
        assert!(matches!(err, TwilioError::Credentials(_)));
        assert!(err.to_string().contains("Could not parse credentials file"));
    }

    #[test]
    fn test_not_found_message_format() {
        let resolver = CredentialResolver::new(Some("work"));
        let msg = resolver.not_found_message(Some(Path::new("/home/u/.twilio/credentials.json")));
        assert!(msg.contains("twctl --account-sid"));
        assert!(msg.contains("TWILIO_ACCOUNT_SID"));
        assert!(msg.contains("TWILIO_AUTH_TOKEN"));
        assert!(msg.contains("profile 'work'"));
        assert!(msg.contains("/home/u/.twilio/credentials.json"));
    }

    #[test]
    fn test_get_credentials_path() {
        let path = CredentialResolver::get_credentials_path();
        assert!(path.is_some());
        assert!(path
            .unwrap()
            .to_string_lossy()
            .ends_with("credentials.json"));
    }
}
