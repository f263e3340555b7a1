//! Common traits for API resources

use serde::de::DeserializeOwned;

use crate::rest::request::Domain;

/// A record type decoded from the API
///
/// The associated constants tell the paginator where the resource lives and
/// which JSON key holds its records on list pages.
pub trait Resource: DeserializeOwned + Send {
    /// Human-readable resource name for messages (e.g. "recording")
    const NAME: &'static str;
    /// Key of the records array on list pages
    const RECORDS_KEY: &'static str;
    /// Product domain serving this resource
    const DOMAIN: Domain;

    /// Unique 34-character SID
    fn sid(&self) -> &str;

    /// Human-readable label, falling back to the SID
    fn display_name(&self) -> &str {
        self.sid()
    }

    /// Check if the resource matches by SID or name (substring)
    fn matches_filter(&self, filter: &str) -> bool {
        self.sid().contains(filter) || self.display_name().contains(filter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct TestResource {
        sid: String,
        friendly_name: Option<String>,
    }

    impl Resource for TestResource {
        const NAME: &'static str = "test resource";
        const RECORDS_KEY: &'static str = "things";
        const DOMAIN: Domain = Domain::Api;

        fn sid(&self) -> &str {
            &self.sid
        }

        fn display_name(&self) -> &str {
            self.friendly_name.as_deref().unwrap_or(&self.sid)
        }
    }

    #[test]
    fn test_matches_by_sid() {
        let resource = TestResource {
            sid: "XX123".to_string(),
            friendly_name: Some("main line".to_string()),
        };
        assert!(resource.matches_filter("XX1"));
    }

    #[test]
    fn test_matches_by_name() {
        let resource = TestResource {
            sid: "XX123".to_string(),
            friendly_name: Some("main line".to_string()),
        };
        assert!(resource.matches_filter("main"));
        assert!(!resource.matches_filter("backup"));
    }

    #[test]
    fn test_display_name_fallback() {
        let resource = TestResource {
            sid: "XX123".to_string(),
            friendly_name: None,
        };
        assert_eq!(resource.display_name(), "XX123");
    }
}
