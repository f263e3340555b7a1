//! Dependent phone number operation options

use crate::rest::options::{Options, PageOptions, ReadOptions};
use crate::rest::request::Params;

/// List phone numbers that depend on an address
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReadDependentPhoneNumberOptions {
    /// Account owning the address; the client's account when unset
    pub path_account_sid: Option<String>,
    pub path_address_sid: String,
    pub page_size: Option<u32>,
    pub limit: Option<u64>,
}

impl ReadDependentPhoneNumberOptions {
    pub fn new(path_address_sid: impl Into<String>) -> Self {
        Self {
            path_address_sid: path_address_sid.into(),
            ..Self::default()
        }
    }

    pub fn with_account_sid(mut self, account_sid: impl Into<String>) -> Self {
        self.path_account_sid = Some(account_sid.into());
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

impl Options for ReadDependentPhoneNumberOptions {
    fn params(&self) -> Params {
        let mut params = Params::new();
        self.page_options().push_params(&mut params);
        params
    }
}

impl ReadOptions for ReadDependentPhoneNumberOptions {
    fn page_options(&self) -> PageOptions {
        PageOptions::new(self.page_size, self.limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_page_size_is_sent() {
        let options = ReadDependentPhoneNumberOptions::new("AD1")
            .with_account_sid("AC1")
            .with_page_size(10)
            .with_limit(3);
        let params = options.params();
        assert_eq!(params.len(), 1);
        assert_eq!(params.get("PageSize"), Some("10"));
    }
}
