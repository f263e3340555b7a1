//! Public key operation options

use crate::rest::options::{Options, PageOptions, ReadOptions};
use crate::rest::request::Params;

/// List public keys of the authenticated account
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReadPublicKeyOptions {
    pub page_size: Option<u32>,
    pub limit: Option<u64>,
}

impl ReadPublicKeyOptions {
    pub fn new() -> Self {
        Self::default()
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

impl Options for ReadPublicKeyOptions {
    fn params(&self) -> Params {
        let mut params = Params::new();
        self.page_options().push_params(&mut params);
        params
    }
}

impl ReadOptions for ReadPublicKeyOptions {
    fn page_options(&self) -> PageOptions {
        PageOptions::new(self.page_size, self.limit)
    }
}

/// Register a new public key
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreatePublicKeyOptions {
    /// PEM-encoded public key
    pub public_key: String,
    pub friendly_name: Option<String>,
    /// Subaccount the key belongs to
    pub account_sid: Option<String>,
}

impl CreatePublicKeyOptions {
    pub fn new(public_key: impl Into<String>) -> Self {
        Self {
            public_key: public_key.into(),
            ..Self::default()
        }
    }

    pub fn with_friendly_name(mut self, friendly_name: impl Into<String>) -> Self {
        self.friendly_name = Some(friendly_name.into());
        self
    }

    pub fn with_account_sid(mut self, account_sid: impl Into<String>) -> Self {
        self.account_sid = Some(account_sid.into());
        self
    }
}

impl Options for CreatePublicKeyOptions {
    fn params(&self) -> Params {
        let mut params = Params::new();
        params.push("PublicKey", self.public_key.as_str());
        params.push_opt("FriendlyName", self.friendly_name.as_deref());
        params.push_opt("AccountSid", self.account_sid.as_deref());
        params
    }
}

/// Fetch one public key
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchPublicKeyOptions {
    pub path_sid: String,
}

impl FetchPublicKeyOptions {
    pub fn new(path_sid: impl Into<String>) -> Self {
        Self {
            path_sid: path_sid.into(),
        }
    }
}

impl Options for FetchPublicKeyOptions {
    fn params(&self) -> Params {
        Params::new()
    }
}

/// Rename a public key
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdatePublicKeyOptions {
    pub path_sid: String,
    pub friendly_name: Option<String>,
}

impl UpdatePublicKeyOptions {
    pub fn new(path_sid: impl Into<String>) -> Self {
        Self {
            path_sid: path_sid.into(),
            friendly_name: None,
        }
    }

    pub fn with_friendly_name(mut self, friendly_name: impl Into<String>) -> Self {
        self.friendly_name = Some(friendly_name.into());
        self
    }
}

impl Options for UpdatePublicKeyOptions {
    fn params(&self) -> Params {
        let mut params = Params::new();
        params.push_opt("FriendlyName", self.friendly_name.as_deref());
        params
    }
}

/// Delete one public key
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeletePublicKeyOptions {
    pub path_sid: String,
}

impl DeletePublicKeyOptions {
    pub fn new(path_sid: impl Into<String>) -> Self {
        Self {
            path_sid: path_sid.into(),
        }
    }
}

impl Options for DeletePublicKeyOptions {
    fn params(&self) -> Params {
        Params::new()
    }
}
