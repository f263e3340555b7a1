//! Page decoding
//!
//! Two envelope shapes are in use:
//!
//! ```text
//! { "<key>": [...], "meta": { "next_page_url": ..., "previous_page_url": ..., "page_size": 50 } }
//! { "<key>": [...], "next_page_uri": "/2010-04-01/...", "page_size": 50, "page": 0 }
//! ```
//!
//! The first carries absolute cursor URLs, the second relative URIs that are
//! resolved against the domain host.

use log::debug;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::{Result, TwilioError};

/// Link to a neighboring page as provided by the server
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageLink {
    /// Absolute URL, used verbatim
    Url(String),
    /// Path relative to the domain host
    Uri(String),
}

impl PageLink {
    /// Absolute URL for this link
    pub fn resolve(&self, base_url: &str) -> String {
        match self {
            PageLink::Url(url) => url.clone(),
            PageLink::Uri(uri) => format!("{}{}", base_url.trim_end_matches('/'), uri),
        }
    }
}

/// One fetched batch of records plus cursor links
#[derive(Debug, Clone)]
pub struct Page<R> {
    records: Vec<R>,
    key: String,
    page_size: Option<u32>,
    page: Option<u32>,
    url: Option<String>,
    first_page: Option<PageLink>,
    next_page: Option<PageLink>,
    previous_page: Option<PageLink>,
}

impl<R: DeserializeOwned> Page<R> {
    /// Decode a page whose records live under `key`
    ///
    /// A single malformed record fails the whole page.
    pub fn from_json(key: &str, body: &str) -> Result<Self> {
        let mut root: Value = serde_json::from_str(body)?;
        let obj = root
            .as_object_mut()
            .ok_or_else(|| TwilioError::Json("page body is not a JSON object".to_string()))?;

        let items = match obj.get_mut(key).map(Value::take) {
            Some(Value::Array(items)) => items,
            Some(_) => {
                return Err(TwilioError::Json(format!("'{}' is not an array", key)));
            }
            None => {
                return Err(TwilioError::Json(format!("missing '{}' array", key)));
            }
        };

        let records = items
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                serde_json::from_value(item).map_err(|e| {
                    TwilioError::Json(format!("record {} in '{}': {}", index, key, e))
                })
            })
            .collect::<Result<Vec<R>>>()?;

        let page = match obj.get("meta").and_then(Value::as_object) {
            Some(meta) => Self {
                records,
                key: key.to_string(),
                page_size: number(meta, "page_size"),
                page: number(meta, "page"),
                url: string(meta, "url"),
                first_page: string(meta, "first_page_url").map(PageLink::Url),
                next_page: string(meta, "next_page_url").map(PageLink::Url),
                previous_page: string(meta, "previous_page_url").map(PageLink::Url),
            },
            None => Self {
                records,
                key: key.to_string(),
                page_size: number(obj, "page_size"),
                page: number(obj, "page"),
                url: string(obj, "uri"),
                first_page: link(obj, "first_page_url", "first_page_uri"),
                next_page: link(obj, "next_page_url", "next_page_uri"),
                previous_page: link(obj, "previous_page_url", "previous_page_uri"),
            },
        };

        debug!(
            "Decoded page of {} '{}' records (next page: {})",
            page.records.len(),
            key,
            page.next_page.is_some()
        );
        Ok(page)
    }
}

impl<R> Page<R> {
    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn into_records(self) -> Vec<R> {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// JSON key the records were read from
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn page_size(&self) -> Option<u32> {
        self.page_size
    }

    /// Zero-based page index, when the server reports one
    pub fn page_number(&self) -> Option<u32> {
        self.page
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn first_page(&self) -> Option<&PageLink> {
        self.first_page.as_ref()
    }

    pub fn next_page(&self) -> Option<&PageLink> {
        self.next_page.as_ref()
    }

    pub fn previous_page(&self) -> Option<&PageLink> {
        self.previous_page.as_ref()
    }

    /// A page without a next link is the terminal page
    pub fn has_next_page(&self) -> bool {
        self.next_page.is_some()
    }

    /// Split into records and the next link
    pub(crate) fn into_parts(self) -> (Vec<R>, Option<PageLink>) {
        (self.records, self.next_page)
    }
}

fn string(obj: &Map<String, Value>, key: &str) -> Option<String> {
    obj.get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn number(obj: &Map<String, Value>, key: &str) -> Option<u32> {
    obj.get(key)
        .and_then(Value::as_u64)
        .and_then(|n| u32::try_from(n).ok())
}

fn link(obj: &Map<String, Value>, url_key: &str, uri_key: &str) -> Option<PageLink> {
    string(obj, url_key)
        .map(PageLink::Url)
        .or_else(|| string(obj, uri_key).map(PageLink::Uri))
}
