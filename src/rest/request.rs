//! HTTP request model shared by every resource

use std::fmt;

use crate::config::api;

/// HTTP method of a logical operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Product domain hosting a resource (`<domain>.twilio.com`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Domain {
    Api,
    Accounts,
}

impl Domain {
    pub fn as_str(&self) -> &'static str {
        match self {
            Domain::Api => "api",
            Domain::Accounts => "accounts",
        }
    }

    /// Resolve the host for this domain, honoring region and edge
    ///
    /// An edge without a region implies the default region.
    pub fn host(&self, region: Option<&str>, edge: Option<&str>) -> String {
        let region = match (region, edge) {
            (None, Some(_)) => Some(api::DEFAULT_REGION),
            (region, _) => region,
        };

        let mut pieces = vec![self.as_str()];
        pieces.extend(edge);
        pieces.extend(region);
        pieces.push(api::HOST_SUFFIX);
        pieces.join(".")
    }

    /// Base URL (scheme and host) for this domain
    pub fn base_url(&self, region: Option<&str>, edge: Option<&str>) -> String {
        format!("https://{}", self.host(region, edge))
    }
}

/// Ordered parameter list; keys may repeat for multi-valued filters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(Vec<(String, String)>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parameter
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.push((key.into(), value.into()));
    }

    /// Append a parameter only when a value is present
    pub fn push_opt<V: ToString>(&mut self, key: &str, value: Option<V>) {
        if let Some(value) = value {
            self.push(key, value.to_string());
        }
    }

    pub fn extend(&mut self, other: Params) {
        self.0.extend(other.0);
    }

    /// All values recorded for a key, in insertion order
    pub fn get_all<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.0
            .iter()
            .filter(move |(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// First value recorded for a key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Form-urlencode the parameters (`k=v&k=v`)
    pub fn encode(&self) -> String {
        self.0
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Where a request is sent
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// Domain plus path; the host is resolved by the client
    Path { domain: Domain, path: String },
    /// Absolute URL used verbatim (pagination cursors)
    Url(String),
}

/// One HTTP call, built fresh per operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub method: HttpMethod,
    pub target: Target,
    pub query_params: Params,
    pub post_params: Params,
}

impl Request {
    /// Create a request against a domain path
    pub fn new(method: HttpMethod, domain: Domain, path: impl Into<String>) -> Self {
        Self {
            method,
            target: Target::Path {
                domain,
                path: path.into(),
            },
            query_params: Params::new(),
            post_params: Params::new(),
        }
    }

    /// Create a request against an absolute URL
    pub fn from_url(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            target: Target::Url(url.into()),
            query_params: Params::new(),
            post_params: Params::new(),
        }
    }

    pub fn with_query_params(mut self, params: Params) -> Self {
        self.query_params.extend(params);
        self
    }

    pub fn with_post_params(mut self, params: Params) -> Self {
        self.post_params.extend(params);
        self
    }

    pub fn add_query_param(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.query_params.push(key, value);
    }

    pub fn add_post_param(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.post_params.push(key, value);
    }

    /// Path component for domain requests
    pub fn path(&self) -> Option<&str> {
        match &self.target {
            Target::Path { path, .. } => Some(path),
            Target::Url(_) => None,
        }
    }

    /// Build the full URL given the base URL for the request's domain
    ///
    /// Absolute targets ignore `base_url` and are only extended with query
    /// parameters when some were added.
    pub fn url(&self, base_url: &str) -> String {
        let mut url = match &self.target {
            Target::Path { path, .. } => {
                format!("{}{}", base_url.trim_end_matches('/'), path)
            }
            Target::Url(url) => url.clone(),
        };

        if !self.query_params.is_empty() {
            let separator = if url.contains('?') { '&' } else { '?' };
            url.push(separator);
            url.push_str(&self.query_params.encode());
        }
        url
    }

    /// Form-encoded body, if any post parameters are set
    pub fn body(&self) -> Option<String> {
        if self.post_params.is_empty() {
            None
        } else {
            Some(self.post_params.encode())
        }
    }
}
