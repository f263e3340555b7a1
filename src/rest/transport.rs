//! HTTP transports
//!
//! The client core only needs `send(request) -> response`; these traits are
//! the seam between request building/decoding and the network. Both the
//! async and the blocking transport must be safe for concurrent independent
//! calls.

use std::fmt;
use std::future::Future;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use log::debug;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};

use crate::config::{api, http};
use crate::error::Result;
use crate::rest::request::{HttpMethod, Request};
use crate::rest::response::Response;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Async transport
pub trait Transport: Send + Sync {
    /// Send `request` to the fully resolved `url`
    fn send(
        &self,
        request: &Request,
        url: &str,
    ) -> impl Future<Output = Result<Response>> + Send;
}

/// Blocking transport
pub trait BlockingTransport: Send + Sync {
    /// Send `request` to the fully resolved `url`, blocking the calling thread
    fn send_blocking(&self, request: &Request, url: &str) -> Result<Response>;
}

/// HTTP basic credentials (account SID or API key, plus secret)
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Value of the `Authorization` header
    pub fn authorization_header(&self) -> String {
        let raw = format!("{}:{}", self.username, self.password);
        format!("Basic {}", BASE64.encode(raw.as_bytes()))
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

fn to_reqwest_method(method: HttpMethod) -> reqwest::Method {
    match method {
        HttpMethod::Get => reqwest::Method::GET,
        HttpMethod::Post => reqwest::Method::POST,
        HttpMethod::Delete => reqwest::Method::DELETE,
    }
}

/// Async transport backed by `reqwest::Client`
pub struct HttpTransport {
    client: reqwest::Client,
    credentials: Credentials,
}

impl HttpTransport {
    /// Create a transport with pooled, keep-alive connections
    pub fn new(credentials: Credentials) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(api::USER_AGENT)
            .pool_max_idle_per_host(http::POOL_MAX_IDLE_PER_HOST)
            .pool_idle_timeout(http::POOL_IDLE_TIMEOUT)
            .tcp_keepalive(http::TCP_KEEPALIVE)
            .connect_timeout(http::CONNECT_TIMEOUT)
            .timeout(http::REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            client,
            credentials,
        }
    }
}

impl Transport for HttpTransport {
    async fn send(&self, request: &Request, url: &str) -> Result<Response> {
        debug!("{} {}", request.method, url);

        let mut builder = self
            .client
            .request(to_reqwest_method(request.method), url)
            .header(AUTHORIZATION, self.credentials.authorization_header())
            .header(ACCEPT, "application/json");
        if let Some(body) = request.body() {
            builder = builder.header(CONTENT_TYPE, FORM_CONTENT_TYPE).body(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        debug!("{} {} -> {} ({} bytes)", request.method, url, status, body.len());
        Ok(Response::new(status, body))
    }
}

/// Blocking transport backed by `reqwest::blocking::Client`
///
/// Must not be created or dropped inside an async runtime worker.
pub struct BlockingHttpTransport {
    client: reqwest::blocking::Client,
    credentials: Credentials,
}

impl BlockingHttpTransport {
    pub fn new(credentials: Credentials) -> Self {
        let client = reqwest::blocking::Client::builder()
            .user_agent(api::USER_AGENT)
            .pool_max_idle_per_host(http::POOL_MAX_IDLE_PER_HOST)
            .pool_idle_timeout(http::POOL_IDLE_TIMEOUT)
            .tcp_keepalive(http::TCP_KEEPALIVE)
            .connect_timeout(http::CONNECT_TIMEOUT)
            .timeout(http::REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| reqwest::blocking::Client::new());

        Self {
            client,
            credentials,
        }
    }
}

impl BlockingTransport for BlockingHttpTransport {
    fn send_blocking(&self, request: &Request, url: &str) -> Result<Response> {
        debug!("{} {} (blocking)", request.method, url);

        let mut builder = self
            .client
            .request(to_reqwest_method(request.method), url)
            .header(AUTHORIZATION, self.credentials.authorization_header())
            .header(ACCEPT, "application/json");
        if let Some(body) = request.body() {
            builder = builder.header(CONTENT_TYPE, FORM_CONTENT_TYPE).body(body);
        }

        let response = builder.send()?;
        let status = response.status().as_u16();
        let body = response.text()?;

        debug!("{} {} -> {} ({} bytes)", request.method, url, status, body.len());
        Ok(Response::new(status, body))
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! In-memory transport replaying scripted responses

    use std::collections::VecDeque;
    use std::sync::Mutex;

    use super::*;
    use crate::error::TwilioError;

    /// A request as seen by the transport
    #[derive(Debug, Clone)]
    pub struct RecordedCall {
        pub request: Request,
        pub url: String,
    }

    #[derive(Default)]
    pub struct ScriptedTransport {
        responses: Mutex<VecDeque<Result<Response>>>,
        calls: Mutex<Vec<RecordedCall>>,
    }

    impl ScriptedTransport {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn push(&self, status: u16, body: impl Into<String>) -> &Self {
            self.responses
                .lock()
                .unwrap()
                .push_back(Ok(Response::new(status, body)));
            self
        }

        pub fn push_json(&self, status: u16, body: serde_json::Value) -> &Self {
            self.push(status, body.to_string())
        }

        pub fn push_error(&self, err: TwilioError) -> &Self {
            self.responses.lock().unwrap().push_back(Err(err));
            self
        }

        pub fn calls(&self) -> Vec<RecordedCall> {
            self.calls.lock().unwrap().clone()
        }

        pub fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }

        fn next(&self, request: &Request, url: &str) -> Result<Response> {
            self.calls.lock().unwrap().push(RecordedCall {
                request: request.clone(),
                url: url.to_string(),
            });
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(TwilioError::Connection("no scripted response".into())))
        }
    }

    impl Transport for ScriptedTransport {
        async fn send(&self, request: &Request, url: &str) -> Result<Response> {
            self.next(request, url)
        }
    }

    impl BlockingTransport for ScriptedTransport {
        fn send_blocking(&self, request: &Request, url: &str) -> Result<Response> {
            self.next(request, url)
        }
    }
}
