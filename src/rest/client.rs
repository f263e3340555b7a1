//! REST client: host resolution plus the generic operations every resource
//! is built from
//!
//! Each operation exists in an async flavor (`T: Transport`) and a blocking
//! flavor (`T: BlockingTransport`, `_blocking` suffix). Both build the same
//! request and share the same decoding, so they behave identically apart
//! from where they wait.

use log::debug;

use crate::error::{Result, TwilioError};
use crate::rest::options::PageOptions;
use crate::rest::page::{Page, PageLink};
use crate::rest::request::{Domain, HttpMethod, Request, Target};
use crate::rest::resource_set::{BlockingResourceSet, ResourceSet};
use crate::rest::response::{ensure_success, Response, RestException};
use crate::rest::traits::Resource;
use crate::rest::transport::{
    BlockingHttpTransport, BlockingTransport, Credentials, HttpTransport, Transport,
};

/// REST API client
pub struct TwilioClient<T> {
    transport: T,
    /// Account used when a path does not name one explicitly
    account_sid: String,
    region: Option<String>,
    edge: Option<String>,
    /// Custom base URL override (mock servers, proxies)
    base_url_override: Option<String>,
}

impl TwilioClient<HttpTransport> {
    /// Create an async client authenticated as `account_sid`
    pub fn new(account_sid: impl Into<String>, auth_token: impl Into<String>) -> Self {
        let account_sid = account_sid.into();
        let transport = HttpTransport::new(Credentials::new(account_sid.clone(), auth_token));
        Self::with_transport(transport, account_sid)
    }
}

impl TwilioClient<BlockingHttpTransport> {
    /// Create a blocking client authenticated as `account_sid`
    pub fn new_blocking(account_sid: impl Into<String>, auth_token: impl Into<String>) -> Self {
        let account_sid = account_sid.into();
        let transport =
            BlockingHttpTransport::new(Credentials::new(account_sid.clone(), auth_token));
        Self::with_transport(transport, account_sid)
    }
}

impl<T> TwilioClient<T> {
    /// Create a client over any transport
    pub fn with_transport(transport: T, account_sid: impl Into<String>) -> Self {
        Self {
            transport,
            account_sid: account_sid.into(),
            region: None,
            edge: None,
            base_url_override: None,
        }
    }

    pub fn with_region(mut self, region: Option<String>) -> Self {
        self.region = region;
        self
    }

    pub fn with_edge(mut self, edge: Option<String>) -> Self {
        self.edge = edge;
        self
    }

    /// Send every domain request to `base_url` instead of the resolved host
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url_override = Some(base_url.into());
        self
    }

    /// The ambient account SID
    pub fn account_sid(&self) -> &str {
        &self.account_sid
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    pub fn edge(&self) -> Option<&str> {
        self.edge.as_deref()
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Build the base URL for a domain
    pub fn base_url(&self, domain: Domain) -> String {
        if let Some(ref url) = self.base_url_override {
            return url.clone();
        }
        domain.base_url(self.region.as_deref(), self.edge.as_deref())
    }

    /// Full URL a request will be sent to
    pub fn resolve_url(&self, request: &Request) -> String {
        match &request.target {
            Target::Path { domain, .. } => request.url(&self.base_url(*domain)),
            Target::Url(_) => request.url(""),
        }
    }

    /// GET request for a page link of resource `R`
    pub(crate) fn page_link_request<R: Resource>(&self, link: &PageLink) -> Request {
        Request::from_url(HttpMethod::Get, link.resolve(&self.base_url(R::DOMAIN)))
    }
}

fn decode_page<R: Resource>(response: Response) -> Result<Page<R>> {
    ensure_success(&response, "read records")?;
    Page::from_json(R::RECORDS_KEY, &response.body)
}

fn decode_record<R: Resource>(response: Response, action: &str) -> Result<R> {
    ensure_success(&response, action)?;
    serde_json::from_str(&response.body)
        .map_err(|e| TwilioError::Json(format!("Failed to parse {}: {}", R::NAME, e)))
}

fn decode_delete(response: Response) -> Result<bool> {
    if response.is_success() {
        return Ok(response.status == 204);
    }
    match RestException::from_json(&response.body) {
        Some(exception) => Err(TwilioError::Api {
            code: exception.code,
            status: response.status,
            message: exception
                .message
                .unwrap_or_else(|| format!("Unable to delete record, {}", response.status)),
            more_info: exception.more_info,
        }),
        None => Ok(false),
    }
}

impl<T: Transport> TwilioClient<T> {
    /// Send a request and return the raw response
    pub async fn request(&self, request: &Request) -> Result<Response> {
        let url = self.resolve_url(request);
        self.transport.send(request, &url).await
    }

    /// Fetch and decode one page
    pub async fn page<R: Resource>(&self, request: &Request) -> Result<Page<R>> {
        decode_page(self.request(request).await?)
    }

    /// Execute an initial list request and wrap the first page
    pub async fn read<R: Resource>(
        &self,
        request: Request,
        options: PageOptions,
    ) -> Result<ResourceSet<'_, R, T>> {
        debug!("Reading {} records", R::NAME);
        let page = self.page::<R>(&request).await?;
        Ok(ResourceSet::new(self, page, options))
    }

    /// Fetch the page after `page`
    ///
    /// Returns `Ok(None)` without any network call on the terminal page.
    pub async fn next_page<R: Resource>(&self, page: &Page<R>) -> Result<Option<Page<R>>> {
        let Some(link) = page.next_page() else {
            debug!("No next page for {} records", R::NAME);
            return Ok(None);
        };
        let request = self.page_link_request::<R>(link);
        self.page(&request).await.map(Some)
    }

    /// Fetch the page before `page`
    pub async fn previous_page<R: Resource>(&self, page: &Page<R>) -> Result<Option<Page<R>>> {
        let Some(link) = page.previous_page() else {
            return Ok(None);
        };
        let request = self.page_link_request::<R>(link);
        self.page(&request).await.map(Some)
    }

    pub async fn fetch<R: Resource>(&self, request: &Request) -> Result<R> {
        decode_record(self.request(request).await?, "fetch record")
    }

    pub async fn create<R: Resource>(&self, request: &Request) -> Result<R> {
        decode_record(self.request(request).await?, "create record")
    }

    pub async fn update<R: Resource>(&self, request: &Request) -> Result<R> {
        decode_record(self.request(request).await?, "update record")
    }

    /// `true` when the server answered 204 No Content
    pub async fn delete(&self, request: &Request) -> Result<bool> {
        decode_delete(self.request(request).await?)
    }
}

impl<T: BlockingTransport> TwilioClient<T> {
    pub fn request_blocking(&self, request: &Request) -> Result<Response> {
        let url = self.resolve_url(request);
        self.transport.send_blocking(request, &url)
    }

    pub fn page_blocking<R: Resource>(&self, request: &Request) -> Result<Page<R>> {
        decode_page(self.request_blocking(request)?)
    }

    pub fn read_blocking<R: Resource>(
        &self,
        request: Request,
        options: PageOptions,
    ) -> Result<BlockingResourceSet<'_, R, T>> {
        debug!("Reading {} records (blocking)", R::NAME);
        let page = self.page_blocking::<R>(&request)?;
        Ok(BlockingResourceSet::new(self, page, options))
    }

    pub fn next_page_blocking<R: Resource>(&self, page: &Page<R>) -> Result<Option<Page<R>>> {
        let Some(link) = page.next_page() else {
            debug!("No next page for {} records", R::NAME);
            return Ok(None);
        };
        let request = self.page_link_request::<R>(link);
        self.page_blocking(&request).map(Some)
    }

    pub fn previous_page_blocking<R: Resource>(
        &self,
        page: &Page<R>,
    ) -> Result<Option<Page<R>>> {
        let Some(link) = page.previous_page() else {
            return Ok(None);
        };
        let request = self.page_link_request::<R>(link);
        self.page_blocking(&request).map(Some)
    }

    pub fn fetch_blocking<R: Resource>(&self, request: &Request) -> Result<R> {
        decode_record(self.request_blocking(request)?, "fetch record")
    }

    pub fn create_blocking<R: Resource>(&self, request: &Request) -> Result<R> {
        decode_record(self.request_blocking(request)?, "create record")
    }

    pub fn update_blocking<R: Resource>(&self, request: &Request) -> Result<R> {
        decode_record(self.request_blocking(request)?, "update record")
    }

    pub fn delete_blocking(&self, request: &Request) -> Result<bool> {
        decode_delete(self.request_blocking(request)?)
    }
}

#[cfg(test)]
impl<T> TwilioClient<T> {
    /// Create a test client pointed at a mock base URL
    pub fn test_client(transport: T, base_url: &str) -> Self {
        Self::with_transport(transport, "ACtest").with_base_url(base_url)
    }
}
