//! Forward-only pagination over a collection endpoint
//!
//! A [`ResourceSet`] starts from the first page returned by
//! [`TwilioClient::read`] and yields records one by one, fetching the next
//! page from the server-provided cursor only once the current page is used
//! up. At most one request is outstanding at a time and nothing is
//! prefetched. [`BlockingResourceSet`] is the same machine driven by a
//! blocking transport and exposed as an [`Iterator`].
//!
//! Lifecycle:
//!
//! ```text
//! read() ──► HasPage ──► Streaming ──► Fetching ──► HasPage ──► ... ──► Exhausted
//! ```
//!
//! `read` performs the first fetch before the set exists, so a set is never
//! observed before its first page; an empty first page without a cursor
//! starts out `Exhausted`. Reaching the record limit also exhausts the set,
//! for iteration and explicit `next_page` alike. `Exhausted` is final.

use std::collections::VecDeque;

use futures::stream::{self, Stream};
use log::debug;

use crate::error::Result;
use crate::rest::client::TwilioClient;
use crate::rest::options::PageOptions;
use crate::rest::page::{Page, PageLink};
use crate::rest::traits::Resource;
use crate::rest::transport::{BlockingTransport, Transport};

/// Observable paginator state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaginatorState {
    /// A page was just loaded and none of its records were taken yet
    HasPage,
    /// Records of the current page are being handed out
    Streaming,
    /// A next-page request was started and has not completed
    Fetching,
    /// No more records; terminal
    Exhausted,
}

/// What the driver must do next
enum Step<R> {
    Yield(R),
    Fetch(PageLink),
    Done,
}

/// Transport-independent cursor shared by the async and blocking sets
struct Cursor<R> {
    records: VecDeque<R>,
    next_page: Option<PageLink>,
    page_size: Option<u32>,
    state: PaginatorState,
    limit: Option<u64>,
    yielded: u64,
    pages: u64,
    auto_paging: bool,
}

impl<R> Cursor<R> {
    fn new(page: Page<R>, options: PageOptions) -> Self {
        let page_size = page.page_size();
        let (records, next_page) = page.into_parts();
        let state = if records.is_empty() && next_page.is_none() {
            PaginatorState::Exhausted
        } else {
            PaginatorState::HasPage
        };
        Self {
            records: records.into(),
            next_page,
            page_size,
            state,
            limit: options.limit,
            yielded: 0,
            pages: 1,
            auto_paging: true,
        }
    }

    fn limit_reached(&self) -> bool {
        self.limit.is_some_and(|limit| self.yielded >= limit)
    }

    fn step(&mut self) -> Step<R> {
        if self.state == PaginatorState::Exhausted {
            return Step::Done;
        }
        if self.limit_reached() {
            debug!("Record limit of {:?} reached", self.limit);
            self.state = PaginatorState::Exhausted;
            return Step::Done;
        }
        if let Some(record) = self.records.pop_front() {
            self.yielded += 1;
            self.state = PaginatorState::Streaming;
            return Step::Yield(record);
        }
        match (&self.next_page, self.auto_paging) {
            (Some(link), true) => {
                self.state = PaginatorState::Fetching;
                Step::Fetch(link.clone())
            }
            _ => {
                debug!("Pagination exhausted after {} page(s)", self.pages);
                self.state = PaginatorState::Exhausted;
                Step::Done
            }
        }
    }

    /// Link to follow for an explicit page advance, or `None` when exhausted
    fn advance(&mut self) -> Option<PageLink> {
        if self.state == PaginatorState::Exhausted {
            return None;
        }
        if self.limit_reached() {
            debug!("Record limit of {:?} reached", self.limit);
            self.records.clear();
            self.state = PaginatorState::Exhausted;
            return None;
        }
        match &self.next_page {
            Some(link) => {
                self.state = PaginatorState::Fetching;
                Some(link.clone())
            }
            None => {
                self.records.clear();
                self.state = PaginatorState::Exhausted;
                None
            }
        }
    }

    fn accept(&mut self, page: Page<R>) {
        if page.page_size().is_some() {
            self.page_size = page.page_size();
        }
        let (records, next_page) = page.into_parts();
        debug!(
            "Loaded page {} with {} record(s), next page: {}",
            self.pages + 1,
            records.len(),
            next_page.is_some()
        );
        self.records = records.into();
        self.next_page = next_page;
        self.pages += 1;
        self.state = PaginatorState::HasPage;
    }

    fn fail(&mut self) {
        self.records.clear();
        self.next_page = None;
        self.state = PaginatorState::Exhausted;
    }
}

macro_rules! cursor_accessors {
    () => {
        /// Current lifecycle state
        pub fn state(&self) -> PaginatorState {
            self.cursor.state
        }

        /// Records of the current page not yet handed out
        pub fn buffered(&self) -> impl Iterator<Item = &R> {
            self.cursor.records.iter()
        }

        /// Whether the current page has a next-page cursor
        pub fn has_next_page(&self) -> bool {
            self.cursor.next_page.is_some()
        }

        /// Page size reported by the server for the latest page
        pub fn page_size(&self) -> Option<u32> {
            self.cursor.page_size
        }

        /// Pages loaded so far, including the first
        pub fn pages_fetched(&self) -> u64 {
            self.cursor.pages
        }

        /// Records handed out so far
        pub fn records_yielded(&self) -> u64 {
            self.cursor.yielded
        }

        pub fn limit(&self) -> Option<u64> {
            self.cursor.limit
        }

        /// With auto paging off, iteration stops at the end of the current page
        pub fn auto_paging(mut self, enabled: bool) -> Self {
            self.cursor.auto_paging = enabled;
            self
        }
    };
}

/// Async forward-only record sequence
pub struct ResourceSet<'c, R, T> {
    client: &'c TwilioClient<T>,
    cursor: Cursor<R>,
}

impl<'c, R, T> ResourceSet<'c, R, T> {
    pub(crate) fn new(client: &'c TwilioClient<T>, page: Page<R>, options: PageOptions) -> Self {
        Self {
            client,
            cursor: Cursor::new(page, options),
        }
    }

    cursor_accessors!();
}

impl<'c, R: Resource, T: Transport> ResourceSet<'c, R, T> {
    /// Next record, fetching the next page when the current one is used up
    ///
    /// An error ends the sequence.
    pub async fn next(&mut self) -> Option<Result<R>> {
        loop {
            match self.cursor.step() {
                Step::Yield(record) => return Some(Ok(record)),
                Step::Done => return None,
                Step::Fetch(link) => {
                    let request = self.client.page_link_request::<R>(&link);
                    match self.client.page::<R>(&request).await {
                        Ok(page) => self.cursor.accept(page),
                        Err(e) => {
                            self.cursor.fail();
                            return Some(Err(e));
                        }
                    }
                }
            }
        }
    }

    /// Skip the rest of the current page and load the next one
    ///
    /// Returns `Ok(false)` without a network call when there is no next page;
    /// the set is then exhausted.
    pub async fn next_page(&mut self) -> Result<bool> {
        let Some(link) = self.cursor.advance() else {
            return Ok(false);
        };
        let request = self.client.page_link_request::<R>(&link);
        match self.client.page::<R>(&request).await {
            Ok(page) => {
                self.cursor.accept(page);
                Ok(true)
            }
            Err(e) => {
                self.cursor.fail();
                Err(e)
            }
        }
    }

    /// Drain every remaining record, stopping at the first error
    pub async fn collect_all(mut self) -> Result<Vec<R>> {
        let mut all = Vec::new();
        while let Some(record) = self.next().await {
            all.push(record?);
        }
        Ok(all)
    }

    /// Expose the set as a `Stream`
    pub fn into_stream(self) -> impl Stream<Item = Result<R>> + 'c
    where
        R: 'c,
        T: 'c,
    {
        stream::unfold(self, |mut set| async move {
            set.next().await.map(|item| (item, set))
        })
    }
}

/// Blocking forward-only record sequence
pub struct BlockingResourceSet<'c, R, T> {
    client: &'c TwilioClient<T>,
    cursor: Cursor<R>,
}

impl<'c, R, T> BlockingResourceSet<'c, R, T> {
    pub(crate) fn new(client: &'c TwilioClient<T>, page: Page<R>, options: PageOptions) -> Self {
        Self {
            client,
            cursor: Cursor::new(page, options),
        }
    }

    cursor_accessors!();
}

impl<R: Resource, T: BlockingTransport> BlockingResourceSet<'_, R, T> {
    /// Blocking counterpart of [`ResourceSet::next_page`]
    pub fn next_page(&mut self) -> Result<bool> {
        let Some(link) = self.cursor.advance() else {
            return Ok(false);
        };
        let request = self.client.page_link_request::<R>(&link);
        match self.client.page_blocking::<R>(&request) {
            Ok(page) => {
                self.cursor.accept(page);
                Ok(true)
            }
            Err(e) => {
                self.cursor.fail();
                Err(e)
            }
        }
    }
}

impl<R: Resource, T: BlockingTransport> Iterator for BlockingResourceSet<'_, R, T> {
    type Item = Result<R>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.cursor.step() {
                Step::Yield(record) => return Some(Ok(record)),
                Step::Done => return None,
                Step::Fetch(link) => {
                    let request = self.client.page_link_request::<R>(&link);
                    match self.client.page_blocking::<R>(&request) {
                        Ok(page) => self.cursor.accept(page),
                        Err(e) => {
                            self.cursor.fail();
                            return Some(Err(e));
                        }
                    }
                }
            }
        }
    }
}
