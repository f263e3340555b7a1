//! Options objects: the named-parameter entry point for every operation

use crate::config::api;
use crate::rest::request::Params;

/// Produces the query or body parameters for one operation
pub trait Options {
    fn params(&self) -> Params;
}

/// Paging controls shared by every read operation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageOptions {
    /// Records per page requested from the server (first request only)
    pub page_size: Option<u32>,
    /// Maximum number of records yielded across all pages
    pub limit: Option<u64>,
}

impl PageOptions {
    pub fn new(page_size: Option<u32>, limit: Option<u64>) -> Self {
        Self { page_size, limit }
    }

    /// Append `PageSize` when set
    pub fn push_params(&self, params: &mut Params) {
        params.push_opt(api::PAGE_SIZE_PARAM, self.page_size);
    }
}

/// Options for a paginated read
pub trait ReadOptions: Options {
    fn page_options(&self) -> PageOptions;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_size_param() {
        let mut params = Params::new();
        PageOptions::new(Some(50), Some(120)).push_params(&mut params);
        assert_eq!(params.get("PageSize"), Some("50"));
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn test_no_page_size_no_param() {
        let mut params = Params::new();
        PageOptions::new(None, Some(10)).push_params(&mut params);
        assert!(params.is_empty());
    }
}
