//! Request-side pagination parameters
//!
//! Optional fields so callers can lift them straight out of a query string;
//! accessors apply the defaults.

use serde::Deserialize;

/// Items per page when the request does not specify one.
pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// Edit tag carried through when the request does not supply one.
pub const DEFAULT_EDIT_ID: &str = "None";

/// Pagination parameters as received from a caller
#[derive(Clone, Debug, Default, Deserialize)]
pub struct PageParams {
    /// 1-based page index; out-of-range values are clamped downstream
    pub page: Option<i64>,
    /// items per page
    pub page_size: Option<u64>,
    /// opaque tag passed through to the render context
    pub edit_id: Option<String>,
}

impl PageParams {
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(1)
    }

    /// Defaulted page size; never 0.
    pub fn page_size(&self) -> u64 {
        self.page_size.unwrap_or(DEFAULT_PAGE_SIZE).max(1)
    }

    pub fn edit_id(&self) -> &str {
        self.edit_id.as_deref().unwrap_or(DEFAULT_EDIT_ID)
    }
}
