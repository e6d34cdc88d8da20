//! Core page slicing and navigation metadata.

use serde::Serialize;
use tracing::debug;

use crate::errors::PaginateError;
use crate::markers::{page_markers, PageMarker};
use crate::params::PageParams;

/// One served page of an ordered item list, plus display metadata.
///
/// Built by [`paginate`]; every field is validated on construction and the
/// value never changes afterwards. Navigation flags are derived on access.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResult<T> {
    /// Owned copy of the items belonging to the served page, input order kept.
    pub items: Vec<T>,
    /// Clamped 1-based page actually served.
    pub current_page: u64,
    /// `max(1, ceil(total_items / page_size))`.
    pub total_pages: u64,
    /// Length of the full input sequence.
    pub total_items: u64,
    /// Items per page, as requested.
    pub page_size: u64,
    /// Opaque caller tag, passed through untouched.
    pub edit_id: String,
}

/// Slice `items` into the requested page.
///
/// Out-of-range page requests are clamped into `[1, total_pages]`, never
/// rejected; an empty input still yields one (empty) page. The only error is
/// a zero `page_size`.
///
/// # Examples
/// ```
/// use pagination::paginate;
/// let items: Vec<u32> = (0..25).collect();
/// let page = paginate(&items, 2, 10, "None").unwrap();
/// assert_eq!(page.items, (10..20).collect::<Vec<u32>>());
/// assert_eq!(page.total_pages, 3);
/// assert!(page.has_previous() && page.has_next());
/// ```
pub fn paginate<T: Clone>(
    items: &[T],
    requested_page: i64,
    page_size: u64,
    edit_id: impl Into<String>,
) -> Result<PageResult<T>, PaginateError> {
    if page_size == 0 {
        return Err(PaginateError::ZeroPageSize);
    }

    let total_items = items.len() as u64;
    let total_pages = total_items.div_ceil(page_size).max(1);
    let current_page = if requested_page < 1 {
        1
    } else {
        (requested_page as u64).min(total_pages)
    };
    if requested_page != current_page as i64 {
        debug!(requested_page, current_page, total_pages, "page request out of range, clamped");
    }

    let start = ((current_page - 1) * page_size) as usize;
    let end = (start.saturating_add(page_size as usize)).min(items.len());
    let items = if start < items.len() {
        items[start..end].to_vec()
    } else {
        Vec::new()
    };

    Ok(PageResult {
        items,
        current_page,
        total_pages,
        total_items,
        page_size,
        edit_id: edit_id.into(),
    })
}

/// [`paginate`] with defaults applied from request-side [`PageParams`].
pub fn paginate_with<T: Clone>(
    items: &[T],
    params: &PageParams,
) -> Result<PageResult<T>, PaginateError> {
    paginate(items, params.page(), params.page_size(), params.edit_id())
}

impl<T> PageResult<T> {
    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Page to link "previous" to; stays at 1 on the first page.
    pub fn previous_page(&self) -> u64 {
        if self.has_previous() { self.current_page - 1 } else { 1 }
    }

    /// Page to link "next" to; stays at the last page on the last page.
    pub fn next_page(&self) -> u64 {
        if self.has_next() { self.current_page + 1 } else { self.total_pages }
    }

    /// Compressed page-number bar for this result.
    pub fn page_markers(&self) -> Vec<PageMarker> {
        page_markers(self.current_page, self.total_pages)
    }
}
