//! Template render-context projection
//!
//! The one presentation-coupled piece: flattens a [`PageResult`] into the
//! key-value map a template renderer iterates over. Swap this adapter to
//! feed a different renderer; the computation stays untouched.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::errors::PaginateError;
use crate::page::PageResult;

/// Context key the items land under unless the caller picks another.
pub const DEFAULT_ITEMS_KEY: &str = "items";

/// Project a page result into a render context under [`DEFAULT_ITEMS_KEY`].
pub fn render_context<T: Serialize>(
    result: &PageResult<T>,
) -> Result<Map<String, Value>, PaginateError> {
    render_context_with_key(result, DEFAULT_ITEMS_KEY)
}

/// Project a page result into a render context, items under `items_key`.
///
/// Keys are stable and case-sensitive: the items key, `editId`,
/// `currentPage`, `totalPages`, `totalItems`, `pageSize`, `hasPrevious`,
/// `hasNext`, `previousPage`, `nextPage` and `pageNumbers`, where
/// `pageNumbers` is a list of `{"type": "number", "value": n}` and
/// `{"type": "ellipsis"}` records.
pub fn render_context_with_key<T: Serialize>(
    result: &PageResult<T>,
    items_key: &str,
) -> Result<Map<String, Value>, PaginateError> {
    let mut ctx = Map::new();
    ctx.insert(items_key.to_string(), serde_json::to_value(&result.items)?);
    ctx.insert("editId".into(), Value::from(result.edit_id.as_str()));
    ctx.insert("currentPage".into(), Value::from(result.current_page));
    ctx.insert("totalPages".into(), Value::from(result.total_pages));
    ctx.insert("totalItems".into(), Value::from(result.total_items));
    ctx.insert("pageSize".into(), Value::from(result.page_size));
    ctx.insert("hasPrevious".into(), Value::from(result.has_previous()));
    ctx.insert("hasNext".into(), Value::from(result.has_next()));
    ctx.insert("previousPage".into(), Value::from(result.previous_page()));
    ctx.insert("nextPage".into(), Value::from(result.next_page()));
    ctx.insert("pageNumbers".into(), serde_json::to_value(result.page_markers())?);
    Ok(ctx)
}
