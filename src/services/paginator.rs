//! Pagination driver - runs the full page-request flow against a store.
//!
//! The driver owns the control flow around the pure pieces: decode the
//! incoming cursor, resolve the fetch operator and order, ask the store
//! for one record more than the page size, and derive the adjacent-page
//! cursors from what came back. Records are always returned to the caller
//! in display order (the requested sort order), whichever direction the
//! traversal moved in.

use std::sync::Arc;

use tracing::{debug, instrument, trace};

use crate::cursor::Cursor;
use crate::error::PaginateResult;
use crate::models::KeysetRecord;
use crate::page::{compute_page_info, PageInfo};
use crate::ports::{PageAnchor, PageQuery, RecordStore};
use crate::query::{resolve_operator, OrderDirection};

// =============================================================================
// Configuration
// =============================================================================

/// Configuration for the pagination driver.
#[derive(Debug, Clone)]
pub struct PaginatorConfig {
    /// Page size used when a request does not specify one.
    pub default_limit: usize,
    /// Upper bound applied to requested page sizes.
    pub max_limit: usize,
}

impl Default for PaginatorConfig {
    fn default() -> Self {
        Self {
            default_limit: 20,
            max_limit: 100,
        }
    }
}

// =============================================================================
// Request / response types
// =============================================================================

/// One incoming page request.
#[derive(Debug, Clone, Default)]
pub struct PageRequest {
    /// Opaque cursor from the client; absent or empty means first page.
    pub cursor: Option<String>,
    /// Requested page size; falls back to the configured default.
    pub limit: Option<usize>,
    /// Sort order the client wants the collection displayed in.
    pub order: OrderDirection,
}

/// One resolved page: its records in display order plus the cursors for
/// the adjacent pages.
#[derive(Debug)]
pub struct Page<R> {
    pub records: Vec<R>,
    pub page_info: PageInfo,
}

// =============================================================================
// Paginator
// =============================================================================

/// Pagination driver over a [`RecordStore`].
///
/// # Flow
///
/// 1. Clamp the requested page size
/// 2. Decode the incoming cursor, if any
/// 3. Resolve the comparison operator and effective fetch order
/// 4. Fetch `limit + 1` records through the store port
/// 5. Derive next/previous cursors from the over-fetch outcome
pub struct Paginator<S: RecordStore> {
    config: PaginatorConfig,
    store: Arc<S>,
}

impl<S: RecordStore> Paginator<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self::with_config(PaginatorConfig::default(), store)
    }

    pub fn with_config(config: PaginatorConfig, store: Arc<S>) -> Self {
        Self { config, store }
    }

    /// Resolve one page request.
    ///
    /// An undecodable cursor is a request-level validation failure
    /// ([`PaginateError::InvalidCursor`](crate::error::PaginateError));
    /// every "no further pages" situation resolves to absent cursors on
    /// the returned page instead of an error.
    #[instrument(skip_all, fields(order = %request.order, has_cursor = request.cursor.is_some()))]
    pub async fn paginate(&self, request: PageRequest) -> PaginateResult<Page<S::Record>> {
        let limit = request
            .limit
            .unwrap_or(self.config.default_limit)
            .min(self.config.max_limit);

        if limit == 0 {
            debug!("Zero page size requested, returning empty page");
            return Ok(Page {
                records: Vec::new(),
                page_info: PageInfo::default(),
            });
        }

        let cursor = match request.cursor.as_deref() {
            None | Some("") => None,
            Some(encoded) => Some(Cursor::decode(encoded)?),
        };

        match cursor {
            Some(cursor) if !cursor.points_next => {
                self.page_before(&cursor, limit, request.order).await
            }
            cursor => self.page_from(cursor.as_ref(), limit, request.order).await,
        }
    }

    /// First page or a forward step: the store returns records already in
    /// display order, with the over-fetch row last.
    async fn page_from(
        &self,
        cursor: Option<&Cursor>,
        limit: usize,
        order: OrderDirection,
    ) -> PaginateResult<Page<S::Record>> {
        let is_first_page = cursor.is_none();
        let (op, effective_order) = resolve_operator(true, order);
        let query = PageQuery {
            anchor: cursor.map(|c| PageAnchor {
                id: c.id,
                created_at: c.created_at,
                op,
            }),
            order: effective_order,
            limit: limit + 1,
        };

        let mut records = self.store.fetch_page(&query).await?;
        trace!(fetched = records.len(), "Fetched forward page");

        let mut page_info =
            compute_page_info(is_first_page, limit, &records, false).unwrap_or_default();
        if is_first_page {
            // A request with no cursor starts at the collection boundary;
            // nothing precedes it.
            page_info.prev_cursor = None;
        }

        records.truncate(limit);
        Ok(Page { records, page_info })
    }

    /// Backward step: the store walks away from the anchor in reversed
    /// order, so the page content is the first `limit` records flipped
    /// back into display order.
    async fn page_before(
        &self,
        cursor: &Cursor,
        limit: usize,
        order: OrderDirection,
    ) -> PaginateResult<Page<S::Record>> {
        let (op, effective_order) = resolve_operator(false, order);
        let query = PageQuery {
            anchor: Some(PageAnchor {
                id: cursor.id,
                created_at: cursor.created_at,
                op,
            }),
            order: effective_order,
            limit: limit + 1,
        };

        let mut records = self.store.fetch_page(&query).await?;
        trace!(fetched = records.len(), "Fetched backward page");

        let has_earlier = records.len() > limit;
        records.truncate(limit);
        records.reverse();

        // The over-fetch row sits before the page in display order here,
        // out of reach of the forward-framed over-fetch check, so the
        // pager is assembled from the same anchors directly. The next page
        // always exists on a backward step: it is where we came from.
        let next = records
            .last()
            .map(|r| Cursor::new(r.id(), r.created_at(), true));
        let prev = if has_earlier {
            records
                .first()
                .map(|r| Cursor::new(r.id(), r.created_at(), false))
        } else {
            None
        };

        Ok(Page {
            records,
            page_info: PageInfo::new(next, prev),
        })
    }
}
