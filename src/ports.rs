//! Port trait for the record storage collaborator.
//!
//! This trait defines the storage interface the pagination driver runs
//! against. Implementations live wherever the records do: a SQL database,
//! a key-value store, an in-memory collection in tests.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::StoreResult;
use crate::models::KeysetRecord;
use crate::query::{ComparisonOp, OrderDirection};

/// Anchor a page fetch compares against.
///
/// The comparison is on the composite key `(created_at, id)`: the
/// timestamp orders the collection and the unique id breaks ties, so a SQL
/// implementation would filter with
/// `(created_at, id) op (anchor.created_at, anchor.id)`.
#[derive(Debug, Clone, PartialEq)]
pub struct PageAnchor {
    /// Unique identifier of the anchor record.
    pub id: i64,
    /// Ordering timestamp of the anchor record.
    pub created_at: DateTime<Utc>,
    /// Comparison to apply against the anchor key.
    pub op: ComparisonOp,
}

/// One page fetch, as handed to the storage layer.
#[derive(Debug, Clone, PartialEq)]
pub struct PageQuery {
    /// Anchor to compare against; `None` fetches from the start of the
    /// collection (first page).
    pub anchor: Option<PageAnchor>,
    /// Effective sort order to fetch in, applied to both keys.
    pub order: OrderDirection,
    /// Maximum number of records to return. The driver asks for one more
    /// than the page size; the extra record is how it learns whether a
    /// further page exists.
    pub limit: usize,
}

/// Storage collaborator the pagination driver fetches pages through.
///
/// Implementations must return records sorted by `(created_at, id)` in
/// `query.order`, restricted by the anchor comparison when one is present,
/// and capped at `query.limit` records. They read nothing else from the
/// query and perform no pagination logic of their own.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// The record type this store pages over.
    type Record: KeysetRecord + Send;

    /// Fetch up to `query.limit` records for one page request.
    async fn fetch_page(&self, query: &PageQuery) -> StoreResult<Vec<Self::Record>>;
}
