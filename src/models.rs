//! Record view consumed by the pagination machinery.
//!
//! The library never owns or validates the records it paginates; it only
//! needs two anchor fields from each one. Any entity exposing them can be
//! paginated, whatever else it carries.

use chrono::{DateTime, Utc};

/// Anchor view of a paginated record.
///
/// Implement this on any row/entity type ordered by creation time. The
/// timestamp is the ordering key; the identifier breaks ties between
/// records created at the same instant, so it must be unique.
pub trait KeysetRecord {
    /// Unique identifier of the record.
    fn id(&self) -> i64;

    /// Creation timestamp the collection is ordered by.
    fn created_at(&self) -> DateTime<Utc>;
}

impl<R: KeysetRecord> KeysetRecord for &R {
    fn id(&self) -> i64 {
        (**self).id()
    }

    fn created_at(&self) -> DateTime<Utc> {
        (**self).created_at()
    }
}
