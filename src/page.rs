//! Adjacent-page analysis over a fetched page.
//!
//! The storage layer fetches one record more than the page size (the
//! over-fetch row); whether that extra row came back, together with the
//! caller's page-boundary flags, decides which adjacent pages exist and
//! where their cursors anchor.

use serde::{Deserialize, Serialize};

use crate::cursor::Cursor;
use crate::models::KeysetRecord;

// =============================================================================
// PageInfo
// =============================================================================

/// Cursors for the pages adjacent to the one just fetched.
///
/// `None` means the adjacent page does not exist. On the wire both fields
/// are strings, empty when absent, matching what API clients expect of an
/// opaque cursor pair.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageInfo {
    /// Cursor fetching the page after this one.
    #[serde(rename = "nextCursor", with = "wire_cursor")]
    pub next_cursor: Option<String>,

    /// Cursor fetching the page before this one.
    #[serde(rename = "prevCursor", with = "wire_cursor")]
    pub prev_cursor: Option<String>,
}

impl PageInfo {
    /// Build page info from the adjacent-page anchors.
    ///
    /// Encodes whichever cursors are present. Should an encoding ever
    /// degrade to an empty string (see [`Cursor::encode`]), it is folded
    /// back to an absent cursor so the empty-string wire sentinel and the
    /// in-memory `Option` can never disagree.
    pub fn new(next: Option<Cursor>, prev: Option<Cursor>) -> Self {
        let encode = |cursor: Cursor| {
            let encoded = cursor.encode();
            (!encoded.is_empty()).then_some(encoded)
        };

        Self {
            next_cursor: next.and_then(encode),
            prev_cursor: prev.and_then(encode),
        }
    }

    /// True when neither adjacent page exists.
    pub fn is_empty(&self) -> bool {
        self.next_cursor.is_none() && self.prev_cursor.is_none()
    }
}

/// Wire form of an optional cursor: the string itself, empty when absent.
mod wire_cursor {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        cursor: &Option<String>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(cursor.as_deref().unwrap_or(""))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<String>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok((!raw.is_empty()).then_some(raw))
    }
}

// =============================================================================
// Page analysis
// =============================================================================

/// Derive the adjacent-page cursors from an over-fetched page.
///
/// `records` must be the result of fetching up to `limit + 1` records, in
/// the order the storage layer returned them. The extra record, when
/// present, only proves more data exists in the traversal direction; it is
/// never part of the page content.
///
/// Returns `None` when no pagination applies: a zero limit, a result set
/// that fits entirely in one page (`is_first_page && is_last_page`), or an
/// empty fetch with nothing to anchor a cursor to.
///
/// The boundary flags are the caller's bookkeeping and are trusted as
/// given: `is_first_page` is whether the request carried no cursor, and
/// `is_last_page` lets a caller that has independently established the end
/// of its traversal suppress the next cursor even though the over-fetch
/// row was found. No cross-validation against `records` is performed.
pub fn compute_page_info<R: KeysetRecord>(
    is_first_page: bool,
    limit: usize,
    records: &[R],
    is_last_page: bool,
) -> Option<PageInfo> {
    if limit == 0 {
        return None;
    }
    if is_first_page && is_last_page {
        return None;
    }

    // No over-fetch row: this is the terminal page in the traversal
    // direction, so only a previous page can exist.
    if records.len() <= limit {
        let last = records.last()?;
        let prev = Cursor::new(last.id(), last.created_at(), false);
        return Some(PageInfo::new(None, Some(prev)));
    }

    // The over-fetch row sits at index `limit`; the last record that is
    // actually part of the page is at `limit - 1`.
    let last = &records[limit - 1];
    let first = &records[0];
    let next = Cursor::new(last.id(), last.created_at(), true);
    let prev = Cursor::new(first.id(), first.created_at(), false);

    if is_first_page {
        Some(PageInfo::new(Some(next), None))
    } else if is_last_page {
        Some(PageInfo::new(None, Some(prev)))
    } else {
        Some(PageInfo::new(Some(next), Some(prev)))
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, TimeZone, Utc};

    use super::*;

    struct Row {
        id: i64,
        created_at: DateTime<Utc>,
    }

    impl KeysetRecord for Row {
        fn id(&self) -> i64 {
            self.id
        }

        fn created_at(&self) -> DateTime<Utc> {
            self.created_at
        }
    }

    fn rows(ids: &[i64]) -> Vec<Row> {
        ids.iter()
            .map(|&id| Row {
                id,
                created_at: Utc.timestamp_opt(1_700_000_000 + id, 0).unwrap(),
            })
            .collect()
    }

    fn decode(encoded: &Option<String>) -> Cursor {
        Cursor::decode(encoded.as_deref().unwrap()).unwrap()
    }

    #[test]
    fn zero_limit_yields_nothing() {
        let records = rows(&[1, 2, 3]);
        assert!(compute_page_info(false, 0, &records, false).is_none());
        assert!(compute_page_info(true, 0, &records, true).is_none());
    }

    #[test]
    fn single_page_result_set_yields_nothing() {
        let records = rows(&[]);
        assert!(compute_page_info(true, 10, &records, true).is_none());
    }

    #[test]
    fn empty_fetch_yields_nothing() {
        let records = rows(&[]);
        assert!(compute_page_info(false, 10, &records, false).is_none());
    }

    #[test]
    fn terminal_page_gets_prev_cursor_only() {
        // 2 records for a limit of 2: no over-fetch row came back
        let records = rows(&[4, 5]);
        let info = compute_page_info(false, 2, &records, false).unwrap();

        assert!(info.next_cursor.is_none());
        let prev = decode(&info.prev_cursor);
        assert_eq!(prev.id, 5);
        assert!(!prev.points_next);
    }

    #[test]
    fn first_page_gets_next_cursor_only() {
        // 3 records for a limit of 2: the over-fetch row proves more data
        let records = rows(&[1, 2, 3]);
        let info = compute_page_info(true, 2, &records, false).unwrap();

        assert!(info.prev_cursor.is_none());
        let next = decode(&info.next_cursor);
        assert_eq!(next.id, 2); // last included record, not the extra row
        assert!(next.points_next);
    }

    #[test]
    fn middle_page_gets_both_cursors() {
        let records = rows(&[3, 4, 5]);
        let info = compute_page_info(false, 2, &records, false).unwrap();

        let next = decode(&info.next_cursor);
        assert_eq!(next.id, 4);
        assert!(next.points_next);

        let prev = decode(&info.prev_cursor);
        assert_eq!(prev.id, 3);
        assert!(!prev.points_next);
    }

    #[test]
    fn last_page_flag_suppresses_next_cursor() {
        // The caller established end-of-traversal on its own; the flag wins
        // over the over-fetch row.
        let records = rows(&[3, 4, 5]);
        let info = compute_page_info(false, 2, &records, true).unwrap();

        assert!(info.next_cursor.is_none());
        assert_eq!(decode(&info.prev_cursor).id, 3);
    }

    #[test]
    fn cursor_anchors_carry_record_timestamps() {
        let records = rows(&[1, 2, 3]);
        let info = compute_page_info(true, 2, &records, false).unwrap();

        let next = decode(&info.next_cursor);
        assert_eq!(next.created_at, records[1].created_at);
    }

    #[test]
    fn wire_form_uses_empty_strings_for_absent_cursors() {
        let info = PageInfo::new(
            Some(Cursor::new(9, Utc.timestamp_opt(1_700_000_000, 0).unwrap(), true)),
            None,
        );
        let json = serde_json::to_value(&info).unwrap();

        assert_eq!(json["prevCursor"], "");
        assert_ne!(json["nextCursor"], "");

        let back: PageInfo = serde_json::from_value(json).unwrap();
        assert_eq!(back, info);
    }

    #[test]
    fn empty_page_info_roundtrips_on_the_wire() {
        let info = PageInfo::default();
        assert!(info.is_empty());

        let json = serde_json::to_string(&info).unwrap();
        assert_eq!(json, r#"{"nextCursor":"","prevCursor":""}"#);

        let back: PageInfo = serde_json::from_str(&json).unwrap();
        assert!(back.is_empty());
    }
}
