//! Opaque cursor tokens for keyset pagination.
//!
//! A cursor pins a position in the ordered collection: the anchor record's
//! identifier and creation timestamp, plus the direction the cursor moves
//! when used. On the wire it is standard padded base64 over a small JSON
//! object, so clients can pass it around as an opaque string.
//!
//! Cursors are plain encoding, not encryption: clients can decode them.
//! They carry nothing but the two anchor fields and the direction flag.

use base64::prelude::*;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DecodeError;

/// Position-plus-direction token for fetching an adjacent page.
///
/// Wire keys are `id` (number), `createdAt` (RFC 3339 string) and
/// `pointsNext` (boolean). Unknown keys are rejected on decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Cursor {
    /// Unique identifier of the anchor record.
    pub id: i64,
    /// Ordering timestamp of the anchor record.
    pub created_at: DateTime<Utc>,
    /// When true the cursor fetches records after the anchor,
    /// when false the records before it.
    pub points_next: bool,
}

impl Cursor {
    pub fn new(id: i64, created_at: DateTime<Utc>, points_next: bool) -> Self {
        Self {
            id,
            created_at,
            points_next,
        }
    }

    /// Encode the cursor as an opaque token.
    ///
    /// Serialization of this fixed field set cannot fail in practice; if it
    /// ever does, the failure degrades to an empty string, which
    /// [`PageInfo::new`](crate::page::PageInfo::new) folds back into an
    /// absent cursor instead of handing clients a broken token.
    pub fn encode(&self) -> String {
        match serde_json::to_vec(self) {
            Ok(payload) => BASE64_STANDARD.encode(payload),
            Err(_) => String::new(),
        }
    }

    /// Decode a token back into a cursor.
    ///
    /// Fails with [`DecodeError::Base64`] when the token is not valid
    /// base64 and [`DecodeError::Payload`] when the decoded bytes are not a
    /// cursor object. An absent cursor is the empty string at the request
    /// boundary; callers must treat it as "no cursor" rather than decode it
    /// (the empty payload is not a valid cursor object).
    pub fn decode(encoded: &str) -> Result<Self, DecodeError> {
        let payload = BASE64_STANDARD.decode(encoded)?;
        Ok(serde_json::from_slice(&payload)?)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn anchor_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 9, 30, 0).unwrap()
    }

    #[test]
    fn cursor_roundtrip() {
        let cursor = Cursor::new(42, anchor_time(), true);
        let decoded = Cursor::decode(&cursor.encode()).unwrap();
        assert_eq!(decoded, cursor);
    }

    #[test]
    fn cursor_roundtrip_preserves_direction() {
        let cursor = Cursor::new(7, anchor_time(), false);
        let decoded = Cursor::decode(&cursor.encode()).unwrap();
        assert!(!decoded.points_next);
    }

    #[test]
    fn encoded_cursor_uses_wire_keys() {
        let cursor = Cursor::new(42, anchor_time(), true);
        let payload = BASE64_STANDARD.decode(cursor.encode()).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&payload).unwrap();

        assert_eq!(json["id"], 42);
        assert_eq!(json["pointsNext"], true);
        // createdAt is an RFC 3339 timestamp string
        let created_at = json["createdAt"].as_str().unwrap();
        assert!(created_at.starts_with("2024-03-15T09:30:00"));
    }

    #[test]
    fn decode_rejects_invalid_base64() {
        let err = Cursor::decode("not base64!!").unwrap_err();
        assert!(matches!(err, DecodeError::Base64(_)));
    }

    #[test]
    fn decode_rejects_non_cursor_payload() {
        // Valid base64, but the payload is not a cursor object
        let encoded = BASE64_STANDARD.encode(b"hello");
        let err = Cursor::decode(&encoded).unwrap_err();
        assert!(matches!(err, DecodeError::Payload(_)));
    }

    #[test]
    fn decode_rejects_unknown_fields() {
        let encoded = BASE64_STANDARD.encode(
            br#"{"id":1,"createdAt":"2024-03-15T09:30:00Z","pointsNext":true,"extra":1}"#,
        );
        let err = Cursor::decode(&encoded).unwrap_err();
        assert!(matches!(err, DecodeError::Payload(_)));
    }

    #[test]
    fn decode_rejects_empty_string() {
        // Absent cursors are handled before decoding; an empty token is
        // not a valid cursor payload.
        let err = Cursor::decode("").unwrap_err();
        assert!(matches!(err, DecodeError::Payload(_)));
    }
}
