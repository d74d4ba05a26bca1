//! Error types for the pagination library.
//!
//! This module defines a small hierarchy of error types:
//!
//! - [`DecodeError`] - Cursor token decoding failures
//! - [`StoreError`] - Record store (storage adapter) errors
//! - [`PaginateError`] - Top-level pagination driver errors
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries.

use thiserror::Error;

// =============================================================================
// Decode Errors
// =============================================================================

/// Cursor token decoding failures.
///
/// A cursor supplied by a client is opaque base64 over a JSON payload;
/// either layer can be malformed. Both cases are request-level validation
/// failures, never a crash.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The token is not valid standard base64.
    #[error("Cursor is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    /// The decoded bytes are not a valid cursor object.
    #[error("Cursor payload is malformed: {0}")]
    Payload(#[from] serde_json::Error),
}

// =============================================================================
// Store Errors
// =============================================================================

/// Errors returned by record store implementations.
///
/// These originate in the storage adapter behind the
/// [`RecordStore`](crate::ports::RecordStore) port.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Failed to reach the backing store.
    #[error("Store connection error: {0}")]
    Connection(String),

    /// Query execution failed.
    #[error("Store query error: {0}")]
    Query(String),
}

// =============================================================================
// Paginate Errors
// =============================================================================

/// Top-level errors from the pagination driver.
///
/// This is the error type returned by
/// [`Paginator::paginate`](crate::services::Paginator::paginate). It wraps
/// the lower-level errors and adds nothing of its own: every edge case that
/// is a legitimate "no further pagination" state (empty page, unrecognized
/// sort order, zero limit) resolves to an absent value, not an error.
#[derive(Debug, Error)]
pub enum PaginateError {
    /// The client-supplied cursor could not be decoded.
    #[error("Invalid cursor: {0}")]
    InvalidCursor(#[from] DecodeError),

    /// The record store failed.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for record store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Result type for pagination driver operations.
pub type PaginateResult<T> = Result<T, PaginateError>;
