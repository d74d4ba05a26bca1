//! Keyset (cursor-based) pagination toolkit.
//!
//! This crate paginates any ordered, uniquely-keyed collection - rows
//! ordered by creation time with a tie-breaking unique id - through opaque,
//! stateless cursors. A cursor encodes an anchor position plus a traversal
//! direction; from one over-fetched page the crate derives the cursors for
//! the adjacent pages. It never touches storage itself: fetching is behind
//! a port trait implemented by the application.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                     application / API layer                │
//! ├────────────────────────────────────────────────────────────┤
//! │  services::Paginator      (decode → resolve → fetch → analyze)
//! ├──────────────┬──────────────┬──────────────────────────────┤
//! │    cursor    │    query     │            page              │
//! │   (codec)    │  (operator)  │       (page analysis)        │
//! ├──────────────┴──────────────┴──────────────────────────────┤
//! │  ports::RecordStore  ← implemented by your storage layer   │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`cursor`] - Opaque cursor tokens (base64 over JSON) and their codec
//! - [`query`] - Sort orders, comparison operators, and the traversal rule
//! - [`page`] - Adjacent-page analysis from an over-fetched page
//! - [`models`] - The two-field record view the analysis reads
//! - [`ports`] - Storage collaborator interface
//! - [`services`] - The pagination driver tying it all together
//! - [`error`] - Error types
//!
//! # Key Concepts
//!
//! ## Over-fetch-by-one
//!
//! Every page fetch asks for `limit + 1` records. The extra record is
//! never shown; whether it came back is what proves a further page exists,
//! without a separate count query.
//!
//! ## Direction
//!
//! A cursor "points next" (fetch records after its anchor) or not (fetch
//! the records before it). Combined with the requested sort order this
//! resolves to a comparison operator and an effective fetch order - see
//! [`query::resolve_operator`].
//!
//! # Usage
//!
//! ```ignore
//! use std::sync::Arc;
//! use segue::query::OrderDirection;
//! use segue::services::{PageRequest, Paginator};
//!
//! let paginator = Paginator::new(Arc::new(my_store));
//! let page = paginator.paginate(PageRequest {
//!     cursor: incoming_cursor, // Option<String> from the request
//!     limit: Some(20),
//!     order: OrderDirection::Desc,
//! }).await?;
//!
//! // page.records is the page in display order;
//! // page.page_info carries nextCursor / prevCursor for the response.
//! ```

pub mod cursor;
pub mod error;
pub mod models;
pub mod page;
pub mod ports;
pub mod query;
pub mod services;
