//! Traversal-to-query mapping.
//!
//! A cursor's direction flag combines with the sort order the client asked
//! for to decide how the storage layer must fetch the page: which
//! comparison to apply against the anchor and which order to sort in.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Ordering direction for sorted queries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderDirection {
    /// Ascending order (oldest first).
    #[default]
    Asc,
    /// Descending order (newest first).
    Desc,
}

impl OrderDirection {
    /// Parse a client-supplied order, case-insensitively.
    ///
    /// Anything other than `asc`/`desc` yields `None`: an unrecognized
    /// order is a "cannot paginate this way" signal for the caller to
    /// reject or default, not an error raised here.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Some(Self::Asc),
            "desc" => Some(Self::Desc),
            _ => None,
        }
    }

    /// Lowercase SQL-ready form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    /// The opposite direction.
    pub fn reversed(&self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

impl fmt::Display for OrderDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Comparison applied against the cursor anchor when fetching a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonOp {
    /// Strictly greater than the anchor key.
    Gt,
    /// Strictly less than the anchor key.
    Lt,
}

impl ComparisonOp {
    /// SQL operator form.
    pub fn as_sql(&self) -> &'static str {
        match self {
            Self::Gt => ">",
            Self::Lt => "<",
        }
    }
}

/// Map a traversal direction and requested sort order to the comparison
/// operator and effective order the storage layer must fetch with.
///
/// Moving toward "next" in an ascending sort means fetching rows greater
/// than the anchor, sorted ascending; toward "next" in a descending sort
/// means rows less than the anchor, sorted descending. Moving toward
/// "previous" is traversal in the opposite direction, so the mapping swaps.
pub fn resolve_operator(
    points_next: bool,
    order: OrderDirection,
) -> (ComparisonOp, OrderDirection) {
    match (points_next, order) {
        (true, OrderDirection::Asc) | (false, OrderDirection::Desc) => {
            (ComparisonOp::Gt, OrderDirection::Asc)
        }
        (true, OrderDirection::Desc) | (false, OrderDirection::Asc) => {
            (ComparisonOp::Lt, OrderDirection::Desc)
        }
    }
}
