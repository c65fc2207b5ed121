//! Domain identifier types
//!
//! Comment identifiers are owned by the host's comment store. Veil never
//! creates them; it only reads them back and uses them as update keys.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Comment identifier newtype wrapper
///
/// Wraps the host's integer primary key for a comment row.
///
/// # Examples
///
/// ```
/// use veil::domain::ids::CommentId;
/// use std::str::FromStr;
///
/// let id = CommentId::from_str("42").unwrap();
/// assert_eq!(id.value(), 42);
/// assert_eq!(id.to_string(), "42");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommentId(i64);

impl CommentId {
    /// Creates a new CommentId
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw integer key
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for CommentId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl FromStr for CommentId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(Self)
            .map_err(|e| format!("Invalid comment ID '{s}': {e}"))
    }
}
