//! Comment record model
//!
//! Only the two attributes Veil touches are modelled: the immutable identifier
//! and the mutable submitter address.

use super::ids::CommentId;
use serde::{Deserialize, Serialize};

/// A stored comment as seen by the bulk migrator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentRecord {
    /// Unique, immutable record identifier
    pub id: CommentId,

    /// Submitter address as currently stored
    pub address: String,
}

impl CommentRecord {
    /// Creates a new comment record
    pub fn new(id: impl Into<CommentId>, address: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            address: address.into(),
        }
    }

    /// Returns true if the stored address is the empty string
    pub fn has_empty_address(&self) -> bool {
        self.address.is_empty()
    }
}
