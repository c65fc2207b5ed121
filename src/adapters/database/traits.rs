//! Comment store abstraction
//!
//! This module defines the capability interface the bulk migrator needs from
//! the host's comment storage: one read of every comment that still carries an
//! address, and a keyed write of a single record's address.

use crate::domain::{CommentId, CommentRecord, Result};
use async_trait::async_trait;

/// Comment store trait
///
/// Implementations own the comment records. Veil never creates or deletes
/// records through this interface.
#[async_trait]
pub trait CommentStore: Send + Sync {
    /// Short human-readable name of the backend (for logs and CLI output)
    fn store_name(&self) -> &str;

    /// Test the store connection
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be reached.
    async fn test_connection(&self) -> Result<()> {
        Ok(())
    }

    /// Load every comment whose address field is a non-empty string
    ///
    /// # Errors
    ///
    /// Returns an error if the read query fails.
    async fn query_non_empty_addresses(&self) -> Result<Vec<CommentRecord>>;

    /// Overwrite the address of a single comment
    ///
    /// # Arguments
    ///
    /// * `id` - Identifier of the comment to update
    /// * `address` - New address value
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails. Each call is independent; a
    /// failure leaves other records untouched.
    async fn update_address(&self, id: CommentId, address: &str) -> Result<()>;
}
