//! In-memory comment store
//!
//! Keeps comments in an ordered map. Useful when Veil is embedded in a host
//! that already holds its comments in memory, and for exercising the migrator.

use crate::adapters::database::traits::CommentStore;
use crate::domain::{CommentId, CommentRecord, Result, StoreError};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::RwLock;

/// In-memory implementation of [`CommentStore`]
#[derive(Debug, Default)]
pub struct MemoryCommentStore {
    comments: RwLock<BTreeMap<CommentId, String>>,
}

impl MemoryCommentStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with records
    pub fn with_records(records: impl IntoIterator<Item = CommentRecord>) -> Self {
        let comments = records
            .into_iter()
            .map(|record| (record.id, record.address))
            .collect();
        Self {
            comments: RwLock::new(comments),
        }
    }

    /// Insert or replace a comment
    pub fn insert(&self, id: impl Into<CommentId>, address: impl Into<String>) -> Result<()> {
        let mut comments = self
            .comments
            .write()
            .map_err(|_| StoreError::ConnectionFailed("memory store lock poisoned".to_string()))?;
        comments.insert(id.into(), address.into());
        Ok(())
    }

    /// Current address of a comment, if it exists
    pub fn address_of(&self, id: impl Into<CommentId>) -> Option<String> {
        let id = id.into();
        self.comments
            .read()
            .ok()
            .and_then(|comments| comments.get(&id).cloned())
    }

    /// Number of stored comments
    pub fn len(&self) -> usize {
        self.comments.read().map(|c| c.len()).unwrap_or(0)
    }

    /// Returns true if the store holds no comments
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl CommentStore for MemoryCommentStore {
    fn store_name(&self) -> &str {
        "memory"
    }

    async fn query_non_empty_addresses(&self) -> Result<Vec<CommentRecord>> {
        let comments = self
            .comments
            .read()
            .map_err(|_| StoreError::QueryFailed("memory store lock poisoned".to_string()))?;

        Ok(comments
            .iter()
            .filter(|(_, address)| !address.is_empty())
            .map(|(id, address)| CommentRecord::new(*id, address.clone()))
            .collect())
    }

    async fn update_address(&self, id: CommentId, address: &str) -> Result<()> {
        let mut comments = self.comments.write().map_err(|_| StoreError::UpdateFailed {
            id: id.value(),
            message: "memory store lock poisoned".to_string(),
        })?;

        match comments.get_mut(&id) {
            Some(stored) => {
                *stored = address.to_string();
                Ok(())
            }
            None => Err(StoreError::CommentNotFound(id.value()).into()),
        }
    }
}
