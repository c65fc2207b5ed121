//! PostgreSQL comment store
//!
//! Implements [`CommentStore`] on top of [`PostgreSQLClient`].

use crate::adapters::database::traits::CommentStore;
use crate::adapters::postgresql::client::PostgreSQLClient;
use crate::adapters::postgresql::models::CommentTable;
use crate::domain::{CommentId, CommentRecord, Result, StoreError};
use async_trait::async_trait;
use std::sync::Arc;

/// PostgreSQL implementation of [`CommentStore`]
pub struct PostgreSQLCommentStore {
    client: Arc<PostgreSQLClient>,
    table: CommentTable,
    select_sql: String,
    update_sql: String,
}

impl PostgreSQLCommentStore {
    /// Create a new store from a client
    ///
    /// # Errors
    ///
    /// Returns an error if the configured table or column names are not
    /// valid SQL identifiers.
    pub fn new(client: PostgreSQLClient) -> Result<Self> {
        Self::new_with_arc(Arc::new(client))
    }

    /// Create a new store with an Arc-wrapped client
    pub fn new_with_arc(client: Arc<PostgreSQLClient>) -> Result<Self> {
        let table = CommentTable::from_config(client.config())?;
        Ok(Self {
            select_sql: table.select_non_empty_sql(),
            update_sql: table.update_address_sql(),
            client,
            table,
        })
    }
}

#[async_trait]
impl CommentStore for PostgreSQLCommentStore {
    fn store_name(&self) -> &str {
        "postgresql"
    }

    async fn test_connection(&self) -> Result<()> {
        self.client.test_connection().await
    }

    async fn query_non_empty_addresses(&self) -> Result<Vec<CommentRecord>> {
        let rows = self.client.query(&self.select_sql, &[]).await?;

        let mut records = Vec::with_capacity(rows.len());
        for row in rows {
            let id: i64 = row
                .try_get("comment_id")
                .map_err(|e| StoreError::QueryFailed(format!("Invalid comment id: {e}")))?;
            let address: String = row
                .try_get("address")
                .map_err(|e| StoreError::QueryFailed(format!("Invalid address: {e}")))?;
            records.push(CommentRecord::new(id, address));
        }

        tracing::debug!(
            table = %self.table.table(),
            count = records.len(),
            "Loaded comments with stored addresses"
        );
        Ok(records)
    }

    async fn update_address(&self, id: CommentId, address: &str) -> Result<()> {
        let comment_id = id.value();
        self.client
            .execute(&self.update_sql, &[&address, &comment_id])
            .await
            .map_err(|e| StoreError::UpdateFailed {
                id: comment_id,
                message: e.to_string(),
            })?;
        Ok(())
    }
}
