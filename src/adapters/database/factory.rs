//! Comment store factory
//!
//! Builds the comment store selected by `database_target`.

use crate::adapters::database::memory::MemoryCommentStore;
use crate::adapters::database::traits::CommentStore;
use crate::adapters::postgresql::adapter::PostgreSQLCommentStore;
use crate::adapters::postgresql::client::PostgreSQLClient;
use crate::config::schema::{DatabaseTarget, VeilConfig};
use crate::domain::{Result, VeilError};
use std::sync::Arc;

/// Create a comment store based on the configuration
///
/// # Errors
///
/// Returns an error if the selected backend is not configured or its client
/// cannot be created.
pub async fn create_comment_store(config: &VeilConfig) -> Result<Arc<dyn CommentStore>> {
    match config.database_target {
        DatabaseTarget::PostgreSQL => {
            let pg_config = config.postgresql.as_ref().ok_or_else(|| {
                VeilError::Configuration(
                    "postgresql configuration is required when database_target = 'postgresql'"
                        .to_string(),
                )
            })?;

            tracing::info!("Creating PostgreSQL comment store");
            let client = PostgreSQLClient::new(pg_config.clone()).await?;
            Ok(Arc::new(PostgreSQLCommentStore::new(client)?) as Arc<dyn CommentStore>)
        }
        DatabaseTarget::Memory => {
            tracing::info!("Creating in-memory comment store");
            Ok(Arc::new(MemoryCommentStore::new()) as Arc<dyn CommentStore>)
        }
    }
}
