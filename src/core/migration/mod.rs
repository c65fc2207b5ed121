//! Bulk migration of stored comment addresses
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use veil::adapters::database::MemoryCommentStore;
//! use veil::anonymization::IpAnonymizer;
//! use veil::core::migration::BulkMigrator;
//! use veil::domain::CommentRecord;
//!
//! # async fn example() {
//! let store = Arc::new(MemoryCommentStore::with_records([
//!     CommentRecord::new(1, "203.0.113.45"),
//! ]));
//! let migrator = BulkMigrator::new(store, IpAnonymizer::default());
//! assert_eq!(migrator.migrate_existing().await, 1);
//! # }
//! ```

pub mod migrator;
pub mod summary;

pub use migrator::BulkMigrator;
pub use summary::{MigrationFailure, MigrationSummary};
