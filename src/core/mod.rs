//! Core business logic for Veil.
//!
//! - [`hooks`] - the pre-comment address filter applied to new comments
//! - [`migration`] - bulk anonymization of previously stored comments
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use veil::adapters::database::MemoryCommentStore;
//! use veil::anonymization::IpAnonymizer;
//! use veil::core::hooks::CommentHooks;
//! use veil::core::migration::BulkMigrator;
//! use veil::domain::CommentRecord;
//!
//! # async fn example() {
//! // New comments
//! let hooks = CommentHooks::with_anonymizer(IpAnonymizer::default());
//! assert_eq!(hooks.filter_comment_address("203.0.113.45"), "203.0.113.0");
//!
//! // Existing comments
//! let store = Arc::new(MemoryCommentStore::with_records([
//!     CommentRecord::new(1, "203.0.113.45"),
//! ]));
//! let migrator = BulkMigrator::new(store, IpAnonymizer::default());
//! assert_eq!(migrator.migrate_existing().await, 1);
//! # }
//! ```

pub mod hooks;
pub mod migration;
