//! External system integrations for Veil.
//!
//! - [`database`] - comment store abstraction (trait, in-memory store, factory)
//! - [`postgresql`] - PostgreSQL comment store
//!
//! # Design Pattern
//!
//! Adapters isolate the host's storage behind the
//! [`CommentStore`](database::CommentStore) trait so the migrator can be
//! exercised against an in-memory store.
//!
//! ```rust
//! use veil::adapters::database::{CommentStore, MemoryCommentStore};
//! use veil::domain::CommentRecord;
//!
//! # async fn example() -> veil::domain::Result<()> {
//! let store = MemoryCommentStore::with_records([CommentRecord::new(1, "203.0.113.45")]);
//! let records = store.query_non_empty_addresses().await?;
//! assert_eq!(records.len(), 1);
//! # Ok(())
//! # }
//! ```

pub mod database;
pub mod postgresql;
