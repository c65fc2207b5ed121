//! Comment store abstraction layer
//!
//! This module provides a trait-based abstraction over the host's comment
//! storage, so the migrator can run against PostgreSQL or an in-memory map.

pub mod factory;
pub mod memory;
pub mod traits;

pub use factory::create_comment_store;
pub use memory::MemoryCommentStore;
pub use traits::CommentStore;
