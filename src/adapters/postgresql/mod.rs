//! PostgreSQL integration
//!
//! This module provides a [`CommentStore`](crate::adapters::database::CommentStore)
//! backed by an existing PostgreSQL comments table.

pub mod adapter;
pub mod client;
pub mod models;

pub use adapter::PostgreSQLCommentStore;
pub use client::PostgreSQLClient;
pub use models::CommentTable;
