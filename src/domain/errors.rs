//! Domain error types
//!
//! This module defines the error hierarchy for Veil. Errors are domain-specific
//! and don't expose third-party driver types.
//!
//! Note that a malformed visitor address is never an error: the anonymizer
//! resolves it to the configured fallback address.

use thiserror::Error;

/// Main Veil error type
#[derive(Debug, Error)]
pub enum VeilError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Comment store errors
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Network/connection errors
    #[error("Connection error: {0}")]
    Connection(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

/// Comment store errors
///
/// Errors raised by [`CommentStore`](crate::adapters::database::CommentStore)
/// implementations while reading or writing comment records.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Failed to obtain a connection
    #[error("Failed to connect to comment store: {0}")]
    ConnectionFailed(String),

    /// Failed to read comment records
    #[error("Failed to query comment records: {0}")]
    QueryFailed(String),

    /// Failed to write a comment record
    #[error("Failed to update comment {id}: {message}")]
    UpdateFailed { id: i64, message: String },

    /// The record to update does not exist
    #[error("Comment not found: {0}")]
    CommentNotFound(i64),

    /// Invalid SQL identifier in the store configuration
    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(String),
}

impl From<std::io::Error> for VeilError {
    fn from(err: std::io::Error) -> Self {
        VeilError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for VeilError {
    fn from(err: serde_json::Error) -> Self {
        VeilError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for VeilError {
    fn from(err: toml::de::Error) -> Self {
        VeilError::Configuration(format!("TOML parse error: {err}"))
    }
}
