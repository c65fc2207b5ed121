//! Audit logging module
//!
//! Provides structured audit logging for bulk migrations.

pub mod logger;

pub use logger::AuditLogger;
