//! CLI command implementations
//!
//! Each handler returns the process exit code: 0 success, 2 configuration
//! error, 4 connection error, 5 fatal error.

pub mod anonymize;
pub mod init;
pub mod migrate;
pub mod validate;
