//! Address anonymization for Veil
//!
//! This module masks visitor addresses before they are stored with comments
//! and when existing comments are migrated.
//!
//! - [`anonymizer`] - the pure address masking function
//! - [`config`] - fallback address and audit settings
//! - [`audit`] - JSON-lines audit trail of migration rewrites
//!
//! # Usage
//!
//! ```rust
//! use veil::anonymization::{AnonymizationConfig, IpAnonymizer};
//!
//! let config = AnonymizationConfig::default();
//! let anonymizer = IpAnonymizer::from_config(&config);
//! assert_eq!(anonymizer.anonymize("198.51.100.23"), "198.51.100.0");
//! ```

pub mod anonymizer;
pub mod audit;
pub mod config;

pub use anonymizer::{anonymize, IpAnonymizer};
pub use audit::AuditLogger;
pub use config::AnonymizationConfig;
