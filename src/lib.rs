// Veil - Comment IP Address Anonymizer
// Copyright (c) 2025 Veil Contributors
// Licensed under the MIT License

//! # Veil - comment IP address anonymizer
//!
//! Veil strips the identifying part of visitor IP addresses before they are
//! stored with user comments, and retroactively anonymizes addresses that
//! are already stored.
//!
//! ## Overview
//!
//! - **IPv4** addresses lose their last octet: `203.0.113.45` becomes `203.0.113.0`
//! - **IPv6** addresses lose their last group: `2001:db8::1` becomes `2001:db8::0`
//! - Anything else is replaced with a fallback address (`0.0.0.0` by default)
//!
//! Anonymization is idempotent, so the migration can be run any number of
//! times and only ever touches records that still hold a full address.
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Pre-comment hook and bulk migration
//! - [`anonymization`] - Address masking, fallback configuration, audit trail
//! - [`adapters`] - Comment stores (PostgreSQL, in-memory)
//! - [`domain`] - Core domain types and errors
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use veil::adapters::database::create_comment_store;
//! use veil::anonymization::IpAnonymizer;
//! use veil::config::VeilConfig;
//! use veil::core::migration::BulkMigrator;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = VeilConfig::from_file("veil.toml")?;
//!
//!     let store = create_comment_store(&config).await?;
//!     let migrator = BulkMigrator::new(store, IpAnonymizer::from_config(&config.anonymization));
//!
//!     let summary = migrator.run().await?;
//!     println!("{}", summary.operator_message());
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Veil uses the [`domain::VeilError`] type for all library errors:
//!
//! ```rust,no_run
//! use veil::domain::VeilError;
//!
//! fn example() -> Result<(), VeilError> {
//!     let config = veil::config::VeilConfig::from_file("veil.toml")?;
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod anonymization;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
