//! Configuration management for Veil.
//!
//! Veil reads a TOML file (default `veil.toml`) with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `VEIL_<SECTION>_<KEY>` environment overrides
//! - Default values for optional settings
//! - Validation before anything touches the comment store
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use veil::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("veil.toml")?;
//!
//! println!("Fallback address: {}", config.anonymization.fallback_address);
//! if let Some(pg) = &config.postgresql {
//!     println!("Comment table: {}", pg.table);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Example Configuration
//!
//! ```toml
//! database_target = "postgresql"
//!
//! [application]
//! log_level = "info"
//!
//! [anonymization]
//! fallback_address = "0.0.0.0"
//!
//! [postgresql]
//! connection_string = "${VEIL_DATABASE_URL}"
//! table = "wp_comments"
//! id_column = "comment_ID"
//! address_column = "comment_author_IP"
//! ```

pub mod loader;
pub mod schema;
pub mod secret;

pub use loader::{load_config, parse_config};
pub use schema::{ApplicationConfig, DatabaseTarget, LoggingConfig, PostgreSQLConfig, VeilConfig};
pub use secret::{secret_string, SecretString, SecretValue};
