//! Logging and observability
//!
//! This module provides structured logging with support for:
//! - Configurable log levels
//! - Console output
//! - Local JSON file logging with rotation
//!
//! Raw visitor addresses are never logged at `info` or above.
//!
//! # Example
//!
//! ```no_run
//! use veil::logging::init_logging;
//! use veil::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

pub use structured::{init_logging, LoggingGuard};

/// Log the start of a bulk migration run
///
/// # Example
///
/// ```no_run
/// use veil::log_migration_start;
/// use uuid::Uuid;
///
/// log_migration_start!(Uuid::new_v4(), "postgresql", false);
/// ```
#[macro_export]
macro_rules! log_migration_start {
    ($run_id:expr, $store:expr, $dry_run:expr) => {
        tracing::info!(
            run_id = %$run_id,
            store = %$store,
            dry_run = $dry_run,
            "Starting comment address migration"
        );
    };
}

/// Log the completion of a bulk migration run
///
/// # Example
///
/// ```no_run
/// use veil::log_migration_complete;
/// use std::time::Duration;
///
/// log_migration_complete!(42, Duration::from_secs(3));
/// ```
#[macro_export]
macro_rules! log_migration_complete {
    ($count:expr, $duration:expr) => {
        tracing::info!(
            updated = $count,
            duration_ms = $duration.as_millis() as u64,
            "Comment address migration completed"
        );
    };
}

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use veil::log_error_with_context;
/// use veil::domain::VeilError;
///
/// let error = VeilError::Configuration("Invalid config".to_string());
/// log_error_with_context!(&error, "Failed to load configuration");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "Error occurred"
        );
    };
}
