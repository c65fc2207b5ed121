//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the Veil configuration file.

use crate::adapters::postgresql::client::redact_connection_string;
use crate::config::load_config;
use crate::config::schema::DatabaseTarget;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    ///
    /// `load_config` already validates, so a load failure is reported as a
    /// configuration error.
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Configuration validation failed");
                println!("   Error: {e}");
                return Ok(2);
            }
        };

        println!("✅ Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!("  Dry Run: {}", config.application.dry_run);
        println!(
            "  Fallback Address: {}",
            config.anonymization.fallback_address
        );
        println!(
            "  Audit Log: {}",
            if config.anonymization.audit.enabled {
                config.anonymization.audit.log_path.display().to_string()
            } else {
                "disabled".to_string()
            }
        );

        match config.database_target {
            DatabaseTarget::PostgreSQL => {
                if let Some(ref pg_config) = config.postgresql {
                    use secrecy::ExposeSecret;
                    println!("  Database Target: PostgreSQL");
                    println!(
                        "  PostgreSQL Connection: {}",
                        redact_connection_string(pg_config.connection_string.expose_secret().as_ref())
                    );
                    println!(
                        "  Comment Table: {} ({}, {})",
                        pg_config.table, pg_config.id_column, pg_config.address_column
                    );
                    println!("  Max Connections: {}", pg_config.max_connections);
                    println!("  SSL Mode: {}", pg_config.ssl_mode);
                }
            }
            DatabaseTarget::Memory => {
                println!("  Database Target: in-memory (embedding and tests only)");
                println!("  Note: `veil migrate` needs database_target = \"postgresql\"");
            }
        }
        println!();
        Ok(0)
    }
}
