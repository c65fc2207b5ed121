//! Migrate command implementation
//!
//! Administrative trigger for the bulk migrator: anonymizes every address
//! already stored in the configured comment store.

use crate::adapters::database::create_comment_store;
use crate::anonymization::{AuditLogger, IpAnonymizer};
use crate::config::load_config;
use crate::config::schema::DatabaseTarget;
use crate::core::migration::BulkMigrator;
use clap::Args;
use std::io::{self, Write};

/// Arguments for the migrate command
#[derive(Args, Debug)]
pub struct MigrateArgs {
    /// Skip confirmation prompt
    #[arg(short, long)]
    pub yes: bool,

    /// Count the comments that would change without writing anything
    #[arg(long)]
    pub dry_run: bool,
}

impl MigrateArgs {
    /// Execute the migrate command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!("Starting migrate command");

        let mut config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                tracing::error!(error = %e, "Failed to load configuration");
                eprintln!("Failed to load configuration: {e}");
                return Ok(2);
            }
        };

        // The memory store starts empty in a fresh process
        if config.database_target == DatabaseTarget::Memory {
            tracing::error!("Migration requires a persistent comment store");
            eprintln!(
                "database_target = \"memory\" is only for embedding and tests; \
                 set database_target = \"postgresql\" to migrate stored comments"
            );
            return Ok(2);
        }

        if self.dry_run {
            tracing::info!("Enabling dry-run mode from CLI");
            config.application.dry_run = true;
        }
        let dry_run = config.application.dry_run;

        if dry_run {
            println!("🔍 DRY RUN MODE - No comments will be modified");
            println!();
        }

        if !self.yes && !dry_run {
            println!("Migration Configuration:");
            println!("  Store: {:?}", config.database_target);
            if let Some(ref pg) = config.postgresql {
                println!("  Table: {}", pg.table);
                println!("  Address column: {}", pg.address_column);
            }
            println!(
                "  Fallback address: {}",
                config.anonymization.fallback_address
            );
            println!();
            println!("This rewrites stored addresses and cannot be undone.");
            print!("Proceed with migration? [y/N]: ");
            io::stdout().flush()?;

            let mut input = String::new();
            io::stdin().read_line(&mut input)?;

            if !input.trim().eq_ignore_ascii_case("y") {
                println!("Migration cancelled.");
                return Ok(0);
            }
        }

        let store = match create_comment_store(&config).await {
            Ok(s) => s,
            Err(e) => {
                tracing::error!(error = %e, "Failed to create comment store");
                eprintln!("Failed to initialize comment store: {e}");
                return Ok(4);
            }
        };

        if let Err(e) = store.test_connection().await {
            tracing::error!(error = %e, store = store.store_name(), "Connection test failed");
            eprintln!("Failed to connect to comment store: {e}");
            return Ok(4);
        }

        let mut migrator = BulkMigrator::new(
            store,
            IpAnonymizer::from_config(&config.anonymization),
        )
        .with_dry_run(dry_run);

        if config.anonymization.audit.enabled {
            match AuditLogger::from_config(&config.anonymization.audit) {
                Ok(audit) => migrator = migrator.with_audit(audit),
                Err(e) => {
                    tracing::error!(error = %e, "Failed to open audit log");
                    eprintln!("Failed to open audit log: {e:#}");
                    return Ok(2);
                }
            }
        }

        println!("🚀 Anonymizing stored comment addresses...");
        println!();

        match migrator.run().await {
            Ok(summary) => {
                println!("{}", summary.operator_message());
                if summary.failed > 0 {
                    println!(
                        "⚠️  {} comment(s) could not be updated, see logs for details",
                        summary.failed
                    );
                }
                Ok(0)
            }
            Err(e) => {
                crate::log_error_with_context!(&e, "Migration query failed");
                eprintln!("Migration failed: {e}");
                Ok(5)
            }
        }
    }
}
