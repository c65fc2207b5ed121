//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "veil.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing Veil configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2);
        }

        match fs::write(&self.output, Self::generate_config()) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Point [postgresql] at your comments table");
                println!("  2. Export VEIL_DATABASE_URL or add it to a .env file");
                println!("  3. Validate configuration: veil validate-config");
                println!("  4. Preview the migration: veil migrate --dry-run");
                println!("  5. Run the migration: veil migrate");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {e}");
                Ok(5)
            }
        }
    }

    fn generate_config() -> String {
        r#"# Veil Configuration File
# Anonymizes visitor IP addresses stored with user comments

# Comment store. "memory" is only for embedding Veil as a library and for
# tests; `veil migrate` requires "postgresql".
database_target = "postgresql"

[application]
# Log level (trace, debug, info, warn, error)
log_level = "info"

# Count affected comments without writing
dry_run = false

[anonymization]
# Stored in place of values that are not IP addresses.
# Must already be anonymized itself, e.g. 0.0.0.0 or ::
fallback_address = "0.0.0.0"

[anonymization.audit]
# One JSON line per rewritten comment; originals are stored as SHA-256 hashes
enabled = false
log_path = "./audit/migration.log"

[postgresql]
connection_string = "${VEIL_DATABASE_URL}"

# Comment table and columns (WordPress layout shown)
table = "wp_comments"
id_column = "comment_ID"
address_column = "comment_author_IP"

max_connections = 4
connection_timeout_seconds = 30
statement_timeout_seconds = 60

# disable | allow | prefer | require | verify-ca | verify-full
ssl_mode = "prefer"

[logging]
local_enabled = false
local_path = "./logs"
# daily | hourly | never
local_rotation = "daily"
"#
        .to_string()
    }
}
