//! Anonymize command implementation
//!
//! Runs addresses through the same pre-comment hook that new comments pass
//! through, so operators can check what will be stored.

use crate::anonymization::IpAnonymizer;
use crate::config::load_config;
use crate::core::hooks::CommentHooks;
use clap::Args;
use std::path::Path;

/// Arguments for the anonymize command
#[derive(Args, Debug)]
pub struct AnonymizeArgs {
    /// Addresses to anonymize
    #[arg(required = true, value_name = "ADDRESS")]
    pub addresses: Vec<String>,
}

impl AnonymizeArgs {
    /// Execute the anonymize command
    ///
    /// The configured fallback is used when the configuration file exists,
    /// otherwise the built-in default.
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let anonymizer = if Path::new(config_path).exists() {
            match load_config(config_path) {
                Ok(config) => IpAnonymizer::from_config(&config.anonymization),
                Err(e) => {
                    tracing::error!(error = %e, "Failed to load configuration");
                    eprintln!("Failed to load configuration: {e}");
                    return Ok(2);
                }
            }
        } else {
            tracing::debug!(config_path = %config_path, "No configuration file, using defaults");
            IpAnonymizer::default()
        };

        let hooks = CommentHooks::with_anonymizer(anonymizer);
        for line in self.render(&hooks) {
            println!("{line}");
        }
        Ok(0)
    }

    fn render(&self, hooks: &CommentHooks) -> Vec<String> {
        self.addresses
            .iter()
            .map(|address| {
                let filtered = hooks.filter_comment_address(address.as_str());
                if self.addresses.len() == 1 {
                    filtered
                } else {
                    format!("{address} -> {filtered}")
                }
            })
            .collect()
    }
}
