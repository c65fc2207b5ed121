//! Anonymization configuration

use crate::anonymization::anonymizer::IpAnonymizer;
use crate::domain::AddressKind;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Address stored when the input is not a valid IP literal
pub const DEFAULT_FALLBACK_ADDRESS: &str = "0.0.0.0";

/// Anonymization configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnonymizationConfig {
    /// Address substituted for empty or malformed input
    #[serde(default = "default_fallback_address")]
    pub fallback_address: String,

    /// Audit logging configuration
    #[serde(default)]
    pub audit: AuditConfig,
}

fn default_fallback_address() -> String {
    DEFAULT_FALLBACK_ADDRESS.to_string()
}

impl Default for AnonymizationConfig {
    fn default() -> Self {
        Self {
            fallback_address: default_fallback_address(),
            audit: AuditConfig::default(),
        }
    }
}

impl AnonymizationConfig {
    /// Validate the configuration
    ///
    /// The fallback must be a well-formed IP literal that the anonymizer maps
    /// to itself.
    pub fn validate(&self) -> Result<()> {
        if !AddressKind::classify(&self.fallback_address).is_valid() {
            anyhow::bail!(
                "anonymization.fallback_address '{}' is not a valid IPv4 or IPv6 address",
                self.fallback_address
            );
        }

        let anonymizer = IpAnonymizer::new(self.fallback_address.clone());
        if !anonymizer.is_fixed_point(&self.fallback_address) {
            anyhow::bail!(
                "anonymization.fallback_address '{}' is not already anonymized (it would become '{}')",
                self.fallback_address,
                anonymizer.anonymize(&self.fallback_address)
            );
        }

        self.audit
            .validate()
            .context("Invalid audit configuration")?;

        Ok(())
    }

    /// Apply environment variable overrides
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("VEIL_ANONYMIZATION_FALLBACK_ADDRESS") {
            self.fallback_address = val;
        }

        self.audit.apply_env_overrides()?;

        Ok(())
    }
}

/// Audit logging configuration for bulk migrations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditConfig {
    /// Enable audit logging
    #[serde(default)]
    pub enabled: bool,

    /// Audit log file path (JSON lines)
    #[serde(default = "default_audit_log_path")]
    pub log_path: PathBuf,
}

fn default_audit_log_path() -> PathBuf {
    PathBuf::from("./audit/migration.log")
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_path: default_audit_log_path(),
        }
    }
}

impl AuditConfig {
    /// Validate audit configuration
    pub fn validate(&self) -> Result<()> {
        if self.enabled && self.log_path.as_os_str().is_empty() {
            anyhow::bail!("anonymization.audit.log_path cannot be empty when audit is enabled");
        }
        Ok(())
    }

    /// Apply environment variable overrides
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("VEIL_ANONYMIZATION_AUDIT_ENABLED") {
            self.enabled = val
                .parse()
                .context("Invalid VEIL_ANONYMIZATION_AUDIT_ENABLED value")?;
        }

        if let Ok(val) = std::env::var("VEIL_ANONYMIZATION_AUDIT_LOG_PATH") {
            self.log_path = PathBuf::from(val);
        }

        Ok(())
    }
}
