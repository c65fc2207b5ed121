//! Audit logger for bulk migrations
//!
//! Writes one JSON line per rewritten comment. The original address is only
//! ever recorded as a SHA-256 digest.

use crate::domain::CommentId;
use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use uuid::Uuid;

/// Audit log entry
#[derive(Debug, Serialize)]
struct AuditLogEntry<'a> {
    timestamp: String,
    run_id: String,
    comment_id: i64,
    /// SHA-256 hash of the original address
    original_hash: String,
    anonymized: &'a str,
    dry_run: bool,
}

/// Audit logger for migration runs
#[derive(Debug, Clone)]
pub struct AuditLogger {
    log_path: PathBuf,
    enabled: bool,
}

impl AuditLogger {
    /// Create a new audit logger
    pub fn new(log_path: PathBuf, enabled: bool) -> Result<Self> {
        if enabled {
            if let Some(parent) = log_path.parent() {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create audit log directory: {}", parent.display())
                })?;
            }
        }

        Ok(Self { log_path, enabled })
    }

    /// Create an audit logger from configuration
    pub fn from_config(config: &crate::anonymization::config::AuditConfig) -> Result<Self> {
        Self::new(config.log_path.clone(), config.enabled)
    }

    /// Whether entries are written
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Record a rewritten comment address
    pub fn log_update(
        &self,
        run_id: Uuid,
        comment_id: CommentId,
        original: &str,
        anonymized: &str,
        dry_run: bool,
    ) -> Result<()> {
        if !self.enabled {
            return Ok(());
        }

        let entry = AuditLogEntry {
            timestamp: Utc::now().to_rfc3339(),
            run_id: run_id.to_string(),
            comment_id: comment_id.value(),
            original_hash: hash_address(original),
            anonymized,
            dry_run,
        };

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .with_context(|| format!("Failed to open audit log: {}", self.log_path.display()))?;

        let json_line = serde_json::to_string(&entry).context("Failed to serialize audit entry")?;
        writeln!(file, "{json_line}").context("Failed to write audit entry")?;

        Ok(())
    }
}

/// Hash an address using SHA-256
fn hash_address(value: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(value.as_bytes());
    format!("{:x}", hasher.finalize())
}
