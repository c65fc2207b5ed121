//! Migration summary and reporting
//!
//! A fresh summary is produced by every migration run; nothing is persisted.

use crate::domain::CommentId;
use chrono::{DateTime, Utc};
use std::time::Duration;
use uuid::Uuid;

/// A comment whose address could not be written back
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationFailure {
    /// Comment that failed to update
    pub comment_id: CommentId,

    /// Error message reported by the store
    pub message: String,
}

/// Summary of a bulk migration run
#[derive(Debug, Clone)]
pub struct MigrationSummary {
    /// Identifier of this run (also written to the audit log)
    pub run_id: Uuid,

    /// When the run started
    pub started_at: DateTime<Utc>,

    /// Records returned by the store
    pub scanned: usize,

    /// Records whose address was rewritten (or would be, in dry-run mode)
    pub updated: usize,

    /// Records already anonymized, left untouched
    pub unchanged: usize,

    /// Records with an empty address, left untouched
    pub skipped_empty: usize,

    /// Records whose write failed
    pub failed: usize,

    /// Per-record failure details
    pub failures: Vec<MigrationFailure>,

    /// Whether writes were suppressed
    pub dry_run: bool,

    /// Duration of the run
    pub duration: Duration,
}

impl MigrationSummary {
    /// Create a new empty summary
    pub fn new(run_id: Uuid, dry_run: bool) -> Self {
        Self {
            run_id,
            started_at: Utc::now(),
            scanned: 0,
            updated: 0,
            unchanged: 0,
            skipped_empty: 0,
            failed: 0,
            failures: Vec::new(),
            dry_run,
            duration: Duration::from_secs(0),
        }
    }

    /// Set the duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Record a failed write
    pub fn add_failure(&mut self, comment_id: CommentId, message: impl Into<String>) {
        self.failed += 1;
        self.failures.push(MigrationFailure {
            comment_id,
            message: message.into(),
        });
    }

    /// True if every eligible record was written
    pub fn is_successful(&self) -> bool {
        self.failed == 0
    }

    /// Message shown to the operator after the run
    pub fn operator_message(&self) -> String {
        if self.dry_run {
            format!("Would anonymize {} comment IPs.", self.updated)
        } else {
            format!("Anonymized {} comment IPs successfully.", self.updated)
        }
    }

    /// Log the summary
    pub fn log_summary(&self) {
        tracing::info!(
            run_id = %self.run_id,
            scanned = self.scanned,
            updated = self.updated,
            unchanged = self.unchanged,
            skipped_empty = self.skipped_empty,
            failed = self.failed,
            dry_run = self.dry_run,
            duration_ms = self.duration.as_millis() as u64,
            "Migration completed"
        );

        if !self.failures.is_empty() {
            tracing::warn!(
                failure_count = self.failures.len(),
                "Some comment addresses could not be updated"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_summary_is_empty() {
        let summary = MigrationSummary::new(Uuid::new_v4(), false);
        assert_eq!(summary.scanned, 0);
        assert_eq!(summary.updated, 0);
        assert!(summary.is_successful());
    }

    #[test]
    fn test_add_failure() {
        let mut summary = MigrationSummary::new(Uuid::new_v4(), false);
        summary.add_failure(CommentId::new(3), "timeout");

        assert_eq!(summary.failed, 1);
        assert_eq!(summary.failures[0].comment_id, CommentId::new(3));
        assert!(!summary.is_successful());
    }

    #[test]
    fn test_operator_message() {
        let mut summary = MigrationSummary::new(Uuid::new_v4(), false);
        summary.updated = 4;
        assert_eq!(
            summary.operator_message(),
            "Anonymized 4 comment IPs successfully."
        );

        summary.dry_run = true;
        assert_eq!(summary.operator_message(), "Would anonymize 4 comment IPs.");
    }

    #[test]
    fn test_with_duration() {
        let summary =
            MigrationSummary::new(Uuid::new_v4(), false).with_duration(Duration::from_millis(250));
        assert_eq!(summary.duration, Duration::from_millis(250));
    }
}
