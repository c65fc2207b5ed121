//! Bulk migrator
//!
//! Retroactively anonymizes the addresses of stored comments. The migrator
//! performs one read through the injected [`CommentStore`] and then one keyed
//! write per changed record, strictly in sequence. A failed write is logged
//! and skipped; it never aborts the scan.

use crate::adapters::database::CommentStore;
use crate::anonymization::{AuditLogger, IpAnonymizer};
use crate::core::migration::summary::MigrationSummary;
use crate::domain::{AddressKind, CommentRecord, Result};
use std::sync::Arc;
use std::time::Instant;
use uuid::Uuid;

/// Rewrites stored comment addresses with their anonymized form
pub struct BulkMigrator {
    store: Arc<dyn CommentStore>,
    anonymizer: IpAnonymizer,
    dry_run: bool,
    audit: Option<AuditLogger>,
}

impl BulkMigrator {
    /// Create a migrator over `store`
    pub fn new(store: Arc<dyn CommentStore>, anonymizer: IpAnonymizer) -> Self {
        Self {
            store,
            anonymizer,
            dry_run: false,
            audit: None,
        }
    }

    /// Count would-be updates without writing to the store
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Record each rewrite in an audit log
    pub fn with_audit(mut self, audit: AuditLogger) -> Self {
        self.audit = Some(audit);
        self
    }

    /// Anonymize every stored address and return the number of updated records
    ///
    /// Never fails: a failing read query is logged and reported as `0`.
    pub async fn migrate_existing(&self) -> usize {
        match self.run().await {
            Ok(summary) => summary.updated,
            Err(e) => {
                crate::log_error_with_context!(&e, "Failed to load comments for migration");
                0
            }
        }
    }

    /// Run the migration and return the full summary
    ///
    /// # Errors
    ///
    /// Returns an error only if the initial read query fails. Write failures
    /// are recorded in the summary.
    pub async fn run(&self) -> Result<MigrationSummary> {
        let start_time = Instant::now();
        let mut summary = MigrationSummary::new(Uuid::new_v4(), self.dry_run);

        crate::log_migration_start!(summary.run_id, self.store.store_name(), self.dry_run);

        let records = self.store.query_non_empty_addresses().await?;
        summary.scanned = records.len();

        for record in records {
            self.process_record(record, &mut summary).await;
        }

        let summary = summary.with_duration(start_time.elapsed());
        crate::log_migration_complete!(summary.updated, summary.duration);
        summary.log_summary();
        Ok(summary)
    }

    async fn process_record(&self, record: CommentRecord, summary: &mut MigrationSummary) {
        if record.has_empty_address() {
            summary.skipped_empty += 1;
            return;
        }

        let anonymized = self.anonymizer.anonymize(&record.address);
        if anonymized == record.address {
            summary.unchanged += 1;
            return;
        }

        if !self.dry_run {
            if let Err(e) = self.store.update_address(record.id, &anonymized).await {
                tracing::warn!(
                    comment_id = %record.id,
                    error = %e,
                    "Failed to update comment address, skipping"
                );
                summary.add_failure(record.id, e.to_string());
                return;
            }
        }

        summary.updated += 1;
        tracing::debug!(
            comment_id = %record.id,
            kind = AddressKind::classify(&record.address).label(),
            "Comment address anonymized"
        );

        if let Some(audit) = &self.audit {
            if let Err(e) = audit.log_update(
                summary.run_id,
                record.id,
                &record.address,
                &anonymized,
                self.dry_run,
            ) {
                tracing::warn!(comment_id = %record.id, error = %e, "Failed to write audit entry");
            }
        }
    }
}
