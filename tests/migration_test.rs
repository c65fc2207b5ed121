//! Integration tests for the bulk migrator against in-process stores

use async_trait::async_trait;
use sha2::{Digest, Sha256};
use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;
use veil::adapters::database::{CommentStore, MemoryCommentStore};
use veil::anonymization::{AuditLogger, IpAnonymizer};
use veil::core::migration::BulkMigrator;
use veil::domain::{CommentId, CommentRecord, Result, StoreError};

/// Wraps a memory store, failing writes for selected ids and recording every
/// write attempt
struct FlakyStore {
    inner: MemoryCommentStore,
    failing_ids: HashSet<CommentId>,
    fail_query: bool,
    writes: Mutex<Vec<CommentId>>,
}

impl FlakyStore {
    fn new(records: Vec<CommentRecord>) -> Self {
        Self {
            inner: MemoryCommentStore::with_records(records),
            failing_ids: HashSet::new(),
            fail_query: false,
            writes: Mutex::new(Vec::new()),
        }
    }

    fn failing_on(mut self, id: i64) -> Self {
        self.failing_ids.insert(CommentId::new(id));
        self
    }

    fn with_failing_query(mut self) -> Self {
        self.fail_query = true;
        self
    }

    fn write_count(&self) -> usize {
        self.writes.lock().unwrap().len()
    }
}

#[async_trait]
impl CommentStore for FlakyStore {
    fn store_name(&self) -> &str {
        "flaky"
    }

    async fn query_non_empty_addresses(&self) -> Result<Vec<CommentRecord>> {
        if self.fail_query {
            return Err(StoreError::QueryFailed("connection reset".to_string()).into());
        }
        self.inner.query_non_empty_addresses().await
    }

    async fn update_address(&self, id: CommentId, address: &str) -> Result<()> {
        self.writes.lock().unwrap().push(id);
        if self.failing_ids.contains(&id) {
            return Err(StoreError::UpdateFailed {
                id: id.value(),
                message: "deadlock detected".to_string(),
            }
            .into());
        }
        self.inner.update_address(id, address).await
    }
}

/// A store whose query ignores the non-empty filter
struct UnfilteredStore {
    records: Vec<CommentRecord>,
}

#[async_trait]
impl CommentStore for UnfilteredStore {
    fn store_name(&self) -> &str {
        "unfiltered"
    }

    async fn query_non_empty_addresses(&self) -> Result<Vec<CommentRecord>> {
        Ok(self.records.clone())
    }

    async fn update_address(&self, id: CommentId, _address: &str) -> Result<()> {
        Err(StoreError::CommentNotFound(id.value()).into())
    }
}

fn mixed_records() -> Vec<CommentRecord> {
    vec![
        CommentRecord::new(1, "203.0.113.45"),
        CommentRecord::new(2, ""),
        CommentRecord::new(3, "203.0.113.0"),
    ]
}

#[tokio::test]
async fn test_only_changed_records_are_written() {
    let store = Arc::new(FlakyStore::new(mixed_records()));
    let migrator = BulkMigrator::new(store.clone(), IpAnonymizer::default());

    assert_eq!(migrator.migrate_existing().await, 1);
    assert_eq!(store.write_count(), 1);
    assert_eq!(
        store.inner.address_of(CommentId::new(1)).as_deref(),
        Some("203.0.113.0")
    );
    assert_eq!(store.inner.address_of(CommentId::new(2)).as_deref(), Some(""));
    assert_eq!(
        store.inner.address_of(CommentId::new(3)).as_deref(),
        Some("203.0.113.0")
    );
}

#[tokio::test]
async fn test_empty_store_yields_zero() {
    let store = Arc::new(MemoryCommentStore::new());
    let migrator = BulkMigrator::new(store, IpAnonymizer::default());
    assert_eq!(migrator.migrate_existing().await, 0);
}

#[tokio::test]
async fn test_repeated_migration_is_a_no_op() {
    let store = Arc::new(FlakyStore::new(vec![
        CommentRecord::new(1, "198.51.100.23"),
        CommentRecord::new(2, "2001:db8::7"),
        CommentRecord::new(3, "spam-bot"),
    ]));
    let migrator = BulkMigrator::new(store.clone(), IpAnonymizer::default());

    assert_eq!(migrator.migrate_existing().await, 3);
    assert_eq!(migrator.migrate_existing().await, 0);
    assert_eq!(store.write_count(), 3);
    assert_eq!(
        store.inner.address_of(CommentId::new(3)).as_deref(),
        Some("0.0.0.0")
    );
}

#[tokio::test]
async fn test_write_failure_is_skipped_and_not_counted() {
    let store = Arc::new(
        FlakyStore::new(vec![
            CommentRecord::new(1, "203.0.113.45"),
            CommentRecord::new(2, "203.0.113.46"),
            CommentRecord::new(3, "203.0.113.47"),
        ])
        .failing_on(2),
    );
    let migrator = BulkMigrator::new(store.clone(), IpAnonymizer::default());

    let summary = migrator.run().await.unwrap();
    assert_eq!(summary.scanned, 3);
    assert_eq!(summary.updated, 2);
    assert_eq!(summary.failed, 1);
    assert_eq!(summary.failures[0].comment_id, CommentId::new(2));
    assert!(!summary.is_successful());

    // The record after the failure was still processed
    assert_eq!(store.write_count(), 3);
    assert_eq!(
        store.inner.address_of(CommentId::new(2)).as_deref(),
        Some("203.0.113.46")
    );
    assert_eq!(
        store.inner.address_of(CommentId::new(3)).as_deref(),
        Some("203.0.113.0")
    );
}

#[tokio::test]
async fn test_migrate_existing_excludes_failed_writes() {
    let store = Arc::new(
        FlakyStore::new(vec![
            CommentRecord::new(1, "203.0.113.45"),
            CommentRecord::new(2, "2001:db8::9"),
            CommentRecord::new(3, "not-an-ip"),
        ])
        .failing_on(1),
    );
    let migrator = BulkMigrator::new(store.clone(), IpAnonymizer::default());

    assert_eq!(migrator.migrate_existing().await, 2);
    assert_eq!(store.write_count(), 3);
    assert_eq!(
        store.inner.address_of(CommentId::new(1)).as_deref(),
        Some("203.0.113.45")
    );
    assert_eq!(
        store.inner.address_of(CommentId::new(3)).as_deref(),
        Some("0.0.0.0")
    );
}

#[tokio::test]
async fn test_failing_query_yields_zero_or_error() {
    let store = Arc::new(FlakyStore::new(mixed_records()).with_failing_query());
    let migrator = BulkMigrator::new(store.clone(), IpAnonymizer::default());

    assert_eq!(migrator.migrate_existing().await, 0);
    assert!(migrator.run().await.is_err());
    assert_eq!(store.write_count(), 0);
}

#[tokio::test]
async fn test_empty_addresses_from_store_are_skipped() {
    let store = Arc::new(UnfilteredStore {
        records: vec![CommentRecord::new(1, ""), CommentRecord::new(2, "")],
    });
    let migrator = BulkMigrator::new(store, IpAnonymizer::default());

    let summary = migrator.run().await.unwrap();
    assert_eq!(summary.updated, 0);
    assert_eq!(summary.skipped_empty, 2);
    assert_eq!(summary.failed, 0);
}

#[tokio::test]
async fn test_dry_run_reports_without_writing() {
    let store = Arc::new(FlakyStore::new(mixed_records()));
    let migrator = BulkMigrator::new(store.clone(), IpAnonymizer::default()).with_dry_run(true);

    let summary = migrator.run().await.unwrap();
    assert!(summary.dry_run);
    assert_eq!(summary.updated, 1);
    assert_eq!(summary.unchanged, 1);
    assert_eq!(summary.operator_message(), "Would anonymize 1 comment IPs.");
    assert_eq!(store.write_count(), 0);
    assert_eq!(
        store.inner.address_of(CommentId::new(1)).as_deref(),
        Some("203.0.113.45")
    );
}

#[tokio::test]
async fn test_operator_message_after_migration() {
    let store = Arc::new(MemoryCommentStore::with_records(mixed_records()));
    let migrator = BulkMigrator::new(store, IpAnonymizer::default());

    let summary = migrator.run().await.unwrap();
    assert_eq!(
        summary.operator_message(),
        "Anonymized 1 comment IPs successfully."
    );
}

#[tokio::test]
async fn test_audit_log_records_hashed_originals() {
    let dir = TempDir::new().unwrap();
    let log_path = dir.path().join("audit").join("migration.log");
    let audit = AuditLogger::new(log_path.clone(), true).unwrap();

    let store = Arc::new(
        FlakyStore::new(vec![
            CommentRecord::new(1, "203.0.113.45"),
            CommentRecord::new(2, "2001:db8::1"),
            CommentRecord::new(3, "203.0.113.0"),
        ])
        .failing_on(2),
    );
    let migrator = BulkMigrator::new(store, IpAnonymizer::default()).with_audit(audit);
    let summary = migrator.run().await.unwrap();

    let contents = std::fs::read_to_string(&log_path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 1);
    assert!(!contents.contains("203.0.113.45"));

    let entry: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
    let expected_hash = format!("{:x}", Sha256::digest(b"203.0.113.45"));
    assert_eq!(entry["comment_id"], 1);
    assert_eq!(entry["original_hash"], expected_hash);
    assert_eq!(entry["anonymized"], "203.0.113.0");
    assert_eq!(entry["run_id"], summary.run_id.to_string());
}
