//! PostgreSQL client implementation
//!
//! This module provides the pooled client used by the comment store adapter.

use crate::config::schema::PostgreSQLConfig;
use crate::domain::{Result, StoreError, VeilError};
use deadpool_postgres::{Config as PoolConfig, Manager, ManagerConfig, Pool, RecyclingMethod};
use postgres_native_tls::MakeTlsConnector;
use secrecy::ExposeSecret;
use std::time::Duration;
use tokio_postgres::config::SslMode;
use tokio_postgres::{NoTls, Row};

/// PostgreSQL client for Veil
///
/// Provides pooled connections with a per-statement timeout.
pub struct PostgreSQLClient {
    /// Connection pool
    pool: Pool,

    /// Configuration
    config: PostgreSQLConfig,
}

impl PostgreSQLClient {
    /// Create a new PostgreSQL client
    ///
    /// # Errors
    ///
    /// Returns an error if the connection string is invalid, the TLS
    /// connector cannot be built, or the pool cannot be created.
    pub async fn new(config: PostgreSQLConfig) -> Result<Self> {
        let mut pg_config: tokio_postgres::Config = config
            .connection_string
            .expose_secret()
            .as_ref()
            .parse()
            .map_err(|e| {
                VeilError::Configuration(format!("Invalid PostgreSQL connection string: {e}"))
            })?;
        pg_config.ssl_mode(ssl_mode_for(&config.ssl_mode));

        let mut pool_config = PoolConfig::new();
        pool_config.manager = Some(ManagerConfig {
            recycling_method: RecyclingMethod::Fast,
        });
        let manager_config = pool_config.get_manager_config();

        let manager = if config.ssl_mode == "disable" {
            Manager::from_config(pg_config, NoTls, manager_config)
        } else {
            let connector = native_tls::TlsConnector::builder()
                .danger_accept_invalid_certs(!verifies_certificate(&config.ssl_mode))
                .danger_accept_invalid_hostnames(config.ssl_mode != "verify-full")
                .build()
                .map_err(|e| {
                    VeilError::Configuration(format!("Failed to build TLS connector: {e}"))
                })?;
            Manager::from_config(pg_config, MakeTlsConnector::new(connector), manager_config)
        };

        let timeout = Some(Duration::from_secs(config.connection_timeout_seconds));
        let pool = Pool::builder(manager)
            .max_size(config.max_connections)
            .wait_timeout(timeout)
            .create_timeout(timeout)
            .recycle_timeout(timeout)
            .runtime(deadpool_postgres::Runtime::Tokio1)
            .build()
            .map_err(|e| VeilError::Connection(format!("Failed to create connection pool: {e}")))?;

        Ok(Self { pool, config })
    }

    /// Test the connection to PostgreSQL
    pub async fn test_connection(&self) -> Result<()> {
        let client = self.get_connection().await?;

        client
            .query_one("SELECT 1", &[])
            .await
            .map_err(|e| VeilError::Connection(format!("Connection test failed: {e}")))?;

        tracing::info!(
            connection = %self.connection_string_safe(),
            "PostgreSQL connection test successful"
        );
        Ok(())
    }

    /// Get a connection from the pool with the statement timeout applied
    ///
    /// # Errors
    ///
    /// Returns an error if a connection cannot be obtained.
    pub async fn get_connection(&self) -> Result<deadpool_postgres::Object> {
        let client = self.pool.get().await.map_err(|e| {
            StoreError::ConnectionFailed(format!("Failed to get connection from pool: {e}"))
        })?;

        let timeout_query = format!(
            "SET statement_timeout = {}",
            self.config.statement_timeout_seconds * 1000
        );
        client.execute(timeout_query.as_str(), &[]).await.map_err(|e| {
            StoreError::ConnectionFailed(format!("Failed to set statement timeout: {e}"))
        })?;

        Ok(client)
    }

    /// Execute a query and return rows
    pub async fn query(
        &self,
        query: &str,
        params: &[&(dyn tokio_postgres::types::ToSql + Sync)],
    ) -> Result<Vec<Row>> {
        let client = self.get_connection().await?;

        client
            .query(query, params)
            .await
            .map_err(|e| StoreError::QueryFailed(e.to_string()).into())
    }

    /// Execute a statement and return the number of affected rows
    pub async fn execute(
        &self,
        statement: &str,
        params: &[&(dyn tokio_postgres::types::ToSql + Sync)],
    ) -> Result<u64> {
        let client = self.get_connection().await?;

        client.execute(statement, params).await.map_err(|e| {
            StoreError::QueryFailed(format!("Statement execution failed: {e}")).into()
        })
    }

    /// Get the connection string (without credentials)
    pub fn connection_string_safe(&self) -> String {
        redact_connection_string(self.config.connection_string.expose_secret().as_ref())
    }

    /// Configuration this client was built from
    pub fn config(&self) -> &PostgreSQLConfig {
        &self.config
    }
}

/// Strip credentials from a connection string for display
pub fn redact_connection_string(connection_string: &str) -> String {
    connection_string
        .split('@')
        .next_back()
        .filter(|_| connection_string.contains('@'))
        .map(|s| format!("postgresql://***@{s}"))
        .unwrap_or_else(|| "postgresql://***".to_string())
}

fn ssl_mode_for(mode: &str) -> SslMode {
    match mode {
        "disable" => SslMode::Disable,
        "require" | "verify-ca" | "verify-full" => SslMode::Require,
        _ => SslMode::Prefer,
    }
}

fn verifies_certificate(mode: &str) -> bool {
    matches!(mode, "verify-ca" | "verify-full")
}
