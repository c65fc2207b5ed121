//! PostgreSQL comment table model
//!
//! Hosts name their comment table and columns differently (`wp_comments`,
//! `comment_ID`, `comment_author_IP` on WordPress-style schemas), so the table
//! layout is configurable. Identifiers are validated and double-quoted before
//! they are spliced into SQL.

use crate::config::schema::PostgreSQLConfig;
use crate::domain::{Result, StoreError};

/// Validated, quoted identifiers of the comment table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentTable {
    table: String,
    id_column: String,
    address_column: String,
}

impl CommentTable {
    /// Build the table model from raw identifiers
    ///
    /// `table` may be schema-qualified (`public.wp_comments`).
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidIdentifier`] if any identifier is not a
    /// plain SQL identifier.
    pub fn new(table: &str, id_column: &str, address_column: &str) -> Result<Self> {
        let table = table
            .split('.')
            .map(quote_identifier)
            .collect::<Result<Vec<_>>>()?;
        if table.len() > 2 {
            return Err(StoreError::InvalidIdentifier(format!(
                "table name may have at most one schema qualifier, got {}",
                table.join(".")
            ))
            .into());
        }

        Ok(Self {
            table: table.join("."),
            id_column: quote_identifier(id_column)?,
            address_column: quote_identifier(address_column)?,
        })
    }

    /// Build the table model from PostgreSQL configuration
    pub fn from_config(config: &PostgreSQLConfig) -> Result<Self> {
        Self::new(&config.table, &config.id_column, &config.address_column)
    }

    /// Query selecting every comment with a non-empty address
    pub fn select_non_empty_sql(&self) -> String {
        format!(
            "SELECT {id}::BIGINT AS comment_id, {addr}::TEXT AS address \
             FROM {table} WHERE {addr} <> '' ORDER BY {id}",
            id = self.id_column,
            addr = self.address_column,
            table = self.table,
        )
    }

    /// Statement updating a single comment's address (`$1` address, `$2` id)
    pub fn update_address_sql(&self) -> String {
        format!(
            "UPDATE {table} SET {addr} = $1 WHERE {id} = $2::BIGINT",
            table = self.table,
            addr = self.address_column,
            id = self.id_column,
        )
    }

    /// Quoted table name
    pub fn table(&self) -> &str {
        &self.table
    }
}

/// Returns true if `name` is a plain SQL identifier
pub fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    name.len() <= 63 && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

fn quote_identifier(name: &str) -> Result<String> {
    if !is_valid_identifier(name) {
        return Err(StoreError::InvalidIdentifier(name.to_string()).into());
    }
    Ok(format!("\"{name}\""))
}
