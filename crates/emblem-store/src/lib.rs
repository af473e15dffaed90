//! Emblem Storage Layer
//!
//! Implements the RecordStore trait over SQLite: a durable, append-only log
//! of verification records keyed by symbol id.
//!
//! # Architecture
//!
//! - One `verification_records` table, indexed by (symbol, timestamp)
//! - Records are immutable; the store exposes append and read only
//! - Malformed rows (unknown status, bad confidence, undecodable sources)
//!   are skipped on read with a warning, so downstream merging sees a clean
//!   record list or nothing - never an error it has to handle
//!
//! # Examples
//!
//! ```no_run
//! use emblem_store::SqliteRecordStore;
//!
//! let store = SqliteRecordStore::new("emblem.db").unwrap();
//! // Store is now ready for record operations
//! ```

#![warn(missing_docs)]

use emblem_domain::traits::RecordStore;
use emblem_domain::{SymbolId, VerificationRecord, VerificationStatus};
use rusqlite::{params, Connection};
use std::path::Path;
use thiserror::Error;
use tracing::warn;

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Invalid data format
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// SQLite-based implementation of RecordStore
///
/// # Thread Safety
///
/// SQLite connections are not thread-safe. Each thread should have its own
/// SqliteRecordStore instance; the append-only schema makes concurrent
/// writers from separate connections safe.
pub struct SqliteRecordStore {
    conn: Connection,
}

impl SqliteRecordStore {
    /// Create a new SqliteRecordStore with the given database path
    ///
    /// Use `:memory:` for an in-memory database (useful for testing).
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use emblem_store::SqliteRecordStore;
    ///
    /// let store = SqliteRecordStore::new("emblem.db").unwrap();
    /// ```
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        let mut store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Initialize the database schema
    fn initialize_schema(&mut self) -> Result<(), StoreError> {
        let schema = include_str!("schema.sql");
        self.conn.execute_batch(schema)?;
        Ok(())
    }

    /// Convert SymbolId to bytes for storage
    fn symbol_id_to_bytes(id: SymbolId) -> Vec<u8> {
        id.value().to_be_bytes().to_vec()
    }

    /// Decode one row into a record, or explain why it cannot be decoded
    fn decode_row(
        provider: String,
        status: String,
        confidence: i64,
        summary: String,
        details: String,
        sources: String,
        timestamp_ms: i64,
    ) -> Result<VerificationRecord, String> {
        let status = VerificationStatus::parse(&status)
            .ok_or_else(|| format!("unknown status '{}'", status))?;

        if !(0..=100).contains(&confidence) {
            return Err(format!("confidence {} out of range", confidence));
        }

        let sources: Vec<String> = serde_json::from_str(&sources)
            .map_err(|e| format!("undecodable sources: {}", e))?;

        Ok(VerificationRecord {
            provider,
            status,
            confidence: confidence as u8,
            summary,
            details,
            sources,
            timestamp_ms: timestamp_ms as u64,
        })
    }
}

impl RecordStore for SqliteRecordStore {
    type Error = StoreError;

    fn append_record(
        &mut self,
        symbol: SymbolId,
        record: VerificationRecord,
    ) -> Result<(), Self::Error> {
        let sources = serde_json::to_string(&record.sources)
            .map_err(|e| StoreError::InvalidData(format!("Unencodable sources: {}", e)))?;

        self.conn.execute(
            "INSERT INTO verification_records
                 (symbol_id, provider, status, confidence, summary, details, sources, timestamp_ms)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                Self::symbol_id_to_bytes(symbol),
                &record.provider,
                record.status.as_str(),
                record.confidence as i64,
                &record.summary,
                &record.details,
                sources,
                record.timestamp_ms as i64,
            ],
        )?;

        Ok(())
    }

    fn records_for(&self, symbol: SymbolId) -> Result<Vec<VerificationRecord>, Self::Error> {
        let mut stmt = self.conn.prepare(
            "SELECT provider, status, confidence, summary, details, sources, timestamp_ms
             FROM verification_records
             WHERE symbol_id = ?1
             ORDER BY timestamp_ms DESC",
        )?;

        let rows = stmt.query_map(params![Self::symbol_id_to_bytes(symbol)], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, i64>(2)?,
                row.get::<_, String>(3)?,
                row.get::<_, String>(4)?,
                row.get::<_, String>(5)?,
                row.get::<_, i64>(6)?,
            ))
        })?;

        let mut records = Vec::new();
        for row in rows {
            let (provider, status, confidence, summary, details, sources, timestamp_ms) = row?;
            match Self::decode_row(
                provider, status, confidence, summary, details, sources, timestamp_ms,
            ) {
                Ok(record) => records.push(record),
                Err(reason) => {
                    // Malformed persisted data degrades to "no such record"
                    warn!(symbol = %symbol, %reason, "Skipping malformed verification record");
                }
            }
        }

        Ok(records)
    }
}
