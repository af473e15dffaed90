//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and
//! infrastructure. Infrastructure implementations live in other crates.

use crate::symbol::{Symbol, SymbolId};
use crate::verification::VerificationRecord;

/// Trait for the append-only verification record store
///
/// Implemented by the infrastructure layer (emblem-store). Records are
/// immutable once appended; there are no update or delete operations.
pub trait RecordStore {
    /// Error type for store operations
    type Error;

    /// Append one verification record for a symbol
    fn append_record(
        &mut self,
        symbol: SymbolId,
        record: VerificationRecord,
    ) -> Result<(), Self::Error>;

    /// All records for a symbol, newest first
    fn records_for(&self, symbol: SymbolId) -> Result<Vec<VerificationRecord>, Self::Error>;
}

/// Trait for the symbol catalogue query boundary
///
/// Implemented by whatever fronts the contribution backend. Symbols come
/// back recency-ordered with `base_rank` already assigned (0 = newest).
pub trait SymbolSource {
    /// Error type for source operations
    type Error;

    /// The most recent symbols, up to `limit`
    fn recent_symbols(&self, limit: usize) -> Result<Vec<Symbol>, Self::Error>;
}
