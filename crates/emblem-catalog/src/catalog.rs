//! Ranking service over a symbol source

use crate::fallback;
use crate::stats::CompletenessStats;
use emblem_domain::traits::SymbolSource;
use emblem_domain::{rank_symbols, RankedSymbol};
use tracing::warn;

/// Default listing size when the caller does not specify one
pub const DEFAULT_LIMIT: usize = 50;

/// The ranking query surface of the knowledge base
///
/// Wraps a symbol source and answers ranking and statistics queries as pure
/// reads: nothing is persisted, every answer is recomputed from the source.
/// When the source fails, the catalog degrades to a built-in static symbol
/// set instead of propagating the failure, so a ranked view always renders.
pub struct Catalog<S: SymbolSource> {
    source: S,
}

impl<S> Catalog<S>
where
    S: SymbolSource,
    S::Error: std::fmt::Display,
{
    /// Create a catalog over a symbol source
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// The ranked listing, best-documented and most visible first
    pub fn ranked(&self, limit: usize) -> Vec<RankedSymbol> {
        rank_symbols(self.fetch(limit))
    }

    /// Aggregate completeness statistics over the ranked listing
    pub fn stats(&self, limit: usize) -> CompletenessStats {
        CompletenessStats::from_ranked(&self.ranked(limit))
    }

    fn fetch(&self, limit: usize) -> Vec<emblem_domain::Symbol> {
        match self.source.recent_symbols(limit) {
            Ok(symbols) => symbols,
            Err(error) => {
                warn!(%error, "Symbol source failed, serving fallback set");
                let mut symbols = fallback::default_symbols();
                symbols.truncate(limit);
                symbols
            }
        }
    }
}
