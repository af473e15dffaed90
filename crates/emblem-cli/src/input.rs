//! Symbol input file loading.
//!
//! The CLI consumes a JSON array of symbol entries, recency-ordered (first
//! entry = most recent). The array position becomes the base rank.

use crate::error::{CliError, Result};
use emblem_domain::traits::SymbolSource;
use emblem_domain::Symbol;
use serde::Deserialize;
use std::path::Path;

/// One entry of the symbol input file.
#[derive(Debug, Deserialize)]
pub struct SymbolEntry {
    /// Display name
    pub name: String,

    /// Culture or category of origin
    pub culture: String,

    /// Historical period
    #[serde(default)]
    pub period: Option<String>,

    /// Whether a non-placeholder image is attached
    #[serde(default)]
    pub has_media: bool,

    /// Free-text description
    #[serde(default)]
    pub description: Option<String>,

    /// Cultural significance
    #[serde(default)]
    pub significance: Option<String>,

    /// Historical context
    #[serde(default)]
    pub historical_context: Option<String>,

    /// Free-form tags
    #[serde(default)]
    pub tags: Vec<String>,
}

impl SymbolEntry {
    fn into_symbol(self, base_rank: u32) -> Symbol {
        let mut symbol = Symbol::new(self.name, self.culture, base_rank)
            .with_media(self.has_media)
            .with_tags(self.tags);
        symbol.period = self.period;
        symbol.description = self.description;
        symbol.significance = self.significance;
        symbol.historical_context = self.historical_context;
        symbol
    }
}

/// Load a symbol file, assigning base ranks by array position.
pub fn load_symbols<P: AsRef<Path>>(path: P) -> Result<Vec<Symbol>> {
    let text = std::fs::read_to_string(path)?;
    let entries: Vec<SymbolEntry> = serde_json::from_str(&text)
        .map_err(|e| CliError::InvalidInput(format!("Failed to parse symbol file: {}", e)))?;

    Ok(entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| entry.into_symbol(index as u32))
        .collect())
}

/// Find a symbol by name, case-insensitively.
pub fn find_symbol(symbols: &[Symbol], name: &str) -> Result<Symbol> {
    symbols
        .iter()
        .find(|s| s.name.eq_ignore_ascii_case(name))
        .cloned()
        .ok_or_else(|| CliError::NotFound(name.to_string()))
}

/// In-memory symbol source backed by a loaded file.
pub struct FileSource {
    symbols: Vec<Symbol>,
}

impl FileSource {
    /// Load the source from a symbol file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self {
            symbols: load_symbols(path)?,
        })
    }
}

impl SymbolSource for FileSource {
    type Error = CliError;

    fn recent_symbols(&self, limit: usize) -> std::result::Result<Vec<Symbol>, Self::Error> {
        Ok(self.symbols.iter().take(limit).cloned().collect())
    }
}
