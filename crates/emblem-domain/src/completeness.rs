//! Completeness evaluation
//!
//! Scores how thoroughly a symbol's metadata is filled in. The evaluation is
//! a pure function of the symbol: no side effects, no errors, recomputed on
//! every ranking request.

use crate::symbol::{Symbol, SymbolField};
use std::fmt;

/// Base score before any field bonus or malus is applied
const BASE_SCORE: i32 = 50;

/// Scoring table: (field, bonus if present, malus if absent)
const FIELD_WEIGHTS: [(SymbolField, i32, i32); 5] = [
    (SymbolField::Media, 10, 5),
    (SymbolField::Description, 5, 8),
    (SymbolField::Significance, 4, 6),
    (SymbolField::HistoricalContext, 4, 6),
    (SymbolField::Tags, 3, 4),
];

/// Documentation level of a symbol
///
/// Levels are ordered: `Complete > WellDocumented > PartiallyDocumented >
/// ToComplete`. The ordering participates in the priority ranking sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompletenessLevel {
    /// Every tracked field is filled in
    Complete,

    /// One field missing, but media and description are both present
    WellDocumented,

    /// At most two fields missing and a description is present
    PartiallyDocumented,

    /// Needs contributor attention
    ToComplete,
}

impl CompletenessLevel {
    /// Get the level name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            CompletenessLevel::Complete => "complete",
            CompletenessLevel::WellDocumented => "well_documented",
            CompletenessLevel::PartiallyDocumented => "partially_documented",
            CompletenessLevel::ToComplete => "to_complete",
        }
    }

    /// Parse a level from a string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "complete" => Some(CompletenessLevel::Complete),
            "well_documented" => Some(CompletenessLevel::WellDocumented),
            "partially_documented" => Some(CompletenessLevel::PartiallyDocumented),
            "to_complete" => Some(CompletenessLevel::ToComplete),
            _ => None,
        }
    }

    /// Numeric rank of the level, higher is better documented
    pub fn rank(&self) -> u8 {
        match self {
            CompletenessLevel::Complete => 3,
            CompletenessLevel::WellDocumented => 2,
            CompletenessLevel::PartiallyDocumented => 1,
            CompletenessLevel::ToComplete => 0,
        }
    }
}

impl fmt::Display for CompletenessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CompletenessLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid completeness level: {}", s))
    }
}

/// Result of evaluating a symbol's documentation
///
/// Derived on demand, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct Completeness {
    /// Assigned documentation level
    pub level: CompletenessLevel,

    /// Weighted score, clamped at zero
    pub score: u32,

    /// Fields that are absent, in scoring-table order
    pub missing: Vec<SymbolField>,

    /// Share of tracked fields present, always a multiple of 20
    pub completion_pct: u8,
}

/// Evaluate a symbol's completeness
///
/// Starts from a base score of 50 and applies a bonus for each present field
/// or a malus for each absent one, clamping the result at zero.
///
/// # Examples
///
/// ```
/// use emblem_domain::{evaluate_completeness, CompletenessLevel, Symbol};
///
/// let symbol = Symbol::new("Ankh", "Ancient Egypt", 0)
///     .with_media(true)
///     .with_description("Key of life")
///     .with_significance("Life and immortality")
///     .with_historical_context("Old Kingdom onward")
///     .with_tags(vec!["egypt".to_string()]);
///
/// let report = evaluate_completeness(&symbol);
/// assert_eq!(report.score, 76);
/// assert_eq!(report.level, CompletenessLevel::Complete);
/// assert_eq!(report.completion_pct, 100);
/// ```
pub fn evaluate_completeness(symbol: &Symbol) -> Completeness {
    let mut score = BASE_SCORE;
    let mut missing = Vec::new();

    for (field, bonus, malus) in FIELD_WEIGHTS {
        if symbol.has_field(field) {
            score += bonus;
        } else {
            score -= malus;
            missing.push(field);
        }
    }

    let completion_pct = ((FIELD_WEIGHTS.len() - missing.len()) * 20) as u8;
    let level = assign_level(symbol, &missing);

    Completeness {
        level,
        score: score.max(0) as u32,
        missing,
        completion_pct,
    }
}

/// Level rules, evaluated in order; first match wins
fn assign_level(symbol: &Symbol, missing: &[SymbolField]) -> CompletenessLevel {
    let has_media = symbol.has_field(SymbolField::Media);
    let has_description = symbol.has_field(SymbolField::Description);

    if missing.is_empty() {
        CompletenessLevel::Complete
    } else if missing.len() == 1 && has_media && has_description {
        CompletenessLevel::WellDocumented
    } else if missing.len() <= 2 && has_description {
        CompletenessLevel::PartiallyDocumented
    } else {
        CompletenessLevel::ToComplete
    }
}
