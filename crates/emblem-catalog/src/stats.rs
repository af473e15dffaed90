//! Aggregate completeness statistics over a ranked set

use emblem_domain::{CompletenessLevel, RankedSymbol};
use std::collections::HashMap;

/// Aggregate statistics over a ranked symbol set
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompletenessStats {
    /// Symbols per completeness level
    pub counts: HashMap<CompletenessLevel, usize>,

    /// Mean completeness score
    pub average_score: f64,

    /// Mean completion percentage
    pub average_completion: f64,

    /// Total symbols evaluated
    pub total: usize,
}

impl CompletenessStats {
    /// Compute statistics over a ranked set
    pub fn from_ranked(ranked: &[RankedSymbol]) -> Self {
        if ranked.is_empty() {
            return Self::default();
        }

        let mut counts = HashMap::new();
        let mut score_sum = 0u64;
        let mut completion_sum = 0u64;

        for entry in ranked {
            *counts.entry(entry.completeness.level).or_insert(0) += 1;
            score_sum += entry.completeness.score as u64;
            completion_sum += entry.completeness.completion_pct as u64;
        }

        Self {
            counts,
            average_score: score_sum as f64 / ranked.len() as f64,
            average_completion: completion_sum as f64 / ranked.len() as f64,
            total: ranked.len(),
        }
    }

    /// Symbols at a given level
    pub fn count(&self, level: CompletenessLevel) -> usize {
        self.counts.get(&level).copied().unwrap_or(0)
    }

    /// Generate a summary report
    pub fn summary(&self) -> String {
        let mut lines = vec![
            format!("Completeness Summary"),
            format!("===================="),
            format!("Symbols: {}", self.total),
            format!("Average score: {:.1}", self.average_score),
            format!("Average completion: {:.0}%", self.average_completion),
        ];

        for level in [
            CompletenessLevel::Complete,
            CompletenessLevel::WellDocumented,
            CompletenessLevel::PartiallyDocumented,
            CompletenessLevel::ToComplete,
        ] {
            lines.push(format!("  {}: {}", level, self.count(level)));
        }

        lines.join("\n")
    }
}
