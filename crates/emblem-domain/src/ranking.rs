//! Priority ranking
//!
//! Produces the final display order for a list of symbols from their
//! completeness and visibility evaluations. The sort is stable so that
//! repeated ranking of unchanged inputs yields identical pagination.

use crate::completeness::{evaluate_completeness, Completeness};
use crate::symbol::Symbol;
use crate::visibility::{ranked_priority, score_visibility, VisibilityScore};

/// A symbol together with its derived ranking data
#[derive(Debug, Clone)]
pub struct RankedSymbol {
    /// The underlying symbol
    pub symbol: Symbol,

    /// Completeness evaluation
    pub completeness: Completeness,

    /// Visibility evaluation
    pub visibility: VisibilityScore,

    /// Completeness-aware priority used as the primary sort key
    pub priority: f64,
}

/// Rank pre-evaluated entries, descending
///
/// Sort key, in order: completeness-aware priority, completeness level rank,
/// raw trend score. Ties after all three keys preserve input order.
pub fn rank_prepared(
    entries: Vec<(Symbol, Completeness, VisibilityScore)>,
) -> Vec<RankedSymbol> {
    let mut ranked: Vec<RankedSymbol> = entries
        .into_iter()
        .map(|(symbol, completeness, visibility)| {
            let priority = ranked_priority(&visibility, completeness.level);
            RankedSymbol {
                symbol,
                completeness,
                visibility,
                priority,
            }
        })
        .collect();

    // Vec::sort_by is stable; equal keys keep their input order
    ranked.sort_by(|a, b| {
        b.priority
            .total_cmp(&a.priority)
            .then_with(|| b.completeness.level.rank().cmp(&a.completeness.level.rank()))
            .then_with(|| b.visibility.trend_score.cmp(&a.visibility.trend_score))
    });

    ranked
}

/// Evaluate and rank a list of symbols in one pass
///
/// # Examples
///
/// ```
/// use emblem_domain::{rank_symbols, Symbol};
///
/// let symbols = vec![
///     Symbol::new("Ouroboros", "Ancient Egypt", 0),
///     Symbol::new("Ankh", "Ancient Egypt", 1).with_description("Key of life"),
/// ];
///
/// let ranked = rank_symbols(symbols);
/// assert_eq!(ranked.len(), 2);
/// ```
pub fn rank_symbols(symbols: Vec<Symbol>) -> Vec<RankedSymbol> {
    let entries = symbols
        .into_iter()
        .map(|symbol| {
            let completeness = evaluate_completeness(&symbol);
            let visibility = score_visibility(symbol.base_rank, symbol.has_media);
            (symbol, completeness, visibility)
        })
        .collect();

    rank_prepared(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::completeness::CompletenessLevel;

    fn documented(name: &str, base_rank: u32) -> Symbol {
        Symbol::new(name, "Test", base_rank)
            .with_media(true)
            .with_description("text")
            .with_significance("text")
            .with_historical_context("text")
            .with_tags(vec!["tag".to_string()])
    }

    #[test]
    fn test_completeness_outranks_recency() {
        let symbols = vec![
            Symbol::new("Bare", "Test", 0),
            documented("Documented", 50),
        ];

        let ranked = rank_symbols(symbols);

        assert_eq!(ranked[0].symbol.name, "Documented");
        assert_eq!(ranked[0].completeness.level, CompletenessLevel::Complete);
    }

    #[test]
    fn test_trend_breaks_level_ties() {
        let symbols = vec![
            documented("Older", 5),
            documented("Newer", 0),
        ];

        let ranked = rank_symbols(symbols);

        assert_eq!(ranked[0].symbol.name, "Newer");
        assert_eq!(ranked[1].symbol.name, "Older");
    }

    #[test]
    fn test_full_ties_preserve_input_order() {
        // Identical evaluations throughout; stable sort keeps input order
        let symbols = vec![
            documented("First", 3),
            documented("Second", 3),
            documented("Third", 3),
        ];

        let ranked = rank_symbols(symbols);

        assert_eq!(ranked[0].symbol.name, "First");
        assert_eq!(ranked[1].symbol.name, "Second");
        assert_eq!(ranked[2].symbol.name, "Third");
    }

    #[test]
    fn test_reranking_is_identity() {
        let symbols = vec![
            Symbol::new("Bare", "Test", 0),
            documented("Full", 1),
            Symbol::new("Partial", "Test", 2).with_description("text"),
            documented("Another", 3),
        ];

        let once = rank_symbols(symbols);
        let names_once: Vec<_> = once.iter().map(|r| r.symbol.name.clone()).collect();

        let twice = rank_symbols(once.into_iter().map(|r| r.symbol).collect());
        let names_twice: Vec<_> = twice.iter().map(|r| r.symbol.name.clone()).collect();

        assert_eq!(names_once, names_twice);
    }

    #[test]
    fn test_empty_input() {
        assert!(rank_symbols(Vec::new()).is_empty());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: ranking is a permutation of its input
        #[test]
        fn test_rank_is_permutation(count in 0usize..20) {
            let symbols: Vec<Symbol> = (0..count as u32)
                .map(|i| Symbol::new(format!("symbol-{}", i), "Test", i))
                .collect();

            let ranked = rank_symbols(symbols.clone());

            prop_assert_eq!(ranked.len(), symbols.len());
            let mut names: Vec<_> = ranked.iter().map(|r| r.symbol.name.clone()).collect();
            names.sort();
            let mut expected: Vec<_> = symbols.iter().map(|s| s.name.clone()).collect();
            expected.sort();
            prop_assert_eq!(names, expected);
        }

        /// Property: ranking an already ranked list changes nothing
        #[test]
        fn test_rank_stability(seeds in proptest::collection::vec(0u32..8, 0..12)) {
            let symbols: Vec<Symbol> = seeds
                .iter()
                .enumerate()
                .map(|(i, seed)| {
                    let mut s = Symbol::new(format!("symbol-{}", i), "Test", *seed)
                        .with_media(seed % 2 == 0);
                    if seed % 3 == 0 {
                        s = s.with_description("text");
                    }
                    s
                })
                .collect();

            let once = rank_symbols(symbols);
            let names_once: Vec<_> = once.iter().map(|r| r.symbol.name.clone()).collect();
            let twice = rank_symbols(once.into_iter().map(|r| r.symbol).collect());
            let names_twice: Vec<_> = twice.iter().map(|r| r.symbol.name.clone()).collect();

            prop_assert_eq!(names_once, names_twice);
        }
    }
}
