//! Visibility and trend scoring
//!
//! Converts a symbol's recency rank and media presence into comparable
//! numeric scores used to order listings.

use crate::completeness::CompletenessLevel;

/// Floor applied to the recency decay
const TREND_FLOOR: u32 = 50;

/// Decay per recency-rank step
const TREND_DECAY: i64 = 5;

/// Flat bonus applied when media is present
const MEDIA_BONUS: u32 = 10;

/// Malus applied when media is absent
const NO_MEDIA_MALUS: u32 = 5;

/// Priority bonus that puts media-bearing symbols ahead of all others
const MEDIA_PRIORITY_BONUS: u32 = 1000;

/// Derived visibility score for one symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibilityScore {
    /// Recency decay score, floored at 50
    pub trend_score: u32,

    /// Trend score adjusted for media presence
    pub score: u32,

    /// Media-dominant sort key for plain listings
    pub display_priority: u32,
}

/// Score a symbol's visibility from its recency rank and media presence
///
/// The trend score decays 5 points per recency step with a floor of 50, so
/// even the oldest entries keep a baseline. Media presence adds a flat +10 to
/// the visibility score and dominates the display ordering through a +1000
/// priority bonus.
///
/// # Examples
///
/// ```
/// use emblem_domain::score_visibility;
///
/// let newest = score_visibility(0, true);
/// assert_eq!(newest.trend_score, 100);
/// assert_eq!(newest.score, 110);
/// assert_eq!(newest.display_priority, 1110);
///
/// let old = score_visibility(30, false);
/// assert_eq!(old.trend_score, 50);
/// assert_eq!(old.score, 45);
/// assert_eq!(old.display_priority, 45);
/// ```
pub fn score_visibility(base_rank: u32, has_media: bool) -> VisibilityScore {
    let trend_score = (100 - TREND_DECAY * base_rank as i64).max(TREND_FLOOR as i64) as u32;

    let score = if has_media {
        trend_score + MEDIA_BONUS
    } else {
        // max(0, trend - 5); the floor keeps trend at >= 50 so the
        // saturation only matters if the constants ever change
        trend_score.saturating_sub(NO_MEDIA_MALUS)
    };

    let display_priority = if has_media {
        score + MEDIA_PRIORITY_BONUS
    } else {
        score
    };

    VisibilityScore {
        trend_score,
        score,
        display_priority,
    }
}

/// Completeness-aware display priority, used only by the ranker
///
/// Substitutes a completeness-tier bonus plus a small trend component in
/// place of the flat media bonus baked into `display_priority`. The two
/// bonus schemes are mutually exclusive per call site and must not be
/// combined.
pub fn ranked_priority(visibility: &VisibilityScore, level: CompletenessLevel) -> f64 {
    let level_bonus = match level {
        CompletenessLevel::Complete => 1000.0,
        CompletenessLevel::WellDocumented => 800.0,
        CompletenessLevel::PartiallyDocumented => 500.0,
        CompletenessLevel::ToComplete => 0.0,
    };

    visibility.score as f64 + level_bonus + 0.1 * visibility.trend_score as f64
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: the trend score never drops below the floor
        #[test]
        fn test_trend_floor_property(base_rank: u32, has_media: bool) {
            let visibility = score_visibility(base_rank, has_media);
            prop_assert!(visibility.trend_score >= 50);
            prop_assert!(visibility.trend_score <= 100);
        }

        /// Property: media always increases display priority at equal rank
        #[test]
        fn test_media_priority_property(base_rank: u32) {
            let with_media = score_visibility(base_rank, true);
            let without = score_visibility(base_rank, false);
            prop_assert!(with_media.display_priority > without.display_priority);
        }
    }
}
