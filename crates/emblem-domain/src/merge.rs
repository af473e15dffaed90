//! History merging
//!
//! Combines persisted session history with the in-memory live session
//! without duplication. The merge is a pure function of its inputs plus an
//! explicit "now", so it is testable without any timer or store and safe to
//! re-run from racing refresh cycles.

use crate::verification::{VerificationRecord, VerificationSession};

/// A persisted session this close to "now" already represents live activity
pub const LIVE_WINDOW_MS: u64 = 5 * 60 * 1000;

/// Merged session history plus the designated current view
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MergedHistory {
    /// All sessions, newest first
    pub sessions: Vec<VerificationSession>,

    /// The session a consensus view should display
    pub current: Option<VerificationSession>,
}

/// Merge persisted sessions with not-yet-persisted live records
///
/// Persisted sessions must already be grouped, scored, and ordered newest
/// first. With no live records the persisted history passes through
/// unchanged. With live records, a live session stamped at `now_ms` is
/// prepended - unless the most recent persisted session lies within
/// [`LIVE_WINDOW_MS`] of now, in which case the freshly landed persisted
/// session already represents the live activity and the live session is
/// suppressed to avoid a duplicate.
///
/// Idempotent: identical inputs always produce the same current designation
/// and the same session count, so repeated refreshes never accumulate
/// duplicates.
///
/// # Examples
///
/// ```
/// use emblem_domain::{merge_history, sessions_from_records, VerificationRecord,
///     VerificationStatus};
///
/// let now = 100 * 60 * 1000;
/// let persisted = sessions_from_records(vec![VerificationRecord::new(
///     "alpha",
///     VerificationStatus::Verified,
///     80,
///     now - 2 * 60 * 1000, // two minutes ago
/// )]);
/// let live = vec![VerificationRecord::new("beta", VerificationStatus::Verified, 70, now)];
///
/// // The persisted session is fresh enough to stand in for the live one
/// let merged = merge_history(persisted, &live, now);
/// assert_eq!(merged.sessions.len(), 1);
/// assert_eq!(merged.current.unwrap().average_confidence, 80);
/// ```
pub fn merge_history(
    persisted: Vec<VerificationSession>,
    live_records: &[VerificationRecord],
    now_ms: u64,
) -> MergedHistory {
    if live_records.is_empty() {
        let current = persisted.first().cloned();
        return MergedHistory {
            sessions: persisted,
            current,
        };
    }

    if let Some(latest) = persisted.first() {
        if now_ms.abs_diff(latest.timestamp_ms) <= LIVE_WINDOW_MS {
            let current = Some(latest.clone());
            return MergedHistory {
                sessions: persisted,
                current,
            };
        }
    }

    let live = VerificationSession::live(live_records.to_vec(), now_ms);
    let mut sessions = Vec::with_capacity(persisted.len() + 1);
    sessions.push(live.clone());
    sessions.extend(persisted);

    MergedHistory {
        sessions,
        current: Some(live),
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::session::sessions_from_records;
    use crate::verification::VerificationStatus;
    use proptest::prelude::*;

    proptest! {
        /// Property: merging is idempotent for arbitrary inputs
        #[test]
        fn test_idempotence(
            persisted_stamps in proptest::collection::vec(0u64..100_000_000, 0..10),
            live_count in 0usize..4,
            now in 100_000_000u64..200_000_000,
        ) {
            let persisted = sessions_from_records(
                persisted_stamps
                    .iter()
                    .map(|&ts| {
                        VerificationRecord::new("p", VerificationStatus::Verified, 60, ts)
                    })
                    .collect(),
            );
            let live: Vec<VerificationRecord> = (0..live_count)
                .map(|i| {
                    VerificationRecord::new(
                        format!("live-{}", i),
                        VerificationStatus::Verified,
                        70,
                        now,
                    )
                })
                .collect();

            let first = merge_history(persisted.clone(), &live, now);
            let second = merge_history(persisted.clone(), &live, now);

            prop_assert_eq!(first.sessions.len(), second.sessions.len());
            prop_assert_eq!(first.current, second.current);

            // The merge never grows the history by more than the one live
            // session
            prop_assert!(first.sessions.len() <= persisted.len() + 1);
        }
    }
}
