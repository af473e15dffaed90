//! Session grouping
//!
//! Clusters a flat list of timestamped verification records into discrete
//! verification runs by temporal proximity to each run's anchor record.

use crate::verification::{SessionOrigin, VerificationRecord, VerificationSession};

/// Records within this window of a session's anchor join that session
pub const SESSION_WINDOW_MS: u64 = 15 * 60 * 1000;

/// Partition records into session groups, newest first
///
/// The input may mix freshly produced and previously persisted records in
/// any order. Records are sorted by timestamp descending, then each record
/// joins the first existing group whose anchor (its most recent, first-seen
/// member) lies within [`SESSION_WINDOW_MS`], or opens a new group.
///
/// Grouping is by distance to the anchor, not to the group centroid: a group
/// can span up to twice the window end-to-end. This is deliberate - the
/// anchor heuristic tolerates multi-provider latency skew within one
/// verification run, and the displayed grouping depends on it.
///
/// Every input record lands in exactly one output group.
///
/// # Examples
///
/// ```
/// use emblem_domain::{group_records, VerificationRecord, VerificationStatus};
///
/// let min = 60 * 1000;
/// let records = vec![
///     VerificationRecord::new("a", VerificationStatus::Verified, 80, 0),
///     VerificationRecord::new("b", VerificationStatus::Verified, 75, 3 * min),
///     VerificationRecord::new("c", VerificationStatus::Verified, 90, 40 * min),
/// ];
///
/// let groups = group_records(records);
/// assert_eq!(groups.len(), 2);
/// assert_eq!(groups[0].len(), 1); // the 40-minute record, newest first
/// assert_eq!(groups[1].len(), 2); // the t and t+3min records
/// ```
pub fn group_records(mut records: Vec<VerificationRecord>) -> Vec<Vec<VerificationRecord>> {
    records.sort_by(|a, b| b.timestamp_ms.cmp(&a.timestamp_ms));

    // Each group keeps the timestamp of its first (most recent) member as
    // its anchor; membership is decided against the anchor alone
    let mut groups: Vec<(u64, Vec<VerificationRecord>)> = Vec::new();

    for record in records {
        match groups
            .iter_mut()
            .find(|(anchor, _)| anchor.abs_diff(record.timestamp_ms) <= SESSION_WINDOW_MS)
        {
            Some((_, members)) => members.push(record),
            None => groups.push((record.timestamp_ms, vec![record])),
        }
    }

    groups.into_iter().map(|(_, members)| members).collect()
}

/// Group records and score each group into a persisted session
///
/// Convenience for the read path: storage hands back a flat record list and
/// this produces the scored session history, newest first.
pub fn sessions_from_records(records: Vec<VerificationRecord>) -> Vec<VerificationSession> {
    group_records(records)
        .into_iter()
        .map(|group| VerificationSession::from_records(group, SessionOrigin::Persisted))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verification::VerificationStatus;

    const MIN: u64 = 60 * 1000;

    fn record(provider: &str, timestamp_ms: u64) -> VerificationRecord {
        VerificationRecord::new(provider, VerificationStatus::Verified, 80, timestamp_ms)
    }

    #[test]
    fn test_single_run_groups_together() {
        let records = vec![
            record("a", 10 * MIN),
            record("b", 11 * MIN),
            record("c", 12 * MIN),
        ];

        let groups = group_records(records);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].len(), 3);
    }

    #[test]
    fn test_distant_record_opens_new_session() {
        // t, t+3min, t+40min: the last record is farther than the window
        // from the first session's anchor
        let records = vec![record("a", 0), record("b", 3 * MIN), record("c", 40 * MIN)];

        let groups = group_records(records);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].len(), 1);
        assert_eq!(groups[0][0].timestamp_ms, 40 * MIN);
        assert_eq!(groups[1].len(), 2);
    }

    #[test]
    fn test_groups_ordered_newest_first() {
        let records = vec![record("old", 0), record("new", 100 * MIN)];

        let groups = group_records(records);
        assert_eq!(groups[0][0].provider, "new");
        assert_eq!(groups[1][0].provider, "old");
    }

    #[test]
    fn test_window_boundary_inclusive() {
        let records = vec![record("a", SESSION_WINDOW_MS), record("b", 0)];

        let groups = group_records(records);
        assert_eq!(groups.len(), 1, "exactly 15 minutes apart joins the session");
    }

    #[test]
    fn test_anchor_not_centroid() {
        // Three records each 10 minutes apart. The middle one joins the
        // anchor at t+20; the oldest is 20 minutes from that anchor and
        // opens its own session even though it is only 10 minutes from the
        // nearest member
        let records = vec![record("a", 20 * MIN), record("b", 10 * MIN), record("c", 0)];

        let groups = group_records(records);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].len(), 2);
        assert_eq!(groups[1].len(), 1);
        assert_eq!(groups[1][0].provider, "c");
    }

    #[test]
    fn test_members_sorted_within_group() {
        let records = vec![record("b", 1 * MIN), record("a", 2 * MIN), record("c", 0)];

        let groups = group_records(records);
        assert_eq!(groups.len(), 1);
        let stamps: Vec<u64> = groups[0].iter().map(|r| r.timestamp_ms).collect();
        assert_eq!(stamps, vec![2 * MIN, 1 * MIN, 0]);
    }

    #[test]
    fn test_empty_input() {
        assert!(group_records(Vec::new()).is_empty());
    }

    #[test]
    fn test_sessions_from_records_scores_groups() {
        let records = vec![record("a", 0), record("b", 3 * MIN)];

        let sessions = sessions_from_records(records);

        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions[0].average_confidence, 80);
        assert_eq!(sessions[0].timestamp_ms, 3 * MIN);
        assert_eq!(sessions[0].origin, SessionOrigin::Persisted);
    }
}
