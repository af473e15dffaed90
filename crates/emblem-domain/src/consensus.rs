//! Consensus calculation
//!
//! Reduces a session's provider judgments to one aggregate status and
//! confidence. Error records are excluded from the average but remain
//! visible in the session for diagnosis.

use crate::verification::{VerificationRecord, VerificationStatus};

/// Average confidence at or above which a session counts as verified
pub const VERIFIED_THRESHOLD: u8 = 70;

/// Average confidence at or above which a session counts as disputed
pub const DISPUTED_THRESHOLD: u8 = 50;

/// Compute the consensus verdict over a session's records
///
/// The average confidence is the rounded mean over non-error records; a
/// session whose records all errored (or an empty record set) averages to
/// zero. Thresholds on the average are inclusive: `>= 70` is verified,
/// `>= 50` is disputed, anything lower is unverified.
///
/// # Examples
///
/// ```
/// use emblem_domain::{consensus, VerificationRecord, VerificationStatus};
///
/// let records = vec![
///     VerificationRecord::new("alpha", VerificationStatus::Verified, 80, 1000),
///     VerificationRecord::new("beta", VerificationStatus::Verified, 60, 1000),
///     VerificationRecord::failed("gamma", "timeout", 1000),
/// ];
///
/// // Averaged over the two valid entries: (80 + 60) / 2 = 70 -> verified
/// let (status, confidence) = consensus(&records);
/// assert_eq!(status, VerificationStatus::Verified);
/// assert_eq!(confidence, 70);
/// ```
pub fn consensus(records: &[VerificationRecord]) -> (VerificationStatus, u8) {
    let valid: Vec<u8> = records
        .iter()
        .filter(|r| r.status != VerificationStatus::Error)
        .map(|r| r.confidence)
        .collect();

    let average = if valid.is_empty() {
        0
    } else {
        let sum: u32 = valid.iter().map(|&c| c as u32).sum();
        (sum as f64 / valid.len() as f64).round() as u8
    };

    (status_for(average), average)
}

/// Map an average confidence onto a session status
fn status_for(average: u8) -> VerificationStatus {
    if average >= VERIFIED_THRESHOLD {
        VerificationStatus::Verified
    } else if average >= DISPUTED_THRESHOLD {
        VerificationStatus::Disputed
    } else {
        VerificationStatus::Unverified
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: average confidence stays within [0, 100]
        #[test]
        fn test_confidence_bounds(
            confidences in proptest::collection::vec(0u8..=100, 0..12),
            errors in proptest::collection::vec(proptest::bool::ANY, 0..4),
        ) {
            let mut records: Vec<VerificationRecord> = confidences
                .iter()
                .map(|&c| VerificationRecord::new("p", VerificationStatus::Verified, c, 0))
                .collect();
            records.extend(
                errors.iter().map(|_| VerificationRecord::failed("p", "boom", 0)),
            );

            let (_, confidence) = consensus(&records);
            prop_assert!(confidence <= 100);
        }

        /// Property: the status bands partition the confidence range
        #[test]
        fn test_status_bands(confidence in 0u8..=100) {
            let (status, average) = consensus(&[VerificationRecord::new(
                "p",
                VerificationStatus::Verified,
                confidence,
                0,
            )]);

            prop_assert_eq!(average, confidence);
            let expected = if confidence >= 70 {
                VerificationStatus::Verified
            } else if confidence >= 50 {
                VerificationStatus::Disputed
            } else {
                VerificationStatus::Unverified
            };
            prop_assert_eq!(status, expected);
        }
    }
}
