//! Verification record and session types

use crate::consensus::consensus;
use std::fmt;

/// Outcome of one provider judgment, or of a whole session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VerificationStatus {
    /// Factual claims corroborated
    Verified,

    /// Providers disagree or corroboration is weak
    Disputed,

    /// Not enough evidence either way
    Unverified,

    /// The provider call itself failed
    Error,
}

impl VerificationStatus {
    /// Get the status name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            VerificationStatus::Verified => "verified",
            VerificationStatus::Disputed => "disputed",
            VerificationStatus::Unverified => "unverified",
            VerificationStatus::Error => "error",
        }
    }

    /// Parse a status from a string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "verified" => Some(VerificationStatus::Verified),
            "disputed" => Some(VerificationStatus::Disputed),
            "unverified" => Some(VerificationStatus::Unverified),
            "error" => Some(VerificationStatus::Error),
            _ => None,
        }
    }
}

impl fmt::Display for VerificationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for VerificationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid verification status: {}", s))
    }
}

/// One judgment from one external provider about one symbol
///
/// Records are immutable once created and append-only in storage.
#[derive(Debug, Clone, PartialEq)]
pub struct VerificationRecord {
    /// Name of the provider that produced the judgment
    pub provider: String,

    /// The provider's verdict
    pub status: VerificationStatus,

    /// Confidence in the verdict, 0-100
    pub confidence: u8,

    /// One-line judgment summary
    pub summary: String,

    /// Supporting detail, or the failure reason for error records
    pub details: String,

    /// Cited sources, in the provider's order
    pub sources: Vec<String>,

    /// When the judgment resolved (Unix milliseconds)
    pub timestamp_ms: u64,
}

impl VerificationRecord {
    /// Create a record for a resolved judgment
    pub fn new(
        provider: impl Into<String>,
        status: VerificationStatus,
        confidence: u8,
        timestamp_ms: u64,
    ) -> Self {
        Self {
            provider: provider.into(),
            status,
            confidence: confidence.min(100),
            summary: String::new(),
            details: String::new(),
            sources: Vec::new(),
            timestamp_ms,
        }
    }

    /// Create a record for a failed provider call
    ///
    /// Failure records carry zero confidence and are excluded from
    /// confidence averaging, but stay visible so a user can see which
    /// provider failed and why.
    pub fn failed(
        provider: impl Into<String>,
        reason: impl Into<String>,
        timestamp_ms: u64,
    ) -> Self {
        Self {
            provider: provider.into(),
            status: VerificationStatus::Error,
            confidence: 0,
            summary: String::new(),
            details: reason.into(),
            sources: Vec::new(),
            timestamp_ms,
        }
    }

    /// Set the summary
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }

    /// Set the detail text
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = details.into();
        self
    }

    /// Set the cited sources
    pub fn with_sources(mut self, sources: Vec<String>) -> Self {
        self.sources = sources;
        self
    }
}

/// Where a session's records came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOrigin {
    /// Assembled from records not yet written to durable storage
    Live,

    /// Read back from the record store
    Persisted,
}

/// A temporally clustered group of records treated as one verification run
#[derive(Debug, Clone, PartialEq)]
pub struct VerificationSession {
    /// Member records, newest first; never empty
    pub records: Vec<VerificationRecord>,

    /// Consensus verdict over the member records
    pub overall_status: VerificationStatus,

    /// Rounded mean confidence of the non-error members
    pub average_confidence: u8,

    /// Timestamp of the most recent member, or "now" for a live session
    pub timestamp_ms: u64,

    /// Whether the session is live or persisted
    pub origin: SessionOrigin,
}

impl VerificationSession {
    /// Build a persisted session from grouped records
    ///
    /// The session timestamp is the maximum member timestamp.
    pub fn from_records(records: Vec<VerificationRecord>, origin: SessionOrigin) -> Self {
        let timestamp_ms = records.iter().map(|r| r.timestamp_ms).max().unwrap_or(0);
        Self::with_timestamp(records, origin, timestamp_ms)
    }

    /// Build a live session stamped with the current refresh time
    pub fn live(records: Vec<VerificationRecord>, now_ms: u64) -> Self {
        Self::with_timestamp(records, SessionOrigin::Live, now_ms)
    }

    fn with_timestamp(
        records: Vec<VerificationRecord>,
        origin: SessionOrigin,
        timestamp_ms: u64,
    ) -> Self {
        let (overall_status, average_confidence) = consensus(&records);
        Self {
            records,
            overall_status,
            average_confidence,
            timestamp_ms,
            origin,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parse_roundtrip() {
        for status in [
            VerificationStatus::Verified,
            VerificationStatus::Disputed,
            VerificationStatus::Unverified,
            VerificationStatus::Error,
        ] {
            assert_eq!(VerificationStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(VerificationStatus::parse("maybe"), None);
    }

    #[test]
    fn test_confidence_clamped_on_creation() {
        let record = VerificationRecord::new("alpha", VerificationStatus::Verified, 200, 1000);
        assert_eq!(record.confidence, 100);
    }

    #[test]
    fn test_failed_record_shape() {
        let record = VerificationRecord::failed("alpha", "connection refused", 1000);

        assert_eq!(record.status, VerificationStatus::Error);
        assert_eq!(record.confidence, 0);
        assert_eq!(record.details, "connection refused");
    }

    #[test]
    fn test_session_timestamp_is_max_member() {
        let records = vec![
            VerificationRecord::new("a", VerificationStatus::Verified, 80, 1_000),
            VerificationRecord::new("b", VerificationStatus::Verified, 80, 5_000),
            VerificationRecord::new("c", VerificationStatus::Verified, 80, 3_000),
        ];

        let session = VerificationSession::from_records(records, SessionOrigin::Persisted);
        assert_eq!(session.timestamp_ms, 5_000);
    }

    #[test]
    fn test_live_session_uses_now() {
        let records = vec![VerificationRecord::new(
            "a",
            VerificationStatus::Verified,
            80,
            1_000,
        )];

        let session = VerificationSession::live(records, 9_000);
        assert_eq!(session.timestamp_ms, 9_000);
        assert_eq!(session.origin, SessionOrigin::Live);
    }
}
