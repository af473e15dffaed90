//! Provider contract: request and judgment payloads, provider trait

use crate::VerifyError;
use async_trait::async_trait;
use emblem_domain::{Symbol, VerificationStatus};
use serde::Serialize;

/// Metadata sent to a provider for one fact-check request
///
/// Carries the symbol's documented claims; the provider judges whether they
/// hold up.
#[derive(Debug, Clone, Serialize)]
pub struct CheckRequest {
    /// Symbol display name
    pub name: String,

    /// Culture or category of origin
    pub culture: String,

    /// Historical period, if documented
    pub period: Option<String>,

    /// Free-text description, if documented
    pub description: Option<String>,

    /// Cultural significance, if documented
    pub significance: Option<String>,

    /// Historical context, if documented
    pub historical_context: Option<String>,
}

impl CheckRequest {
    /// Build a request from a symbol's metadata
    pub fn from_symbol(symbol: &Symbol) -> Self {
        Self {
            name: symbol.name.clone(),
            culture: symbol.culture.clone(),
            period: symbol.period.clone(),
            description: symbol.description.clone(),
            significance: symbol.significance.clone(),
            historical_context: symbol.historical_context.clone(),
        }
    }
}

/// One provider's resolved judgment payload
///
/// The invoker stamps this into a `VerificationRecord` together with the
/// provider name and a timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct Judgment {
    /// The provider's verdict
    pub status: VerificationStatus,

    /// Confidence in the verdict, 0-100
    pub confidence: u8,

    /// One-line judgment summary
    pub summary: String,

    /// Supporting detail
    pub details: String,

    /// Cited sources
    pub sources: Vec<String>,
}

impl Judgment {
    /// Create a judgment with empty detail fields
    pub fn new(status: VerificationStatus, confidence: u8) -> Self {
        Self {
            status,
            confidence: confidence.min(100),
            summary: String::new(),
            details: String::new(),
            sources: Vec::new(),
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

/// Trait for external verification providers
///
/// Each provider is queried independently; a failing provider must not
/// affect its siblings, so implementations report failures through the
/// error type and never panic.
#[async_trait]
pub trait Provider: Send + Sync {
    /// Stable provider name, recorded with every judgment
    fn name(&self) -> &str;

    /// Judge one symbol's factual claims
    async fn check(&self, request: &CheckRequest) -> Result<Judgment, VerifyError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_from_symbol() {
        let symbol = Symbol::new("Ankh", "Ancient Egypt", 0)
            .with_period("Old Kingdom")
            .with_description("Key of life");

        let request = CheckRequest::from_symbol(&symbol);

        assert_eq!(request.name, "Ankh");
        assert_eq!(request.culture, "Ancient Egypt");
        assert_eq!(request.period.as_deref(), Some("Old Kingdom"));
        assert_eq!(request.description.as_deref(), Some("Key of life"));
        assert!(request.significance.is_none());
    }

    #[test]
    fn test_judgment_confidence_clamped() {
        let judgment = Judgment::new(VerificationStatus::Verified, 150);
        assert_eq!(judgment.confidence, 100);
    }
}
