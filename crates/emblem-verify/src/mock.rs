//! Deterministic mock provider for testing

use crate::provider::{CheckRequest, Judgment, Provider};
use crate::VerifyError;
use async_trait::async_trait;
use emblem_domain::VerificationStatus;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock verification provider
///
/// Returns pre-configured judgments without any network calls, keyed by
/// symbol name. Useful for testing and for driving the pipeline offline.
///
/// # Examples
///
/// ```
/// use emblem_verify::{MockProvider, Provider, CheckRequest};
/// use emblem_domain::{Symbol, VerificationStatus};
///
/// # tokio_test::block_on(async {
/// let provider = MockProvider::new("mock-a")
///     .with_default(VerificationStatus::Verified, 85);
///
/// let request = CheckRequest::from_symbol(&Symbol::new("Ankh", "Ancient Egypt", 0));
/// let judgment = provider.check(&request).await.unwrap();
/// assert_eq!(judgment.confidence, 85);
/// # });
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    name: String,
    default_judgment: Judgment,
    scripted: Arc<Mutex<HashMap<String, Judgment>>>,
    failures: Arc<Mutex<HashMap<String, String>>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockProvider {
    /// Create a mock provider with a neutral default judgment
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default_judgment: Judgment::new(VerificationStatus::Unverified, 40)
                .with_summary("No scripted judgment"),
            scripted: Arc::new(Mutex::new(HashMap::new())),
            failures: Arc::new(Mutex::new(HashMap::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Set the default judgment returned for unscripted symbols
    pub fn with_default(mut self, status: VerificationStatus, confidence: u8) -> Self {
        self.default_judgment = Judgment::new(status, confidence);
        self
    }

    /// Script a judgment for a specific symbol name
    pub fn add_judgment(&mut self, symbol_name: impl Into<String>, judgment: Judgment) {
        self.scripted
            .lock()
            .unwrap()
            .insert(symbol_name.into(), judgment);
    }

    /// Script a failure for a specific symbol name
    pub fn add_failure(&mut self, symbol_name: impl Into<String>, reason: impl Into<String>) {
        self.failures
            .lock()
            .unwrap()
            .insert(symbol_name.into(), reason.into());
    }

    /// Get the number of times check was called
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    /// Reset the call count
    pub fn reset_call_count(&self) {
        *self.call_count.lock().unwrap() = 0;
    }
}

#[async_trait]
impl Provider for MockProvider {
    fn name(&self) -> &str {
        &self.name
    }

    async fn check(&self, request: &CheckRequest) -> Result<Judgment, VerifyError> {
        *self.call_count.lock().unwrap() += 1;

        if let Some(reason) = self.failures.lock().unwrap().get(&request.name) {
            return Err(VerifyError::Communication(reason.clone()));
        }

        if let Some(judgment) = self.scripted.lock().unwrap().get(&request.name) {
            return Ok(judgment.clone());
        }

        Ok(self.default_judgment.clone())
    }
}
