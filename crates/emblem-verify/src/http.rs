//! HTTP Provider Implementation
//!
//! Talks to a hosted analysis endpoint over JSON. The request carries the
//! symbol metadata plus a rendered fact-check prompt; the response body is
//! the judgment payload (possibly fenced, for LLM-backed endpoints).
//!
//! # Features
//!
//! - Async HTTP communication
//! - Configurable endpoint and provider name
//! - Retry logic with exponential backoff
//! - Timeout handling

use crate::parser::parse_judgment;
use crate::prompt::PromptBuilder;
use crate::provider::{CheckRequest, Judgment, Provider};
use crate::VerifyError;
use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;

/// Default timeout for provider requests (30 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default number of retry attempts
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// JSON body POSTed to the analysis endpoint
#[derive(Serialize)]
struct CheckBody<'a> {
    prompt: String,
    symbol: &'a CheckRequest,
}

/// HTTP-backed verification provider
pub struct HttpProvider {
    name: String,
    endpoint: String,
    client: reqwest::Client,
    max_retries: u32,
}

impl HttpProvider {
    /// Create a new HTTP provider
    ///
    /// # Parameters
    ///
    /// - `name`: provider name recorded with every judgment
    /// - `endpoint`: analysis endpoint URL
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use emblem_verify::HttpProvider;
    ///
    /// let provider = HttpProvider::new("lexicon", "http://localhost:8091/check");
    /// ```
    pub fn new(name: impl Into<String>, endpoint: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .unwrap_or_default();

        Self {
            name: name.into(),
            endpoint: endpoint.into(),
            client,
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }

    /// Set the maximum number of retry attempts
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    async fn check_inner(&self, request: &CheckRequest) -> Result<Judgment, VerifyError> {
        let body = CheckBody {
            prompt: PromptBuilder::new(request.clone()).build(),
            symbol: request,
        };

        let mut attempts = 0;
        let mut last_error = None;

        while attempts < self.max_retries {
            match self.client.post(&self.endpoint).json(&body).send().await {
                Ok(response) => {
                    if response.status().is_success() {
                        let text = response.text().await.map_err(|e| {
                            VerifyError::Communication(format!("Failed to read body: {}", e))
                        })?;
                        // A well-formed HTTP response with a bad payload is
                        // not retryable
                        return parse_judgment(&text);
                    } else if response.status() == reqwest::StatusCode::NOT_FOUND {
                        return Err(VerifyError::ProviderUnavailable(self.name.clone()));
                    } else {
                        let status = response.status();
                        let error_text = response
                            .text()
                            .await
                            .unwrap_or_else(|_| "Unknown error".to_string());
                        last_error = Some(VerifyError::Communication(format!(
                            "HTTP {}: {}",
                            status, error_text
                        )));
                    }
                }
                Err(e) => {
                    last_error =
                        Some(VerifyError::Communication(format!("Request failed: {}", e)));
                }
            }

            attempts += 1;
            if attempts < self.max_retries {
                // Exponential backoff: 1s, 2s, 4s, etc.
                let delay = Duration::from_secs(2u64.pow(attempts - 1));
                tokio::time::sleep(delay).await;
            }
        }

        Err(last_error
            .unwrap_or_else(|| VerifyError::Communication("Max retries exceeded".to_string())))
    }
}

#[async_trait]
impl Provider for HttpProvider {
    fn name(&self) -> &str {
        &self.name
    }

    async fn check(&self, request: &CheckRequest) -> Result<Judgment, VerifyError> {
        self.check_inner(request).await
    }
}
