//! Emblem Verification Layer
//!
//! Pluggable fact-check providers and the concurrent invoker that fans a
//! symbol out to all of them.
//!
//! # Architecture
//!
//! This crate owns the external collaborator boundary for verification: the
//! `Provider` trait, transport implementations, and the translation of each
//! provider outcome (success or failure) into an immutable
//! `VerificationRecord`. Grouping, consensus, and history merging stay in
//! `emblem-domain`; persistence stays in `emblem-store`.
//!
//! # Providers
//!
//! - `MockProvider`: deterministic scripted judgments for testing
//! - `HttpProvider`: hosted analysis endpoint over JSON
//!
//! # Examples
//!
//! ```
//! use emblem_verify::{Invoker, MockProvider};
//! use emblem_domain::{Symbol, VerificationStatus};
//! use std::sync::Arc;
//!
//! # tokio_test::block_on(async {
//! let provider = MockProvider::new("mock-a")
//!     .with_default(VerificationStatus::Verified, 85);
//! let invoker = Invoker::new(vec![Arc::new(provider)]);
//!
//! let symbol = Symbol::new("Ankh", "Ancient Egypt", 0);
//! let records = invoker.verify(&symbol).await;
//! assert_eq!(records.len(), 1);
//! # });
//! ```

#![warn(missing_docs)]

pub mod http;
pub mod invoker;
pub mod mock;
pub mod parser;
pub mod prompt;
pub mod provider;

use thiserror::Error;

pub use http::HttpProvider;
pub use invoker::{verify_and_record, Invoker};
pub use mock::MockProvider;
pub use parser::parse_judgment;
pub use prompt::PromptBuilder;
pub use provider::{CheckRequest, Judgment, Provider};

/// Errors that can occur during provider operations
#[derive(Error, Debug)]
pub enum VerifyError {
    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Invalid response from a provider
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Provider endpoint not available
    #[error("Provider not available: {0}")]
    ProviderUnavailable(String),

    /// Generic error
    #[error("Verification error: {0}")]
    Other(String),
}
