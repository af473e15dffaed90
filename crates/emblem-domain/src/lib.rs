//! Emblem Domain Layer
//!
//! This crate contains the core business logic and domain model for Emblem,
//! the ranking and consensus engine of a cultural-symbol knowledge base. It
//! has no infrastructure dependencies and defines the fundamental concepts,
//! pure algorithms, and trait interfaces that all other layers depend upon.
//!
//! ## Key Concepts
//!
//! - **Symbol**: A catalogued entity with uneven, crowdsourced metadata
//! - **Completeness**: How thoroughly a symbol is documented (score + level)
//! - **Visibility**: Recency and media presence folded into a sortable score
//! - **VerificationRecord**: One external provider's fact-check judgment
//! - **VerificationSession**: A temporally clustered group of judgments with
//!   one consensus verdict
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture:
//! - Pure business logic only; every algorithm is a function of its inputs
//! - Time enters explicitly (`now_ms` parameters), never ambiently
//! - Infrastructure implementations live in other crates
//! - Trait definitions for all external interactions

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod completeness;
pub mod consensus;
pub mod merge;
pub mod ranking;
pub mod session;
pub mod symbol;
pub mod traits;
pub mod verification;
pub mod visibility;

// Re-exports for convenience
pub use completeness::{evaluate_completeness, Completeness, CompletenessLevel};
pub use consensus::consensus;
pub use merge::{merge_history, MergedHistory, LIVE_WINDOW_MS};
pub use ranking::{rank_prepared, rank_symbols, RankedSymbol};
pub use session::{group_records, sessions_from_records, SESSION_WINDOW_MS};
pub use symbol::{Symbol, SymbolField, SymbolId};
pub use verification::{
    SessionOrigin, VerificationRecord, VerificationSession, VerificationStatus,
};
pub use visibility::{ranked_priority, score_visibility, VisibilityScore};
