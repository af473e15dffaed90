//! Emblem Watch
//!
//! Background refresh service for the verification consensus view.
//!
//! # Overview
//!
//! The refresh worker is responsible for:
//! - **Periodic merging**: Rebuilding a symbol's session history from the
//!   record store at a fixed interval, picking up verifications completed
//!   elsewhere
//! - **Post-verification nudges**: Re-merging shortly after a provider
//!   resolution, tolerating eventual-consistency lag in the store
//! - **Publication**: Pushing every merged view through a watch channel so
//!   consumers subscribe instead of polling
//! - **Metrics collection**: Tracking refresh cycles for monitoring
//!
//! # Architecture
//!
//! The scheduling policy lives here; the merge logic stays pure in
//! `emblem-domain` and is testable without any timer. Because the merge is
//! idempotent, refreshes racing with persistence are safe by construction:
//! at worst a session appears one refresh cycle late, never duplicated.
//!
//! # Usage
//!
//! ```no_run
//! use emblem_store::SqliteRecordStore;
//! use emblem_watch::{RefreshWorker, WatchConfig};
//! use emblem_domain::SymbolId;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = SqliteRecordStore::new("emblem.db")?;
//!     let symbol = SymbolId::from_name("Ankh");
//!     let worker = RefreshWorker::new(store, symbol, WatchConfig::default());
//!
//!     // Run indefinitely (until Ctrl+C)
//!     worker.run().await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Configuration Presets
//!
//! ```
//! use emblem_watch::WatchConfig;
//!
//! // Default: refresh every 120 seconds, nudge 2 seconds after a resolution
//! let config = WatchConfig::default();
//!
//! // Aggressive: frequent refreshes for interactive views
//! let config = WatchConfig::aggressive();
//!
//! // Lenient: infrequent refreshes for background hosts
//! let config = WatchConfig::lenient();
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod metrics;
mod worker;

pub use config::WatchConfig;
pub use error::WatchError;
pub use metrics::RefreshMetrics;
pub use worker::{RefreshHandle, RefreshWorker};
