//! Command implementations.

mod history;
mod rank;
mod stats;
mod verify;
mod watch;

pub use history::execute_history;
pub use rank::execute_rank;
pub use stats::execute_stats;
pub use verify::execute_verify;
pub use watch::execute_watch;

use std::time::{SystemTime, UNIX_EPOCH};

/// Current wall-clock time in Unix milliseconds.
pub(crate) fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
