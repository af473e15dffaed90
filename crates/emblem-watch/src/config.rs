//! Configuration for the consensus refresh service

use crate::WatchError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the refresh worker
///
/// Controls how often the merged consensus view is rebuilt from storage and
/// how long to wait after a provider resolution before re-merging.
///
/// # Examples
///
/// ```
/// use emblem_watch::WatchConfig;
///
/// // Default configuration (balanced)
/// let config = WatchConfig::default();
/// assert_eq!(config.refresh_interval_secs, 120);
///
/// // Frequent refreshes
/// let config = WatchConfig::aggressive();
/// assert_eq!(config.refresh_interval_secs, 30);
///
/// // Infrequent refreshes
/// let config = WatchConfig::lenient();
/// assert_eq!(config.refresh_interval_secs, 300);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatchConfig {
    /// How often to rebuild the merged view from storage (in seconds)
    /// Default: 120 seconds; picks up verifications completed elsewhere
    pub refresh_interval_secs: u64,

    /// Delay between a provider resolution and the follow-up merge (in
    /// seconds), tolerating eventual-consistency lag in the store
    /// Default: 2 seconds
    pub nudge_delay_secs: u64,
}

impl Default for WatchConfig {
    /// Create default configuration with balanced refresh policies
    ///
    /// - Refresh interval: 120 seconds
    /// - Nudge delay: 2 seconds
    fn default() -> Self {
        Self {
            refresh_interval_secs: 120,
            nudge_delay_secs: 2,
        }
    }
}

impl WatchConfig {
    /// Aggressive refresh configuration (frequent rebuilds)
    ///
    /// Suitable for interactive consensus views watched by a user.
    pub fn aggressive() -> Self {
        Self {
            refresh_interval_secs: 30,
            nudge_delay_secs: 1,
        }
    }

    /// Lenient refresh configuration (infrequent rebuilds)
    ///
    /// Suitable for background synchronization on constrained hosts.
    pub fn lenient() -> Self {
        Self {
            refresh_interval_secs: 300,
            nudge_delay_secs: 5,
        }
    }

    /// Parse a configuration from TOML text
    pub fn from_toml(text: &str) -> Result<Self, WatchError> {
        toml::from_str(text).map_err(|e| WatchError::Config(e.to_string()))
    }

    /// Get the refresh interval as Duration
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_secs)
    }

    /// Get the nudge delay as Duration
    pub fn nudge_delay(&self) -> Duration {
        Duration::from_secs(self.nudge_delay_secs)
    }
}
