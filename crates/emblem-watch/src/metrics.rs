//! Metrics collection for refresh operations

/// Metrics collected by the refresh worker
#[derive(Debug, Clone, Default)]
pub struct RefreshMetrics {
    /// Refresh cycles completed
    pub cycles: usize,

    /// Cycles where the store read failed and the view degraded
    pub failed_reads: usize,

    /// Live records accepted from verification runs
    pub live_accepted: usize,

    /// Session count in the most recently published view
    pub last_session_count: usize,
}

impl RefreshMetrics {
    /// Create new empty metrics
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a completed refresh cycle
    pub fn record_cycle(&mut self, session_count: usize) {
        self.cycles += 1;
        self.last_session_count = session_count;
    }

    /// Record a failed store read
    pub fn record_failed_read(&mut self) {
        self.failed_reads += 1;
    }

    /// Record an accepted live record
    pub fn record_live(&mut self) {
        self.live_accepted += 1;
    }

    /// Reset all metrics
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Generate a summary report of metrics
    pub fn summary(&self) -> String {
        [
            "Refresh Metrics Summary".to_string(),
            "=======================".to_string(),
            format!("Cycles: {}", self.cycles),
            format!("Failed store reads: {}", self.failed_reads),
            format!("Live records accepted: {}", self.live_accepted),
            format!("Sessions in last view: {}", self.last_session_count),
        ]
        .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_creation() {
        let metrics = RefreshMetrics::new();
        assert_eq!(metrics.cycles, 0);
        assert_eq!(metrics.failed_reads, 0);
    }

    #[test]
    fn test_record_cycle() {
        let mut metrics = RefreshMetrics::new();
        metrics.record_cycle(2);
        metrics.record_cycle(3);

        assert_eq!(metrics.cycles, 2);
        assert_eq!(metrics.last_session_count, 3);
    }

    #[test]
    fn test_reset() {
        let mut metrics = RefreshMetrics::new();
        metrics.record_cycle(2);
        metrics.record_failed_read();
        metrics.record_live();

        metrics.reset();

        assert_eq!(metrics.cycles, 0);
        assert_eq!(metrics.failed_reads, 0);
        assert_eq!(metrics.live_accepted, 0);
    }

    #[test]
    fn test_summary() {
        let mut metrics = RefreshMetrics::new();
        metrics.record_cycle(4);
        metrics.record_failed_read();

        let summary = metrics.summary();
        assert!(summary.contains("Cycles: 1"));
        assert!(summary.contains("Failed store reads: 1"));
        assert!(summary.contains("Sessions in last view: 4"));
    }
}
