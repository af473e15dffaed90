//! Background worker for continuous consensus refresh
//!
//! Owns the scheduling policy around the pure history merge: a periodic
//! rebuild, nudges shortly after provider resolutions, and publication of
//! every merged view through a watch channel. The merge itself stays in
//! `emblem-domain` and is testable without any of this.

use crate::{RefreshMetrics, WatchConfig, WatchError};
use emblem_domain::traits::RecordStore;
use emblem_domain::{merge_history, sessions_from_records, MergedHistory, SymbolId,
    VerificationRecord};
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tokio::sync::{mpsc, watch};
use tokio::time::interval;
use tracing::{debug, info, warn};

/// Current wall-clock time in Unix milliseconds
fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

enum RefreshMsg {
    /// Rebuild and republish the merged view now
    Nudge,
    /// A provider resolution produced a record not yet visible in storage
    Live(VerificationRecord),
}

/// Cheap clonable handle into a running refresh worker
///
/// Callers that complete verification runs push the fresh records here; the
/// handle schedules the follow-up merge after the configured delay so the
/// store has a chance to catch up first.
#[derive(Clone)]
pub struct RefreshHandle {
    tx: mpsc::UnboundedSender<RefreshMsg>,
    rx: watch::Receiver<MergedHistory>,
    nudge_delay: Duration,
}

impl RefreshHandle {
    /// Hand a freshly resolved record to the worker
    ///
    /// The record joins the live set immediately and a re-merge is
    /// scheduled after the nudge delay. Best-effort: the periodic refresh
    /// converges even if the nudge is lost.
    pub fn push_live(&self, record: VerificationRecord) {
        let _ = self.tx.send(RefreshMsg::Live(record));
        self.nudge_after(self.nudge_delay);
    }

    /// Request a re-merge now
    pub fn nudge(&self) {
        let _ = self.tx.send(RefreshMsg::Nudge);
    }

    /// Request a re-merge after a delay
    pub fn nudge_after(&self, delay: Duration) {
        let tx = self.tx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(RefreshMsg::Nudge);
        });
    }

    /// Subscribe to published merged views
    pub fn subscribe(&self) -> watch::Receiver<MergedHistory> {
        self.rx.clone()
    }
}

/// Background worker that keeps one symbol's consensus view current
///
/// # Examples
///
/// ```no_run
/// use emblem_store::SqliteRecordStore;
/// use emblem_watch::{RefreshWorker, WatchConfig};
/// use emblem_domain::SymbolId;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let store = SqliteRecordStore::new("emblem.db")?;
///     let symbol = SymbolId::from_name("Ankh");
///     let worker = RefreshWorker::new(store, symbol, WatchConfig::default());
///
///     let mut view = worker.handle().subscribe();
///     tokio::spawn(async move {
///         while view.changed().await.is_ok() {
///             println!("sessions: {}", view.borrow().sessions.len());
///         }
///     });
///
///     // Run indefinitely (until Ctrl+C)
///     worker.run().await?;
///     Ok(())
/// }
/// ```
pub struct RefreshWorker<S: RecordStore> {
    store: S,
    symbol: SymbolId,
    config: WatchConfig,
    live: Vec<VerificationRecord>,
    metrics: RefreshMetrics,
    publisher: watch::Sender<MergedHistory>,
    rx: mpsc::UnboundedReceiver<RefreshMsg>,
    // Kept so the message channel never closes while the worker lives
    handle_tx: mpsc::UnboundedSender<RefreshMsg>,
    subscriber: watch::Receiver<MergedHistory>,
}

impl<S> RefreshWorker<S>
where
    S: RecordStore,
    S::Error: std::fmt::Display,
{
    /// Create a worker for one symbol over a record store
    pub fn new(store: S, symbol: SymbolId, config: WatchConfig) -> Self {
        let (publisher, subscriber) = watch::channel(MergedHistory::default());
        let (handle_tx, rx) = mpsc::unbounded_channel();

        Self {
            store,
            symbol,
            config,
            live: Vec::new(),
            metrics: RefreshMetrics::new(),
            publisher,
            rx,
            handle_tx,
            subscriber,
        }
    }

    /// Get a handle for pushing live records and subscribing to views
    pub fn handle(&self) -> RefreshHandle {
        RefreshHandle {
            tx: self.handle_tx.clone(),
            rx: self.subscriber.clone(),
            nudge_delay: self.config.nudge_delay(),
        }
    }

    /// Get a reference to the worker's current metrics
    pub fn metrics(&self) -> &RefreshMetrics {
        &self.metrics
    }

    /// Run the worker indefinitely
    ///
    /// Rebuilds the merged view on every interval tick and on every nudge,
    /// until a shutdown signal (Ctrl+C) is received. A failed store read
    /// degrades that cycle to an empty history rather than stopping the
    /// loop.
    pub async fn run(mut self) -> Result<(), WatchError> {
        let mut ticker = interval(self.config.refresh_interval());

        info!(
            symbol = %self.symbol,
            interval_secs = self.config.refresh_interval_secs,
            "Refresh worker started"
        );

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    debug!("Interval refresh");
                    self.refresh();
                }
                msg = self.rx.recv() => {
                    if let Some(msg) = msg {
                        self.apply(msg, true);
                    }
                }
                _ = tokio::signal::ctrl_c() => {
                    info!("Shutdown signal received, stopping refresh worker");
                    break;
                }
            }
        }

        info!("Refresh worker stopped. Final metrics:\n{}", self.metrics.summary());
        Ok(())
    }

    /// Run for a specific number of refresh cycles (useful for testing)
    ///
    /// Pending messages are drained before each cycle so pushed live
    /// records are always visible to the refresh that follows them.
    pub async fn run_cycles(&mut self, cycles: usize) -> Result<(), WatchError> {
        let mut ticker = interval(self.config.refresh_interval());

        for cycle in 0..cycles {
            ticker.tick().await;

            while let Ok(msg) = self.rx.try_recv() {
                // Refreshing once per cycle; a queued nudge adds nothing
                self.apply(msg, false);
            }

            debug!("Refresh cycle {}/{}", cycle + 1, cycles);
            self.refresh();
        }

        Ok(())
    }

    fn apply(&mut self, msg: RefreshMsg, refresh_on_nudge: bool) {
        match msg {
            RefreshMsg::Live(record) => {
                self.metrics.record_live();
                self.live.push(record);
            }
            RefreshMsg::Nudge => {
                if refresh_on_nudge {
                    self.refresh();
                }
            }
        }
    }

    /// Rebuild the merged view from storage plus the live set and publish
    fn refresh(&mut self) {
        let now = now_ms();

        let persisted = match self.store.records_for(self.symbol) {
            Ok(records) => records,
            Err(error) => {
                warn!(%error, "Store read failed, refreshing from live records only");
                self.metrics.record_failed_read();
                Vec::new()
            }
        };

        // Live records that have landed in the store leave the live set;
        // the idempotent merge keeps racing refreshes duplicate-free
        self.live.retain(|live| {
            !persisted
                .iter()
                .any(|p| p.provider == live.provider && p.timestamp_ms == live.timestamp_ms)
        });

        let sessions = sessions_from_records(persisted);
        let merged = merge_history(sessions, &self.live, now);

        self.metrics.record_cycle(merged.sessions.len());
        self.publisher.send_replace(merged);
    }
}
