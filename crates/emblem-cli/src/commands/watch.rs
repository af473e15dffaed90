//! Watch command.

use crate::cli::WatchArgs;
use crate::error::Result;
use crate::output::Formatter;
use emblem_domain::SymbolId;
use emblem_store::SqliteRecordStore;
use emblem_watch::{RefreshWorker, WatchConfig};

/// Follow a symbol's consensus view, reprinting it on every refresh, until
/// interrupted.
pub async fn execute_watch(args: WatchArgs, db: &str, formatter: &Formatter) -> Result<()> {
    let store = SqliteRecordStore::new(db)?;
    let symbol = SymbolId::from_name(&args.name);

    let mut config = WatchConfig::default();
    if let Some(interval) = args.interval {
        config.refresh_interval_secs = interval;
    }

    let worker = RefreshWorker::new(store, symbol, config);
    let mut view = worker.handle().subscribe();
    let formatter = *formatter;

    tokio::spawn(async move {
        while view.changed().await.is_ok() {
            let merged = view.borrow().clone();
            println!("{}\n", formatter.format_history(&merged));
        }
    });

    worker.run().await?;
    Ok(())
}
