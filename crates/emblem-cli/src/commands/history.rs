//! History command.

use crate::cli::HistoryArgs;
use crate::commands::now_ms;
use crate::error::Result;
use crate::output::Formatter;
use emblem_domain::traits::RecordStore;
use emblem_domain::{merge_history, sessions_from_records, SymbolId};
use emblem_store::SqliteRecordStore;

/// Print the merged session history recorded for a symbol.
pub fn execute_history(args: HistoryArgs, db: &str, formatter: &Formatter) -> Result<()> {
    let store = SqliteRecordStore::new(db)?;
    let symbol = SymbolId::from_name(&args.name);

    let records = store.records_for(symbol)?;
    let merged = merge_history(sessions_from_records(records), &[], now_ms());

    println!("{}", formatter.format_history(&merged));
    Ok(())
}
