//! Verify command.

use crate::cli::VerifyArgs;
use crate::commands::now_ms;
use crate::error::{CliError, Result};
use crate::input::{find_symbol, load_symbols};
use crate::output::Formatter;
use emblem_domain::traits::RecordStore;
use emblem_domain::{merge_history, sessions_from_records, VerificationStatus};
use emblem_store::SqliteRecordStore;
use emblem_verify::{
    verify_and_record, HttpProvider, Invoker, Judgment, MockProvider, Provider,
};
use std::sync::Arc;

/// Run all configured providers against one symbol, persist the judgments,
/// and print the resulting consensus view.
pub async fn execute_verify(args: VerifyArgs, db: &str, formatter: &Formatter) -> Result<()> {
    let symbols = load_symbols(&args.input)?;
    let symbol = find_symbol(&symbols, &args.name)?;

    let providers = if args.endpoints.is_empty() {
        tracing::info!("No endpoints configured, using the scripted mock provider set");
        mock_providers(&symbol.name)
    } else {
        parse_endpoints(&args.endpoints)?
    };

    let invoker = Invoker::new(providers);
    let mut store = SqliteRecordStore::new(db)?;

    let live = verify_and_record(&invoker, &symbol, &mut store).await;

    // The freshly appended records normally come straight back from the
    // store; the merge suppresses the live duplicate either way
    let persisted = store.records_for(symbol.id)?;
    let merged = merge_history(sessions_from_records(persisted), &live, now_ms());

    println!("{}", formatter.format_history(&merged));
    Ok(())
}

/// Parse repeatable `name=url` endpoint arguments into HTTP providers.
fn parse_endpoints(endpoints: &[String]) -> Result<Vec<Arc<dyn Provider>>> {
    endpoints
        .iter()
        .map(|entry| {
            let (name, url) = entry.split_once('=').ok_or_else(|| {
                CliError::InvalidInput(format!(
                    "Endpoint '{}' is not in name=url form",
                    entry
                ))
            })?;
            if name.is_empty() || url.is_empty() {
                return Err(CliError::InvalidInput(format!(
                    "Endpoint '{}' has an empty name or url",
                    entry
                )));
            }
            Ok(Arc::new(HttpProvider::new(name, url)) as Arc<dyn Provider>)
        })
        .collect()
}

/// A small scripted provider set for offline use.
fn mock_providers(symbol_name: &str) -> Vec<Arc<dyn Provider>> {
    let mut alpha = MockProvider::new("mock-alpha");
    alpha.add_judgment(
        symbol_name,
        Judgment::new(VerificationStatus::Verified, 85)
            .with_summary("Documented claims match the reference corpus"),
    );

    let mut beta = MockProvider::new("mock-beta");
    beta.add_judgment(
        symbol_name,
        Judgment::new(VerificationStatus::Verified, 75)
            .with_summary("Broad agreement across indexed sources"),
    );

    let mut gamma = MockProvider::new("mock-gamma");
    gamma.add_judgment(
        symbol_name,
        Judgment::new(VerificationStatus::Disputed, 55)
            .with_summary("Period attribution is contested"),
    );

    vec![Arc::new(alpha), Arc::new(beta), Arc::new(gamma)]
}
