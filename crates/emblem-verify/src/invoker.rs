//! Concurrent provider fan-out
//!
//! Issues one request per configured provider and folds every outcome,
//! success or failure, into a verification record. A slow or failing
//! provider never blocks or poisons its siblings.

use crate::provider::{CheckRequest, Provider};
use emblem_domain::traits::RecordStore;
use emblem_domain::{Symbol, VerificationRecord};
use futures::future::join_all;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{debug, warn};

/// Current wall-clock time in Unix milliseconds
fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Fans one symbol out to every configured provider
pub struct Invoker {
    providers: Vec<Arc<dyn Provider>>,
}

impl Invoker {
    /// Create an invoker over a provider set
    pub fn new(providers: Vec<Arc<dyn Provider>>) -> Self {
        Self { providers }
    }

    /// Number of configured providers
    pub fn provider_count(&self) -> usize {
        self.providers.len()
    }

    /// Run every provider against one symbol concurrently
    ///
    /// All calls start together and each resolves or fails independently; a
    /// failure becomes a record with `status = Error`, zero confidence, and
    /// the failure reason in `details`. The invoker itself never fails, and
    /// the returned records are in provider-configuration order, all
    /// stamped with the same resolution timestamp.
    pub async fn verify(&self, symbol: &Symbol) -> Vec<VerificationRecord> {
        self.verify_at(symbol, now_ms()).await
    }

    /// `verify` with an explicit record timestamp, for deterministic tests
    pub async fn verify_at(&self, symbol: &Symbol, timestamp_ms: u64) -> Vec<VerificationRecord> {
        let request = CheckRequest::from_symbol(symbol);

        debug!(
            symbol = %symbol.name,
            providers = self.providers.len(),
            "Starting verification run"
        );

        let calls = self.providers.iter().map(|provider| {
            let request = &request;
            async move { (provider.name().to_string(), provider.check(request).await) }
        });

        join_all(calls)
            .await
            .into_iter()
            .map(|(name, outcome)| match outcome {
                Ok(judgment) => VerificationRecord::new(
                    name,
                    judgment.status,
                    judgment.confidence,
                    timestamp_ms,
                )
                .with_summary(judgment.summary)
                .with_details(judgment.details)
                .with_sources(judgment.sources),
                Err(error) => {
                    warn!(provider = %name, %error, "Provider call failed");
                    VerificationRecord::failed(name, error.to_string(), timestamp_ms)
                }
            })
            .collect()
    }
}

/// Run a verification and append every record to the store
///
/// Returns the fresh records - the live set the consensus view merges until
/// the next refresh picks them up from storage. An append failure is logged
/// and skipped; the record still participates in the live session.
pub async fn verify_and_record<S>(
    invoker: &Invoker,
    symbol: &Symbol,
    store: &mut S,
) -> Vec<VerificationRecord>
where
    S: RecordStore,
    S::Error: std::fmt::Display,
{
    let records = invoker.verify(symbol).await;

    for record in &records {
        if let Err(error) = store.append_record(symbol.id, record.clone()) {
            warn!(
                provider = %record.provider,
                %error,
                "Failed to persist verification record"
            );
        }
    }

    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockProvider;
    use crate::provider::Judgment;
    use emblem_domain::{consensus, SymbolId, VerificationStatus};

    fn symbol() -> Symbol {
        Symbol::new("Ankh", "Ancient Egypt", 0).with_description("Key of life")
    }

    fn three_providers() -> Vec<Arc<dyn Provider>> {
        let mut alpha = MockProvider::new("alpha");
        alpha.add_judgment("Ankh", Judgment::new(VerificationStatus::Verified, 80));
        let mut beta = MockProvider::new("beta");
        beta.add_judgment("Ankh", Judgment::new(VerificationStatus::Verified, 60));
        let mut gamma = MockProvider::new("gamma");
        gamma.add_failure("Ankh", "simulated timeout");

        vec![Arc::new(alpha), Arc::new(beta), Arc::new(gamma)]
    }

    #[tokio::test]
    async fn test_all_providers_report() {
        let invoker = Invoker::new(three_providers());

        let records = invoker.verify_at(&symbol(), 1000).await;

        assert_eq!(records.len(), 3);
        let providers: Vec<&str> = records.iter().map(|r| r.provider.as_str()).collect();
        assert_eq!(providers, vec!["alpha", "beta", "gamma"]);
    }

    #[tokio::test]
    async fn test_failure_becomes_error_record() {
        let invoker = Invoker::new(three_providers());

        let records = invoker.verify_at(&symbol(), 1000).await;
        let failed = &records[2];

        assert_eq!(failed.status, VerificationStatus::Error);
        assert_eq!(failed.confidence, 0);
        assert!(failed.details.contains("simulated timeout"));
    }

    #[tokio::test]
    async fn test_failure_does_not_poison_siblings() {
        let invoker = Invoker::new(three_providers());

        let records = invoker.verify_at(&symbol(), 1000).await;

        // The two live judgments average to exactly the verified threshold
        let (status, confidence) = consensus(&records);
        assert_eq!(confidence, 70);
        assert_eq!(status, VerificationStatus::Verified);
    }

    #[tokio::test]
    async fn test_records_share_timestamp() {
        let invoker = Invoker::new(three_providers());

        let records = invoker.verify_at(&symbol(), 12345).await;
        assert!(records.iter().all(|r| r.timestamp_ms == 12345));
    }

    #[tokio::test]
    async fn test_no_providers() {
        let invoker = Invoker::new(Vec::new());
        assert!(invoker.verify_at(&symbol(), 1000).await.is_empty());
    }

    struct MemoryStore {
        records: Vec<(SymbolId, VerificationRecord)>,
        fail: bool,
    }

    impl RecordStore for MemoryStore {
        type Error = String;

        fn append_record(
            &mut self,
            symbol: SymbolId,
            record: VerificationRecord,
        ) -> Result<(), Self::Error> {
            if self.fail {
                return Err("store offline".to_string());
            }
            self.records.push((symbol, record));
            Ok(())
        }

        fn records_for(&self, symbol: SymbolId) -> Result<Vec<VerificationRecord>, Self::Error> {
            Ok(self
                .records
                .iter()
                .filter(|(id, _)| *id == symbol)
                .map(|(_, r)| r.clone())
                .collect())
        }
    }

    #[tokio::test]
    async fn test_verify_and_record_appends() {
        let invoker = Invoker::new(three_providers());
        let mut store = MemoryStore {
            records: Vec::new(),
            fail: false,
        };

        let records = verify_and_record(&invoker, &symbol(), &mut store).await;

        assert_eq!(records.len(), 3);
        assert_eq!(store.records_for(symbol().id).unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_append_failure_keeps_live_records() {
        let invoker = Invoker::new(three_providers());
        let mut store = MemoryStore {
            records: Vec::new(),
            fail: true,
        };

        let records = verify_and_record(&invoker, &symbol(), &mut store).await;

        // Persistence failed but the live set is intact
        assert_eq!(records.len(), 3);
        assert!(store.records.is_empty());
    }
}
