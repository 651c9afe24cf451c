use async_trait::async_trait;
use osint_lookup_bot::providers::LookupProvider;
use osint_lookup_bot::{LookupResult, QueryKind};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Mock provider returning a canned result and recording every query.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockProvider {
    kind: QueryKind,
    result: LookupResult,
    delay: Option<Duration>,
    queries: Arc<Mutex<Vec<String>>>,
}

#[allow(dead_code)]
impl MockProvider {
    pub fn new(kind: QueryKind, result: LookupResult) -> Self {
        Self {
            kind,
            result,
            delay: None,
            queries: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Sleep before answering, to overlap concurrent lookups.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn call_count(&self) -> usize {
        self.queries.lock().unwrap().len()
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl LookupProvider for MockProvider {
    fn kind(&self) -> QueryKind {
        self.kind
    }

    async fn lookup(&self, query: &str) -> LookupResult {
        self.queries.lock().unwrap().push(query.to_string());
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.result.clone()
    }
}
