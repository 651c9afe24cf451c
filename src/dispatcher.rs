//! Query dispatch.
//!
//! Takes one incoming message through classify → look up → render. Each call to
//! [`QueryDispatcher::handle`] is independent: the dispatcher holds no
//! per-query state, so concurrent messages can share one instance.

use crate::config::Config;
use crate::domain::QueryKind;
use crate::formatter;
use crate::models::RenderedResponse;
use crate::providers::{
    BreachEndpoint, EmailProvider, IpEndpoint, IpProvider, LookupProvider, PhoneEndpoint,
    PhoneProvider,
};
use std::sync::Arc;

/// Routes a query to the provider matching its kind and formats the result.
#[derive(Clone)]
pub struct QueryDispatcher {
    phone: Arc<dyn LookupProvider>,
    ip: Arc<dyn LookupProvider>,
    email: Arc<dyn LookupProvider>,
}

impl QueryDispatcher {
    /// Create a dispatcher from explicit providers.
    pub fn new(
        phone: Arc<dyn LookupProvider>,
        ip: Arc<dyn LookupProvider>,
        email: Arc<dyn LookupProvider>,
    ) -> Self {
        Self { phone, ip, email }
    }

    /// Create a dispatcher wired to the real lookup services.
    pub fn from_config(config: &Config) -> Self {
        let timeout = config.lookup_timeout();

        let phone = Arc::new(PhoneProvider::new(PhoneEndpoint::from_config(config), timeout))
            as Arc<dyn LookupProvider>;
        let ip = Arc::new(IpProvider::new(IpEndpoint::from_config(config), timeout))
            as Arc<dyn LookupProvider>;
        let email = Arc::new(EmailProvider::new(BreachEndpoint::from_config(config), timeout))
            as Arc<dyn LookupProvider>;

        Self::new(phone, ip, email)
    }

    fn provider_for(&self, kind: QueryKind) -> Option<&Arc<dyn LookupProvider>> {
        match kind {
            QueryKind::Phone => Some(&self.phone),
            QueryKind::IpAddress => Some(&self.ip),
            QueryKind::Email => Some(&self.email),
            QueryKind::Unrecognized => None,
        }
    }

    /// Classify, look up and render one message.
    ///
    /// Always produces exactly one reply. Unrecognized input never reaches a provider.
    pub async fn handle(&self, raw: &str) -> RenderedResponse {
        self.handle_classified(raw).await.1
    }

    /// Like [`handle`](Self::handle), also returning the kind the query was routed as.
    pub async fn handle_classified(&self, raw: &str) -> (QueryKind, RenderedResponse) {
        let query = raw.trim();
        let kind = QueryKind::classify(query);
        tracing::debug!(%kind, "Query classified");

        let Some(provider) = self.provider_for(kind) else {
            return (kind, formatter::render_unrecognized());
        };

        let result = provider.lookup(query).await;
        tracing::debug!(%kind, failed = result.is_error(), "Lookup finished");

        (kind, formatter::render(kind, &result, query))
    }
}
