use async_trait::async_trait;
use dns_monitor_domain::{AnswerSet, DomainError, NameServer, QueryFailure};
use std::sync::Arc;
use std::time::Duration;

/// Performs single address lookups, each bounded by the client's timeout.
#[async_trait]
pub trait DnsQueryClient: Send + Sync {
    /// Query `name` against `server`, or against the client's own servers
    /// when `server` is `None`.
    async fn lookup(
        &self,
        name: &str,
        server: Option<&NameServer>,
    ) -> Result<AnswerSet, QueryFailure>;

    /// The server this client asks first, as shown in failure messages.
    fn server_label(&self) -> String;
}

/// Builds a query client bound to an explicit server, or to the host's
/// resolver configuration when `dns_server` is `None`.
#[async_trait]
pub trait QueryClientFactory: Send + Sync {
    async fn create(
        &self,
        dns_server: Option<&str>,
        timeout: Duration,
    ) -> Result<Arc<dyn DnsQueryClient>, DomainError>;
}
