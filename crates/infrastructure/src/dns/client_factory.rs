use super::client::HickoryQueryClient;
use crate::system::resolv_conf;
use async_trait::async_trait;
use dns_monitor_application::ports::{DnsQueryClient, QueryClientFactory};
use dns_monitor_domain::{DomainError, NameServer};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Builds a fresh `HickoryQueryClient` per check, either against an explicit
/// server or against the nameservers of the host's resolver configuration.
pub struct HickoryQueryClientFactory {
    resolv_conf: PathBuf,
}

impl HickoryQueryClientFactory {
    pub fn new(resolv_conf: impl Into<PathBuf>) -> Self {
        Self {
            resolv_conf: resolv_conf.into(),
        }
    }

    async fn resolve_explicit(dns_server: &str) -> Result<SocketAddr, DomainError> {
        let server: NameServer = dns_server.parse()?;
        if let Some(addr) = server.socket_addr() {
            return Ok(addr);
        }

        debug!(server = %server.host, "Resolving DNS server hostname");
        let addr = tokio::net::lookup_host((server.host.as_ref(), server.port))
            .await
            .map_err(|e| DomainError::InvalidServer(format!("{}: {}", dns_server, e)))?
            .next()
            .ok_or_else(|| {
                DomainError::InvalidServer(format!("{}: no address found", dns_server))
            });
        addr
    }
}

#[async_trait]
impl QueryClientFactory for HickoryQueryClientFactory {
    async fn create(
        &self,
        dns_server: Option<&str>,
        timeout: Duration,
    ) -> Result<Arc<dyn DnsQueryClient>, DomainError> {
        let servers = match dns_server {
            Some(dns_server) => vec![Self::resolve_explicit(dns_server).await?],
            None => resolv_conf::load_nameservers(&self.resolv_conf)?,
        };

        Ok(Arc::new(HickoryQueryClient::new(servers, timeout)))
    }
}
