use super::answer_chain::{AnswerChainResolver, DEFAULT_MAX_DEPTH};
use super::classify::OutcomeClassifier;
use crate::ports::QueryClientFactory;
use dns_monitor_domain::{CheckRequest, CheckResult};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Runs one DNS health check and classifies it.
///
/// Each call builds its own query client and timer, so concurrent checks
/// share nothing but the factory. No retries happen here; a failed query
/// yields exactly one classified result.
pub struct RunDnsCheckUseCase {
    clients: Arc<dyn QueryClientFactory>,
    max_chain_depth: u8,
}

impl RunDnsCheckUseCase {
    pub fn new(clients: Arc<dyn QueryClientFactory>) -> Self {
        Self {
            clients,
            max_chain_depth: DEFAULT_MAX_DEPTH,
        }
    }

    pub fn with_max_chain_depth(mut self, max_chain_depth: u8) -> Self {
        self.max_chain_depth = max_chain_depth;
        self
    }

    pub async fn execute(&self, request: &CheckRequest) -> CheckResult {
        let client = match self
            .clients
            .create(request.dns_server(), request.timeout())
            .await
        {
            Ok(client) => client,
            Err(e) => {
                warn!(
                    hostname = %request.hostname(),
                    dns_server = ?request.dns_server(),
                    error = %e,
                    "Cannot build DNS query client"
                );
                return OutcomeClassifier::classify_misconfiguration(request, &e);
            }
        };

        debug!(hostname = %request.hostname(), "Querying");

        let start = Instant::now();
        let result = match client.lookup(request.hostname(), None).await {
            Ok(answers) => {
                // Follow-up queries of the chase may be answered elsewhere.
                let server = client.server_label();
                debug!(records = answers.len(), server = %server, "Response received, resolving chain");
                let outcome = AnswerChainResolver::new(client.as_ref())
                    .with_max_depth(self.max_chain_depth)
                    .resolve(&answers, request.hostname())
                    .await;
                let elapsed = start.elapsed();
                OutcomeClassifier::classify_resolution(request, outcome, elapsed, &server)
            }
            Err(failure) => {
                debug!(error = %failure, "Query failed");
                OutcomeClassifier::classify_failure(request, &failure, start.elapsed())
            }
        };

        info!(
            hostname = %request.hostname(),
            server = result.server.as_deref().unwrap_or("-"),
            severity = %result.severity,
            outcome = result.kind.as_str(),
            elapsed_ms = ?result.elapsed.map(|d| d.as_millis() as u64),
            "DNS check classified"
        );

        result
    }
}
