use dns_monitor_application::use_cases::CollectDnsMonitorUseCase;
use dns_monitor_domain::{DomainError, MonitorConfig, PluginOutput};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Runs one configured monitor on its collection cycle.
pub struct DnsMonitorJob {
    collect: Arc<CollectDnsMonitorUseCase>,
    monitor: MonitorConfig,
    interval: Duration,
    output: Option<mpsc::UnboundedSender<PluginOutput>>,
    shutdown: CancellationToken,
}

impl DnsMonitorJob {
    pub fn new(collect: Arc<CollectDnsMonitorUseCase>, monitor: MonitorConfig) -> Self {
        let interval = monitor.cycle_interval();
        Self {
            collect,
            monitor,
            interval,
            output: None,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Every successful collection is also sent to `output`.
    pub fn with_output(mut self, output: mpsc::UnboundedSender<PluginOutput>) -> Self {
        self.output = Some(output);
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub fn device(&self) -> &str {
        &self.monitor.device
    }

    /// One collection, outside of any schedule.
    pub async fn run_once(&self) -> Result<PluginOutput, DomainError> {
        let output = self.collect.execute(&self.monitor).await?;
        if let Some(tx) = &self.output {
            if tx.send(output.clone()).is_err() {
                debug!(device = %self.monitor.device, "Output receiver dropped");
            }
        }
        Ok(output)
    }

    pub async fn start(self: Arc<Self>) {
        info!(
            device = %self.monitor.device,
            hostname = %self.monitor.effective_hostname(),
            interval_secs = self.interval.as_secs(),
            "Starting DNS monitor job"
        );

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(self.interval);
            interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
            loop {
                tokio::select! {
                    _ = self.shutdown.cancelled() => {
                        info!(device = %self.monitor.device, "DnsMonitorJob: shutting down");
                        break;
                    }
                    _ = interval.tick() => {
                        match self.run_once().await {
                            Ok(output) => {
                                debug!(
                                    device = %self.monitor.device,
                                    events = output.events.len(),
                                    time = ?output.time(),
                                    "Collection completed"
                                );
                            }
                            Err(e) => {
                                warn!(device = %self.monitor.device, error = %e, "Collection failed");
                            }
                        }
                    }
                }
            }
        });
    }
}
