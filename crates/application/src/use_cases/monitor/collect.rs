use crate::ports::CheckReporter;
use crate::use_cases::dns::RunDnsCheckUseCase;
use dns_monitor_domain::{DomainError, MonitorConfig, PluginOutput};
use std::sync::Arc;

/// One collection cycle of a scheduled DNS monitor.
pub struct CollectDnsMonitorUseCase {
    run_check: Arc<RunDnsCheckUseCase>,
    reporter: Arc<dyn CheckReporter>,
}

impl CollectDnsMonitorUseCase {
    pub fn new(run_check: Arc<RunDnsCheckUseCase>, reporter: Arc<dyn CheckReporter>) -> Self {
        Self {
            run_check,
            reporter,
        }
    }

    /// Reports the result, then hands back the datapoints and event.
    /// An address mismatch comes back as `DomainError::ExpectationMismatch`.
    pub async fn execute(&self, monitor: &MonitorConfig) -> Result<PluginOutput, DomainError> {
        let request = monitor.to_request()?;
        let result = self.run_check.execute(&request).await;
        self.reporter.report(&result);
        PluginOutput::from_result(&result, &monitor.device)
    }
}
