use dns_monitor_application::ports::CheckReporter;
use dns_monitor_domain::{CheckResult, Severity};
use tracing::{error, info, warn};

/// Emits every check result as a structured log event, at a level that
/// follows its severity.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingCheckReporter;

impl TracingCheckReporter {
    pub fn new() -> Self {
        Self
    }
}

impl CheckReporter for TracingCheckReporter {
    fn report(&self, result: &CheckResult) {
        let server = result.server.as_deref().unwrap_or("-");
        let time = result.performance_value();
        let resolved = result.resolved_address.map(|ip| ip.to_string());

        match result.severity {
            Severity::Ok => info!(
                hostname = %result.hostname,
                server,
                event_key = %result.event_key,
                event_class = %result.event_class,
                resolved = ?resolved,
                time = ?time,
                "{}", result.message
            ),
            Severity::Warning => warn!(
                hostname = %result.hostname,
                server,
                event_key = %result.event_key,
                event_class = %result.event_class,
                outcome = result.kind.as_str(),
                "{}", result.message
            ),
            Severity::Critical | Severity::Error => error!(
                hostname = %result.hostname,
                server,
                event_key = %result.event_key,
                event_class = %result.event_class,
                severity = %result.severity,
                outcome = result.kind.as_str(),
                time = ?time,
                "{}", result.message
            ),
        }
    }
}
