use dns_monitor_domain::CheckResult;

/// Sink the host provides for classified outcomes. Called once per check.
pub trait CheckReporter: Send + Sync {
    fn report(&self, result: &CheckResult);
}
