use dns_monitor_application::ports::{CheckReporter, QueryClientFactory};
use dns_monitor_application::use_cases::{CollectDnsMonitorUseCase, RunDnsCheckUseCase};
use dns_monitor_domain::ResolverConfig;
use dns_monitor_infrastructure::dns::HickoryQueryClientFactory;
use dns_monitor_infrastructure::reporting::TracingCheckReporter;
use std::sync::Arc;

/// Wiring shared by both binaries.
pub struct Services {
    pub run_check: Arc<RunDnsCheckUseCase>,
    pub collect: Arc<CollectDnsMonitorUseCase>,
}

impl Services {
    pub fn new(resolver: &ResolverConfig) -> Self {
        let clients: Arc<dyn QueryClientFactory> =
            Arc::new(HickoryQueryClientFactory::new(&resolver.resolv_conf));
        let reporter: Arc<dyn CheckReporter> = Arc::new(TracingCheckReporter::new());

        let run_check = Arc::new(
            RunDnsCheckUseCase::new(clients).with_max_chain_depth(resolver.max_chain_depth),
        );
        let collect = Arc::new(CollectDnsMonitorUseCase::new(run_check.clone(), reporter));

        Self { run_check, collect }
    }
}
