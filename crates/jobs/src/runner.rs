use crate::DnsMonitorJob;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::info;

pub trait SpawnableJob: Send + Sync + 'static {
    fn with_cancellation(self, token: CancellationToken) -> Self;
    fn start_job(self: Arc<Self>) -> tokio::task::JoinHandle<()>;
}

impl SpawnableJob for DnsMonitorJob {
    fn with_cancellation(self, token: CancellationToken) -> Self {
        self.with_cancellation(token)
    }

    fn start_job(self: Arc<Self>) -> tokio::task::JoinHandle<()> {
        tokio::spawn(async move { self.start().await })
    }
}

fn spawn_job<J: SpawnableJob>(job: J, shutdown: &Option<CancellationToken>) {
    let job = match shutdown {
        Some(token) => job.with_cancellation(token.clone()),
        None => job,
    };
    Arc::new(job).start_job();
}

pub struct JobRunner {
    monitors: Vec<DnsMonitorJob>,
    shutdown: Option<CancellationToken>,
}

impl JobRunner {
    pub fn new() -> Self {
        Self {
            monitors: Vec::new(),
            shutdown: None,
        }
    }

    pub fn with_monitor(mut self, job: DnsMonitorJob) -> Self {
        self.monitors.push(job);
        self
    }

    pub fn with_monitors(mut self, jobs: impl IntoIterator<Item = DnsMonitorJob>) -> Self {
        self.monitors.extend(jobs);
        self
    }

    pub fn with_shutdown_token(mut self, token: CancellationToken) -> Self {
        self.shutdown = Some(token);
        self
    }

    pub fn monitor_count(&self) -> usize {
        self.monitors.len()
    }

    pub async fn start(self) {
        info!(monitors = self.monitors.len(), "Starting DNS monitor jobs");

        for job in self.monitors {
            spawn_job(job, &self.shutdown);
        }

        info!("All DNS monitor jobs started");
    }
}

impl Default for JobRunner {
    fn default() -> Self {
        Self::new()
    }
}
