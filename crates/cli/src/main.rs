use clap::Parser;
use dns_monitor::bootstrap;
use dns_monitor::di::Services;
use dns_monitor_domain::{CliOverrides, PluginOutput};
use dns_monitor_jobs::{DnsMonitorJob, JobRunner};
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "dns-monitor")]
#[command(version)]
#[command(about = "DNS Monitor - scheduled DNS health checks")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// resolv.conf used by monitors without a DNS server
    #[arg(long, value_name = "FILE")]
    resolv_conf: Option<String>,

    /// Run every monitor once and exit
    #[arg(long)]
    once: bool,

    /// Print each collection result as a JSON line on stdout
    #[arg(long)]
    json: bool,

    /// Emit logs as JSON
    #[arg(long)]
    json_logs: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        log_level: cli.log_level.clone(),
        json_logs: cli.json_logs.then_some(true),
        resolv_conf: cli.resolv_conf.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config.logging);

    info!("Starting DNS Monitor v{}", env!("CARGO_PKG_VERSION"));

    if config.monitors.is_empty() {
        warn!("No monitors configured, nothing to do");
        return Ok(());
    }

    let services = Services::new(&config.resolver);
    let jobs = config
        .monitors
        .into_iter()
        .map(|monitor| DnsMonitorJob::new(services.collect.clone(), monitor));

    if cli.once {
        return run_once(jobs, cli.json).await;
    }

    let shutdown = CancellationToken::new();
    let (tx, mut rx) = mpsc::unbounded_channel();
    let jobs: Vec<DnsMonitorJob> = jobs
        .map(|job| if cli.json { job.with_output(tx.clone()) } else { job })
        .collect();
    drop(tx);

    JobRunner::new()
        .with_monitors(jobs)
        .with_shutdown_token(shutdown.clone())
        .start()
        .await;

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                info!("Shutdown signal received");
                shutdown.cancel();
                break;
            }
            Some(output) = rx.recv() => {
                print_json(&output)?;
            }
        }
    }

    info!("DNS Monitor stopped");
    Ok(())
}

async fn run_once(jobs: impl Iterator<Item = DnsMonitorJob>, json: bool) -> anyhow::Result<()> {
    let mut set = JoinSet::new();
    for job in jobs {
        set.spawn(async move {
            let result = job.run_once().await;
            (job.device().to_string(), result)
        });
    }

    while let Some(joined) = set.join_next().await {
        let (device, result) = joined?;
        match result {
            Ok(output) if json => print_json(&output)?,
            Ok(_) => {}
            Err(e) => warn!(device = %device, error = %e, "Collection failed"),
        }
    }

    Ok(())
}

fn print_json(output: &PluginOutput) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string(output)?);
    Ok(())
}
