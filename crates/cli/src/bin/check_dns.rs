use clap::Parser;
use dns_monitor::bootstrap;
use dns_monitor::di::Services;
use dns_monitor::output::PluginLine;
use dns_monitor_domain::{CheckRequest, LoggingConfig, ResolverConfig};
use std::time::Duration;

#[derive(Parser)]
#[command(name = "check_dns")]
#[command(version)]
#[command(about = "Resolve a hostname and report the result as a monitoring-plugin line")]
struct Cli {
    /// Hostname to resolve
    #[arg(short = 'H', long)]
    hostname: String,

    /// DNS server to ask (IP, IP:port or hostname); defaults to resolv.conf
    #[arg(short = 's', long = "server")]
    dns_server: Option<String>,

    /// Address the hostname is expected to resolve to
    #[arg(short = 'a', long = "expected-address")]
    expected_address: Option<String>,

    /// Per-query timeout in seconds
    #[arg(short = 't', long, default_value_t = 15)]
    timeout: u64,

    /// Resolver configuration used when no server is given
    #[arg(long, default_value = "/etc/resolv.conf")]
    resolv_conf: String,

    /// Log level for stderr diagnostics
    #[arg(long, default_value = "warn")]
    log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    bootstrap::init_logging(&LoggingConfig {
        level: cli.log_level.clone(),
        json: false,
    });

    let request = CheckRequest::new(
        &cli.hostname,
        cli.dns_server.as_deref(),
        cli.expected_address.as_deref(),
        Duration::from_secs(cli.timeout),
    )?;

    let services = Services::new(&ResolverConfig {
        resolv_conf: cli.resolv_conf,
        ..ResolverConfig::default()
    });

    let result = services.run_check.execute(&request).await;
    let line = PluginLine::from_result(&result, request.dns_server());

    println!("{}", line);
    std::process::exit(line.exit_code);
}
