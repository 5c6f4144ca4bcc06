use dns_monitor_domain::{CliOverrides, Config};
use tracing::info;

pub fn load_config(config_path: Option<&str>, cli_overrides: CliOverrides) -> anyhow::Result<Config> {
    let config = Config::load(config_path, cli_overrides)?;
    config.validate()?;

    info!(
        config_file = config_path
            .map(str::to_string)
            .or_else(Config::get_config_path)
            .as_deref()
            .unwrap_or("default"),
        monitors = config.monitors.len(),
        resolv_conf = %config.resolver.resolv_conf,
        max_chain_depth = config.resolver.max_chain_depth,
        "Configuration loaded"
    );

    Ok(config)
}
