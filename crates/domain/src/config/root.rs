use serde::{Deserialize, Serialize};
use std::path::Path;

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::monitor::MonitorConfig;
use super::resolver::ResolverConfig;

const LOCAL_CONFIG: &str = "dns-monitor.toml";
const SYSTEM_CONFIG: &str = "/etc/dns-monitor/config.toml";

/// Main configuration structure for DNS Monitor
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Resolver settings shared by all monitors
    #[serde(default)]
    pub resolver: ResolverConfig,

    /// Scheduled checks
    #[serde(default)]
    pub monitors: Vec<MonitorConfig>,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. dns-monitor.toml in current directory
    /// 3. /etc/dns-monitor/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if let Some(path) = Self::get_config_path() {
            Self::from_file(&path)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::parse(&contents)
    }

    pub fn parse(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if let Some(json) = overrides.json_logs {
            self.logging.json = json;
        }
        if let Some(path) = overrides.resolv_conf {
            self.resolver.resolv_conf = path;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.resolver.max_chain_depth == 0 {
            return Err(ConfigError::Validation(
                "max_chain_depth must be at least 1".to_string(),
            ));
        }

        for monitor in &self.monitors {
            if monitor.effective_hostname().trim().is_empty() {
                return Err(ConfigError::Validation(
                    "Monitor has neither hostname nor device".to_string(),
                ));
            }
            if monitor.timeout == 0 {
                return Err(ConfigError::Validation(format!(
                    "Monitor '{}' has a zero timeout",
                    monitor.device
                )));
            }
            if monitor.cycle_time == 0 {
                return Err(ConfigError::Validation(format!(
                    "Monitor '{}' has a zero cycle_time",
                    monitor.device
                )));
            }
        }

        Ok(())
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        if Path::new(LOCAL_CONFIG).exists() {
            Some(LOCAL_CONFIG.to_string())
        } else if Path::new(SYSTEM_CONFIG).exists() {
            Some(SYSTEM_CONFIG.to_string())
        } else {
            None
        }
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub log_level: Option<String>,
    pub json_logs: Option<bool>,
    pub resolv_conf: Option<String>,
}
