use crate::check_request::{CheckRequest, DEFAULT_EVENT_CLASS, DEFAULT_EVENT_KEY};
use crate::errors::DomainError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One scheduled DNS check, as stored by the monitoring host
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct MonitorConfig {
    /// Identifier of the monitored entity, copied into every event
    pub device: String,

    /// Name to resolve; defaults to the device id when empty
    #[serde(default)]
    pub hostname: String,

    /// DNS server to ask; empty uses the system resolver configuration
    #[serde(default)]
    pub dns_server: String,

    /// Address the hostname must resolve to; empty disables the comparison
    #[serde(default)]
    pub expected_ip_address: String,

    /// Per-query timeout in seconds (default: 15)
    #[serde(default = "default_timeout")]
    pub timeout: u64,

    /// Seconds between two checks (default: 300)
    #[serde(default = "default_cycle_time")]
    pub cycle_time: u64,

    #[serde(default = "default_event_key")]
    pub event_key: String,

    #[serde(default = "default_event_class")]
    pub event_class: String,
}

impl MonitorConfig {
    pub fn new(device: &str) -> Self {
        Self {
            device: device.to_string(),
            hostname: String::new(),
            dns_server: String::new(),
            expected_ip_address: String::new(),
            timeout: default_timeout(),
            cycle_time: default_cycle_time(),
            event_key: default_event_key(),
            event_class: default_event_class(),
        }
    }

    pub fn effective_hostname(&self) -> &str {
        if self.hostname.trim().is_empty() {
            &self.device
        } else {
            &self.hostname
        }
    }

    pub fn cycle_interval(&self) -> Duration {
        Duration::from_secs(self.cycle_time)
    }

    pub fn to_request(&self) -> Result<CheckRequest, DomainError> {
        Ok(CheckRequest::new(
            self.effective_hostname(),
            Some(&self.dns_server),
            Some(&self.expected_ip_address),
            Duration::from_secs(self.timeout),
        )?
        .with_event_key(&self.event_key)
        .with_event_class(&self.event_class))
    }
}

fn default_timeout() -> u64 {
    15
}

fn default_cycle_time() -> u64 {
    300
}

fn default_event_key() -> String {
    DEFAULT_EVENT_KEY.to_string()
}

fn default_event_class() -> String {
    DEFAULT_EVENT_CLASS.to_string()
}
