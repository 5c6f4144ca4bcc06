use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_CHAIN_DEPTH: u8 = 10;

/// Settings shared by every check
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverConfig {
    /// resolv.conf used when a monitor names no DNS server
    #[serde(default = "default_resolv_conf")]
    pub resolv_conf: String,

    /// Hop budget for CNAME and delegation chasing (default: 10)
    #[serde(default = "default_max_chain_depth")]
    pub max_chain_depth: u8,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            resolv_conf: default_resolv_conf(),
            max_chain_depth: default_max_chain_depth(),
        }
    }
}

fn default_resolv_conf() -> String {
    "/etc/resolv.conf".to_string()
}

fn default_max_chain_depth() -> u8 {
    DEFAULT_MAX_CHAIN_DEPTH
}
