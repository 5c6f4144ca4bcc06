//! Single-line plugin output of `check_dns`, following the usual
//! monitoring-plugin convention of status text, performance data after a
//! `|`, and an exit code of 0, 1 or 2.

use dns_monitor_domain::{CheckResult, OutcomeKind};
use std::fmt;

pub const EXIT_OK: i32 = 0;
pub const EXIT_WARNING: i32 = 1;
pub const EXIT_CRITICAL: i32 = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginLine {
    pub text: String,
    pub exit_code: i32,
}

impl PluginLine {
    /// `dns_server` is what the user asked for, used when the result does
    /// not name the server itself.
    pub fn from_result(result: &CheckResult, dns_server: Option<&str>) -> Self {
        match result.kind {
            OutcomeKind::Healthy => Self {
                text: format!(
                    "{}|time={:.6}s;;;0.000000",
                    result.message,
                    result.elapsed_secs().unwrap_or_default()
                ),
                exit_code: EXIT_OK,
            },
            OutcomeKind::AddressMismatch => Self {
                text: format!(
                    "DNS CRITICAL - expected {} but got {}",
                    result.expected_address.as_deref().unwrap_or_default(),
                    result
                        .resolved_address
                        .map(|ip| ip.to_string())
                        .unwrap_or_default()
                ),
                exit_code: EXIT_CRITICAL,
            },
            _ => Self {
                text: format!(
                    "DNS WARNING -        {}",
                    result.server.as_deref().or(dns_server).unwrap_or_default()
                ),
                exit_code: EXIT_WARNING,
            },
        }
    }
}

impl fmt::Display for PluginLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
