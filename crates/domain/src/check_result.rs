use serde::{Serialize, Serializer};
use std::fmt;
use std::net::IpAddr;
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Severity {
    Ok,
    Warning,
    Critical,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Ok => "OK",
            Severity::Warning => "WARNING",
            Severity::Critical => "CRITICAL",
            Severity::Error => "ERROR",
        }
    }

    pub fn event_severity(&self) -> EventSeverity {
        match self {
            Severity::Ok => EventSeverity::Clear,
            Severity::Warning => EventSeverity::Warning,
            Severity::Critical | Severity::Error => EventSeverity::Error,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Severity scale of the monitoring host's event system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventSeverity {
    Clear,
    Warning,
    Error,
}

impl EventSeverity {
    pub fn as_u8(&self) -> u8 {
        match self {
            EventSeverity::Clear => 0,
            EventSeverity::Warning => 3,
            EventSeverity::Error => 4,
        }
    }
}

impl Serialize for EventSeverity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.as_u8())
    }
}

/// Which branch of classification produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutcomeKind {
    Healthy,
    AddressMismatch,
    NameNotFound,
    ServerError,
    InvalidResponse,
    Timeout,
    Transport,
    Misconfigured,
}

impl OutcomeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutcomeKind::Healthy => "healthy",
            OutcomeKind::AddressMismatch => "address_mismatch",
            OutcomeKind::NameNotFound => "name_not_found",
            OutcomeKind::ServerError => "server_error",
            OutcomeKind::InvalidResponse => "invalid_response",
            OutcomeKind::Timeout => "timeout",
            OutcomeKind::Transport => "transport",
            OutcomeKind::Misconfigured => "misconfigured",
        }
    }

    /// Kinds that publish the elapsed time as the `time` datapoint.
    pub fn reports_elapsed(&self) -> bool {
        matches!(self, OutcomeKind::Healthy | OutcomeKind::NameNotFound)
    }
}

/// The single externally visible artifact of one check.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckResult {
    pub severity: Severity,
    pub kind: OutcomeKind,
    /// Present iff a DNS response arrived before the timeout.
    pub elapsed: Option<Duration>,
    pub message: String,
    pub event_key: Arc<str>,
    pub event_class: Arc<str>,
    pub hostname: Arc<str>,
    /// Server that produced the outcome, as reported in failure messages.
    pub server: Option<Arc<str>>,
    pub resolved_address: Option<IpAddr>,
    pub expected_address: Option<Arc<str>>,
}

impl CheckResult {
    pub fn is_ok(&self) -> bool {
        self.severity == Severity::Ok
    }

    pub fn elapsed_secs(&self) -> Option<f64> {
        self.elapsed.map(|d| d.as_secs_f64())
    }

    /// Value of the `time` datapoint, when this outcome publishes one.
    pub fn performance_value(&self) -> Option<f64> {
        if self.kind.reports_elapsed() {
            self.elapsed_secs()
        } else {
            None
        }
    }
}
