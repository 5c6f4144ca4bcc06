use dns_monitor_domain::{
    CheckRequest, CheckResult, DomainError, OutcomeKind, QueryFailure, ResolutionOutcome, Severity,
};
use std::net::IpAddr;
use std::sync::Arc;
use std::time::Duration;

pub const TIMEOUT_MESSAGE: &str = "CRITICAL - Plugin timed out while executing system call";
pub const UNKNOWN_ERROR_MESSAGE: &str = "DNS Unknown error";

/// Maps resolutions and query failures to a `CheckResult`.
///
/// Every function here is pure: the same inputs always yield the same
/// severity, message and elapsed-time disposition.
pub struct OutcomeClassifier;

impl OutcomeClassifier {
    pub fn classify_resolution(
        request: &CheckRequest,
        outcome: ResolutionOutcome,
        elapsed: Duration,
        server: &str,
    ) -> CheckResult {
        let received = match outcome {
            ResolutionOutcome::Resolved(ip) => ip,
            ResolutionOutcome::NotFound => {
                return Self::build(
                    request,
                    OutcomeKind::InvalidResponse,
                    Severity::Warning,
                    invalid_address_message(server),
                    Some(elapsed),
                    Some(server),
                    None,
                );
            }
        };

        if let Some(expected) = request.expected_address() {
            if !addresses_match(expected, received) {
                return Self::build(
                    request,
                    OutcomeKind::AddressMismatch,
                    Severity::Critical,
                    DomainError::ExpectationMismatch {
                        expected: expected.to_string(),
                        received: received.to_string(),
                    }
                    .to_string(),
                    Some(elapsed),
                    Some(server),
                    Some(received),
                );
            }
        }

        Self::build(
            request,
            OutcomeKind::Healthy,
            Severity::Ok,
            format!(
                "DNS OK: {:.3} seconds response time. {} returns {}",
                elapsed.as_secs_f64(),
                request.hostname(),
                received
            ),
            Some(elapsed),
            Some(server),
            Some(received),
        )
    }

    pub fn classify_failure(
        request: &CheckRequest,
        failure: &QueryFailure,
        elapsed: Duration,
    ) -> CheckResult {
        let (kind, severity) = Self::failure_disposition(failure);
        let elapsed = failure.response_received().then_some(elapsed);

        let message = match failure {
            QueryFailure::NameNotFound { .. } => format!(
                "Domain {} was not found by the server",
                request.hostname()
            ),
            QueryFailure::ServerError { server, .. } => format!("DNS WARNING - {}", server),
            QueryFailure::InvalidResponse { server, .. } => invalid_address_message(server),
            QueryFailure::Timeout { .. } => TIMEOUT_MESSAGE.to_string(),
            QueryFailure::Transport { reason, .. } if reason.trim().is_empty() => {
                UNKNOWN_ERROR_MESSAGE.to_string()
            }
            QueryFailure::Transport { reason, .. } => reason.clone(),
        };

        Self::build(
            request,
            kind,
            severity,
            message,
            elapsed,
            Some(failure.server()),
            None,
        )
    }

    /// The query client could not even be built, so nothing was sent.
    pub fn classify_misconfiguration(request: &CheckRequest, error: &DomainError) -> CheckResult {
        Self::build(
            request,
            OutcomeKind::Misconfigured,
            Severity::Error,
            format!("DNS ERROR - {}", error),
            None,
            request.dns_server(),
            None,
        )
    }

    pub fn failure_disposition(failure: &QueryFailure) -> (OutcomeKind, Severity) {
        match failure {
            QueryFailure::NameNotFound { .. } => (OutcomeKind::NameNotFound, Severity::Critical),
            QueryFailure::ServerError { .. } => (OutcomeKind::ServerError, Severity::Warning),
            QueryFailure::InvalidResponse { .. } => {
                (OutcomeKind::InvalidResponse, Severity::Warning)
            }
            QueryFailure::Timeout { .. } => (OutcomeKind::Timeout, Severity::Critical),
            QueryFailure::Transport { .. } => (OutcomeKind::Transport, Severity::Warning),
        }
    }

    fn build(
        request: &CheckRequest,
        kind: OutcomeKind,
        severity: Severity,
        message: String,
        elapsed: Option<Duration>,
        server: Option<&str>,
        resolved_address: Option<IpAddr>,
    ) -> CheckResult {
        CheckResult {
            severity,
            kind,
            elapsed,
            message,
            event_key: Arc::from(request.event_key()),
            event_class: Arc::from(request.event_class()),
            hostname: Arc::from(request.hostname()),
            server: server.map(Arc::from),
            resolved_address,
            expected_address: request.expected_address().map(Arc::from),
        }
    }
}

fn invalid_address_message(server: &str) -> String {
    format!("DNS WARNING - Server: {} - invalid address", server)
}

/// Compares as IP addresses when the expectation parses as one, so that
/// different spellings of the same IPv6 address are equal.
pub fn addresses_match(expected: &str, received: IpAddr) -> bool {
    match expected.trim().parse::<IpAddr>() {
        Ok(expected) => expected == received,
        Err(_) => expected.trim() == received.to_string(),
    }
}
