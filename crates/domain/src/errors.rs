use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid hostname: {0}")]
    InvalidHostname(String),

    #[error("Invalid timeout: must be greater than zero")]
    InvalidTimeout,

    #[error("Invalid DNS server: {0}")]
    InvalidServer(String),

    #[error("Resolver configuration error: {0}")]
    ResolverConfig(String),

    #[error("DNS CRITICAL - expected '{expected}' but got '{received}'")]
    ExpectationMismatch { expected: String, received: String },
}

/// Failure of a single DNS lookup, tagged with the server that produced it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryFailure {
    #[error("Domain not found (NXDOMAIN) from {server}")]
    NameNotFound { server: String },

    #[error("Server {server} answered {rcode}")]
    ServerError { server: String, rcode: String },

    #[error("Query to {server} timed out")]
    Timeout { server: String },

    #[error("Invalid response from {server}: {reason}")]
    InvalidResponse { server: String, reason: String },

    #[error("{reason}")]
    Transport { server: String, reason: String },
}

impl QueryFailure {
    pub fn server(&self) -> &str {
        match self {
            Self::NameNotFound { server }
            | Self::ServerError { server, .. }
            | Self::Timeout { server }
            | Self::InvalidResponse { server, .. }
            | Self::Transport { server, .. } => server,
        }
    }

    /// Whether a DNS message actually came back before the failure was decided.
    pub fn response_received(&self) -> bool {
        matches!(
            self,
            Self::NameNotFound { .. } | Self::ServerError { .. } | Self::InvalidResponse { .. }
        )
    }

    /// Only timeouts and network errors advance to the next candidate server.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Timeout { .. } | Self::Transport { .. })
    }
}
