use crate::errors::DomainError;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

pub const DEFAULT_EVENT_KEY: &str = "DnsMonitor";
pub const DEFAULT_EVENT_CLASS: &str = "/Status/DNS";
pub const DNS_PORT: u16 = 53;

/// A DNS server endpoint given either as an IP literal or as a hostname.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NameServer {
    pub host: Arc<str>,
    pub port: u16,
}

impl NameServer {
    pub fn new(host: &str, port: u16) -> Self {
        Self {
            host: Arc::from(host.trim_end_matches('.')),
            port,
        }
    }

    pub fn from_socket_addr(addr: SocketAddr) -> Self {
        Self {
            host: Arc::from(addr.ip().to_string()),
            port: addr.port(),
        }
    }

    pub fn ip(&self) -> Option<IpAddr> {
        self.host.parse().ok()
    }

    pub fn socket_addr(&self) -> Option<SocketAddr> {
        self.ip().map(|ip| SocketAddr::new(ip, self.port))
    }
}

/// Displays the bare host, which is how server failures are reported.
impl fmt::Display for NameServer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.host)
    }
}

impl FromStr for NameServer {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(DomainError::InvalidServer("empty server address".to_string()));
        }

        if let Ok(ip) = s.parse::<IpAddr>() {
            return Ok(Self::new(&ip.to_string(), DNS_PORT));
        }
        if let Ok(addr) = s.parse::<SocketAddr>() {
            return Ok(Self::from_socket_addr(addr));
        }

        let (host, port) = match s.rsplit_once(':') {
            Some((host, port)) => {
                let port = port
                    .parse::<u16>()
                    .map_err(|_| DomainError::InvalidServer(format!("invalid port in '{}'", s)))?;
                (host, port)
            }
            None => (s, DNS_PORT),
        };

        if host.is_empty() || host.contains(':') || host.contains(char::is_whitespace) {
            return Err(DomainError::InvalidServer(s.to_string()));
        }

        Ok(Self::new(host, port))
    }
}

/// Everything one check invocation needs. Built once and never changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckRequest {
    hostname: Arc<str>,
    dns_server: Option<Arc<str>>,
    expected_address: Option<Arc<str>>,
    timeout: Duration,
    event_key: Arc<str>,
    event_class: Arc<str>,
}

impl CheckRequest {
    /// Empty `dns_server` or `expected_address` strings mean "not set".
    pub fn new(
        hostname: &str,
        dns_server: Option<&str>,
        expected_address: Option<&str>,
        timeout: Duration,
    ) -> Result<Self, DomainError> {
        let hostname = hostname.trim();
        if hostname.is_empty() {
            return Err(DomainError::InvalidHostname(
                "hostname must not be empty".to_string(),
            ));
        }
        if hostname.contains(char::is_whitespace) {
            return Err(DomainError::InvalidHostname(hostname.to_string()));
        }
        if timeout.is_zero() {
            return Err(DomainError::InvalidTimeout);
        }

        Ok(Self {
            hostname: Arc::from(hostname),
            dns_server: non_empty(dns_server),
            expected_address: non_empty(expected_address),
            timeout,
            event_key: Arc::from(DEFAULT_EVENT_KEY),
            event_class: Arc::from(DEFAULT_EVENT_CLASS),
        })
    }

    /// Empty keys keep the default.
    pub fn with_event_key(mut self, event_key: &str) -> Self {
        if let Some(key) = non_empty(Some(event_key)) {
            self.event_key = key;
        }
        self
    }

    /// Empty classes keep the default.
    pub fn with_event_class(mut self, event_class: &str) -> Self {
        if let Some(class) = non_empty(Some(event_class)) {
            self.event_class = class;
        }
        self
    }

    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    pub fn dns_server(&self) -> Option<&str> {
        self.dns_server.as_deref()
    }

    pub fn expected_address(&self) -> Option<&str> {
        self.expected_address.as_deref()
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn event_key(&self) -> &str {
        &self.event_key
    }

    pub fn event_class(&self) -> &str {
        &self.event_class
    }
}

fn non_empty(value: Option<&str>) -> Option<Arc<str>> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(Arc::from)
}
