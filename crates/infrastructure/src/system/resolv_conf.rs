use dns_monitor_domain::{DomainError, DNS_PORT};
use resolv_conf::ScopedIp;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::Path;
use tracing::{debug, warn};

/// Used when the host lists no nameserver at all.
pub const FALLBACK_NAMESERVER: SocketAddr =
    SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), DNS_PORT);

/// Nameservers listed in `path`, in file order.
///
/// A missing file behaves like an empty one; a file that exists but cannot
/// be parsed is a configuration error.
pub fn load_nameservers(path: &Path) -> Result<Vec<SocketAddr>, DomainError> {
    let contents = match std::fs::read(path) {
        Ok(contents) => contents,
        Err(e) => {
            warn!(
                path = %path.display(),
                error = %e,
                fallback = %FALLBACK_NAMESERVER,
                "Cannot read resolver configuration"
            );
            return Ok(vec![FALLBACK_NAMESERVER]);
        }
    };

    let servers = parse_nameservers(&contents)
        .map_err(|e| DomainError::ResolverConfig(format!("{}: {}", path.display(), e)))?;
    debug!(path = %path.display(), nameservers = servers.len(), "Loaded resolver configuration");
    Ok(servers)
}

pub fn parse_nameservers(contents: &[u8]) -> Result<Vec<SocketAddr>, DomainError> {
    let config = resolv_conf::Config::parse(contents)
        .map_err(|e| DomainError::ResolverConfig(e.to_string()))?;

    let servers: Vec<SocketAddr> = config
        .nameservers
        .iter()
        .map(|ns| {
            let ip = match ns {
                ScopedIp::V4(ip) => IpAddr::V4(*ip),
                ScopedIp::V6(ip, _) => IpAddr::V6(*ip),
            };
            SocketAddr::new(ip, DNS_PORT)
        })
        .collect();

    if servers.is_empty() {
        return Ok(vec![FALLBACK_NAMESERVER]);
    }
    Ok(servers)
}
