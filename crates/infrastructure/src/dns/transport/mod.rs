pub mod tcp;
pub mod udp;

use async_trait::async_trait;
use dns_monitor_domain::QueryFailure;
use std::net::SocketAddr;
use std::time::Duration;

#[derive(Debug)]
pub struct TransportResponse {
    pub bytes: Vec<u8>,

    pub protocol_used: &'static str,
}

/// One request/response exchange with a single server. Sockets live only
/// for the duration of a call.
#[async_trait]
pub trait DnsTransport: Send + Sync {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, QueryFailure>;
}

pub enum Transport {
    Udp(udp::UdpTransport),
    Tcp(tcp::TcpTransport),
}

impl Transport {
    pub fn udp(server_addr: SocketAddr) -> Self {
        Self::Udp(udp::UdpTransport::new(server_addr))
    }

    pub fn tcp(server_addr: SocketAddr) -> Self {
        Self::Tcp(tcp::TcpTransport::new(server_addr))
    }

    pub async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, QueryFailure> {
        match self {
            Self::Udp(t) => DnsTransport::send(t, message_bytes, timeout).await,
            Self::Tcp(t) => DnsTransport::send(t, message_bytes, timeout).await,
        }
    }
}

pub(crate) fn timeout_failure(server_addr: SocketAddr) -> QueryFailure {
    QueryFailure::Timeout {
        server: server_addr.ip().to_string(),
    }
}

pub(crate) fn io_failure(server_addr: SocketAddr, error: std::io::Error) -> QueryFailure {
    QueryFailure::Transport {
        server: server_addr.ip().to_string(),
        reason: error.to_string(),
    }
}
