//! Wire-level `DnsQueryClient`
//!
//! Sends one `IN A` query per lookup over UDP, retrying over TCP when the
//! answer is truncated. Without an explicit server the candidates are tried
//! in order, and only timeouts and transport errors move on to the next one.

use crate::dns::forwarding::{MessageBuilder, ResponseParser};
use crate::dns::transport::Transport;
use async_trait::async_trait;
use dns_monitor_application::ports::DnsQueryClient;
use dns_monitor_domain::{AnswerSet, NameServer, QueryFailure, RecordKind};
use hickory_proto::op::ResponseCode;
use std::net::SocketAddr;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tracing::debug;

pub struct HickoryQueryClient {
    servers: Vec<SocketAddr>,
    timeout: Duration,
    last_responder: Mutex<Option<SocketAddr>>,
}

impl HickoryQueryClient {
    pub fn new(servers: Vec<SocketAddr>, timeout: Duration) -> Self {
        Self {
            servers,
            timeout,
            last_responder: Mutex::new(None),
        }
    }

    async fn query_candidates(&self, name: &str) -> Result<AnswerSet, QueryFailure> {
        let mut last_failure = None;

        for (index, &server_addr) in self.servers.iter().enumerate() {
            match self.query_server(server_addr, name).await {
                Ok(answers) => {
                    self.remember_responder(server_addr);
                    return Ok(answers);
                }
                Err(failure) if failure.is_retryable() && index + 1 < self.servers.len() => {
                    debug!(
                        server = %server_addr,
                        error = %failure,
                        "Nameserver unreachable, trying next candidate"
                    );
                    last_failure = Some(failure);
                }
                Err(failure) => {
                    self.remember_responder(server_addr);
                    return Err(failure);
                }
            }
        }

        Err(last_failure.unwrap_or_else(|| QueryFailure::Transport {
            server: String::new(),
            reason: "No nameservers configured".to_string(),
        }))
    }

    /// Address of a delegated nameserver, resolving its hostname through
    /// this client's own servers when it is not an IP literal.
    async fn nameserver_addr(&self, server: &NameServer) -> Result<SocketAddr, QueryFailure> {
        if let Some(addr) = server.socket_addr() {
            return Ok(addr);
        }

        let answers = self.query_candidates(&server.host).await?;
        answers
            .address_for(&server.host, RecordKind::A)
            .or_else(|| answers.address_for(&server.host, RecordKind::AAAA))
            .map(|ip| SocketAddr::new(ip, server.port))
            .ok_or_else(|| QueryFailure::Transport {
                server: server.host.to_string(),
                reason: format!("Cannot resolve nameserver {}", server.host),
            })
    }

    async fn query_server(
        &self,
        server_addr: SocketAddr,
        name: &str,
    ) -> Result<AnswerSet, QueryFailure> {
        let server = server_addr.ip().to_string();
        let start = Instant::now();

        let (id, query_bytes) =
            MessageBuilder::build_query_with_id(name).map_err(|e| QueryFailure::Transport {
                server: server.clone(),
                reason: e.to_string(),
            })?;

        let udp = Transport::udp(server_addr);
        let udp_response = udp.send(&query_bytes, self.timeout).await?;
        let mut response = ResponseParser::parse(&udp_response.bytes, &server)?;
        let mut protocol = udp_response.protocol_used;

        if response.truncated {
            debug!(server = %server_addr, "Response truncated (TC bit), retrying via TCP");

            let remaining = self.timeout.saturating_sub(start.elapsed());
            if remaining.is_zero() {
                return Err(QueryFailure::Timeout { server });
            }

            let tcp = Transport::tcp(server_addr);
            let tcp_response = tcp.send(&query_bytes, remaining).await?;
            response = ResponseParser::parse(&tcp_response.bytes, &server)?;
            protocol = tcp_response.protocol_used;
        }

        if response.id != id {
            return Err(QueryFailure::InvalidResponse {
                server,
                reason: format!("Response ID {} does not match query ID {}", response.id, id),
            });
        }

        debug!(
            name,
            server = %server_addr,
            protocol,
            rcode = ResponseParser::rcode_to_status(response.rcode),
            latency_ms = start.elapsed().as_millis() as u64,
            "Query answered"
        );

        match response.rcode {
            ResponseCode::NoError => Ok(response.answers),
            ResponseCode::NXDomain => Err(QueryFailure::NameNotFound { server }),
            rcode => Err(QueryFailure::ServerError {
                server,
                rcode: ResponseParser::rcode_to_status(rcode).to_string(),
            }),
        }
    }

    fn remember_responder(&self, server_addr: SocketAddr) {
        if let Ok(mut last) = self.last_responder.lock() {
            *last = Some(server_addr);
        }
    }
}

#[async_trait]
impl DnsQueryClient for HickoryQueryClient {
    async fn lookup(
        &self,
        name: &str,
        server: Option<&NameServer>,
    ) -> Result<AnswerSet, QueryFailure> {
        match server {
            None => self.query_candidates(name).await,
            Some(server) => {
                let addr = self.nameserver_addr(server).await?;
                self.query_server(addr, name).await
            }
        }
    }

    /// The candidate that produced the latest outcome, else the first one.
    fn server_label(&self) -> String {
        let last = self.last_responder.lock().ok().and_then(|last| *last);
        last.or_else(|| self.servers.first().copied())
            .map(|addr| addr.ip().to_string())
            .unwrap_or_default()
    }
}
