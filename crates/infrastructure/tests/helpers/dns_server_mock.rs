#![allow(dead_code)]
use hickory_proto::op::{Message, MessageType, OpCode, ResponseCode};
use hickory_proto::rr::rdata::{A, AAAA, CNAME, NS};
use hickory_proto::rr::{Name, RData, Record};
use hickory_proto::serialize::binary::BinEncodable;
use std::collections::HashMap;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, UdpSocket};
use tokio::sync::oneshot;

/// Scripted reply for one query name.
#[derive(Clone, Default)]
pub struct MockResponse {
    pub rcode: Option<ResponseCode>,
    pub answers: Vec<Record>,
    pub authority: Vec<Record>,
    pub additional: Vec<Record>,
    /// UDP replies carry only the TC bit; the full answer needs TCP.
    pub truncate_udp: bool,
    /// Reply with a message ID that does not match the query.
    pub wrong_id: bool,
    /// Never reply.
    pub silent: bool,
}

impl MockResponse {
    pub fn answer(records: Vec<Record>) -> Self {
        Self {
            answers: records,
            ..Self::default()
        }
    }

    pub fn rcode(rcode: ResponseCode) -> Self {
        Self {
            rcode: Some(rcode),
            ..Self::default()
        }
    }

    pub fn silent() -> Self {
        Self {
            silent: true,
            ..Self::default()
        }
    }

    pub fn with_authority(mut self, records: Vec<Record>) -> Self {
        self.authority = records;
        self
    }

    pub fn with_additional(mut self, records: Vec<Record>) -> Self {
        self.additional = records;
        self
    }

    pub fn truncated(mut self) -> Self {
        self.truncate_udp = true;
        self
    }

    pub fn with_wrong_id(mut self) -> Self {
        self.wrong_id = true;
        self
    }
}

type Zone = Arc<HashMap<String, MockResponse>>;

/// UDP + TCP DNS server on an ephemeral loopback port. Names without a
/// scripted response get NXDOMAIN.
pub struct MockDnsServer {
    addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    pub async fn start(responses: Vec<(&str, MockResponse)>) -> Result<Self, std::io::Error> {
        let zone: Zone = Arc::new(
            responses
                .into_iter()
                .map(|(name, response)| (zone_key(name), response))
                .collect(),
        );

        let socket = UdpSocket::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = socket.local_addr()?;
        let listener = TcpListener::bind(addr).await?;

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            let mut buf = vec![0u8; 512];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            if let Some(response) = build_response(&zone, &buf[..len], true) {
                                let _ = socket.send_to(&response, peer).await;
                            }
                        }
                    }
                    accepted = listener.accept() => {
                        if let Ok((stream, _)) = accepted {
                            tokio::spawn(serve_tcp(stream, zone.clone()));
                        }
                    }
                }
            }
        });

        Ok(Self {
            addr,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

async fn serve_tcp(mut stream: tokio::net::TcpStream, zone: Zone) {
    let mut len_buf = [0u8; 2];
    if stream.read_exact(&mut len_buf).await.is_err() {
        return;
    }
    let mut query = vec![0u8; u16::from_be_bytes(len_buf) as usize];
    if stream.read_exact(&mut query).await.is_err() {
        return;
    }

    if let Some(response) = build_response(&zone, &query, false) {
        let len = (response.len() as u16).to_be_bytes();
        let _ = stream.write_all(&len).await;
        let _ = stream.write_all(&response).await;
        let _ = stream.flush().await;
    }
}

fn zone_key(name: &str) -> String {
    name.trim_end_matches('.').to_ascii_lowercase()
}

fn build_response(zone: &Zone, query_bytes: &[u8], over_udp: bool) -> Option<Vec<u8>> {
    let query = Message::from_vec(query_bytes).ok()?;
    let qname = query.queries().first()?.name().to_utf8();

    let scripted = zone.get(&zone_key(&qname)).cloned().unwrap_or_else(|| {
        MockResponse::rcode(ResponseCode::NXDomain)
    });
    if scripted.silent {
        return None;
    }

    let id = if scripted.wrong_id {
        query.id().wrapping_add(1)
    } else {
        query.id()
    };

    let mut response = Message::new(id, MessageType::Response, OpCode::Query);
    response.set_recursion_desired(true);
    response.set_recursion_available(true);
    for q in query.queries() {
        response.add_query(q.clone());
    }
    response.set_response_code(scripted.rcode.unwrap_or(ResponseCode::NoError));

    if over_udp && scripted.truncate_udp {
        response.set_truncated(true);
    } else {
        for record in scripted.answers {
            response.add_answer(record);
        }
        for record in scripted.authority {
            response.add_name_server(record);
        }
        for record in scripted.additional {
            response.add_additional(record);
        }
    }

    response.to_vec().ok()
}

fn name(s: &str) -> Name {
    Name::from_str(s).unwrap()
}

pub fn a_record(owner: &str, ip: &str) -> Record {
    let rdata = match ip.parse::<IpAddr>().unwrap() {
        IpAddr::V4(v4) => RData::A(A(v4)),
        IpAddr::V6(v6) => RData::AAAA(AAAA(v6)),
    };
    Record::from_rdata(name(owner), 60, rdata)
}

pub fn cname_record(owner: &str, target: &str) -> Record {
    Record::from_rdata(name(owner), 60, RData::CNAME(CNAME(name(target))))
}

pub fn ns_record(zone: &str, nameserver: &str) -> Record {
    Record::from_rdata(name(zone), 60, RData::NS(NS(name(nameserver))))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_server_answers_scripted_name() {
        let server = MockDnsServer::start(vec![(
            "example.com",
            MockResponse::answer(vec![a_record("example.com.", "93.184.216.34")]),
        )])
        .await
        .unwrap();

        let client = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let mut query = Message::new(0x1234, MessageType::Query, OpCode::Query);
        query.add_query(hickory_proto::op::Query::query(
            name("example.com."),
            hickory_proto::rr::RecordType::A,
        ));
        client
            .send_to(&query.to_vec().unwrap(), server.addr())
            .await
            .unwrap();

        let mut buf = vec![0u8; 512];
        let (len, _) = client.recv_from(&mut buf).await.unwrap();
        let response = Message::from_vec(&buf[..len]).unwrap();

        assert_eq!(response.id(), 0x1234);
        assert_eq!(response.answers().len(), 1);

        server.shutdown();
    }
}
