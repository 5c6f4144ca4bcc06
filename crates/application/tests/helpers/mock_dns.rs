#![allow(dead_code)]

use async_trait::async_trait;
use dns_monitor_application::ports::{CheckReporter, DnsQueryClient, QueryClientFactory};
use dns_monitor_domain::{
    names_match, AnswerSet, CheckResult, DomainError, NameServer, QueryFailure, ResourceRecord,
};
use std::net::IpAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub const DEFAULT_SERVER: &str = "10.0.0.53";

type Reply = Result<AnswerSet, QueryFailure>;

/// Scripted query client. Replies are matched on (name, server host);
/// a `None` server matches lookups against the client's own servers.
#[derive(Clone)]
pub struct MockQueryClient {
    label: String,
    replies: Arc<Mutex<Vec<(String, Option<String>, Reply)>>>,
    calls: Arc<Mutex<Vec<(String, Option<String>)>>>,
}

impl MockQueryClient {
    pub fn new() -> Self {
        Self::with_label(DEFAULT_SERVER)
    }

    pub fn with_label(label: &str) -> Self {
        Self {
            label: label.to_string(),
            replies: Arc::new(Mutex::new(Vec::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn reply(&self, name: &str, answers: AnswerSet) -> &Self {
        self.push(name, None, Ok(answers))
    }

    pub fn reply_via(&self, name: &str, server: &str, answers: AnswerSet) -> &Self {
        self.push(name, Some(server), Ok(answers))
    }

    pub fn fail(&self, name: &str, failure: QueryFailure) -> &Self {
        self.push(name, None, Err(failure))
    }

    fn push(&self, name: &str, server: Option<&str>, reply: Reply) -> &Self {
        self.replies.lock().unwrap().push((
            name.to_string(),
            server.map(str::to_string),
            reply,
        ));
        self
    }

    pub fn calls(&self) -> Vec<(String, Option<String>)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl Default for MockQueryClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DnsQueryClient for MockQueryClient {
    async fn lookup(
        &self,
        name: &str,
        server: Option<&NameServer>,
    ) -> Result<AnswerSet, QueryFailure> {
        let server_host = server.map(|s| s.host.to_string());
        self.calls
            .lock()
            .unwrap()
            .push((name.to_string(), server_host.clone()));

        let replies = self.replies.lock().unwrap();
        replies
            .iter()
            .find(|(n, s, _)| names_match(n, name) && *s == server_host)
            .map(|(_, _, reply)| reply.clone())
            .unwrap_or_else(|| {
                Err(QueryFailure::NameNotFound {
                    server: server_host.unwrap_or_else(|| self.label.clone()),
                })
            })
    }

    fn server_label(&self) -> String {
        self.label.clone()
    }
}

/// Hands out the same scripted client for every check, or a fixed error.
pub struct MockClientFactory {
    client: MockQueryClient,
    error: Option<DomainError>,
    requested: Mutex<Vec<(Option<String>, Duration)>>,
}

impl MockClientFactory {
    pub fn new(client: MockQueryClient) -> Self {
        Self {
            client,
            error: None,
            requested: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(error: DomainError) -> Self {
        Self {
            client: MockQueryClient::new(),
            error: Some(error),
            requested: Mutex::new(Vec::new()),
        }
    }

    pub fn requested(&self) -> Vec<(Option<String>, Duration)> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl QueryClientFactory for MockClientFactory {
    async fn create(
        &self,
        dns_server: Option<&str>,
        timeout: Duration,
    ) -> Result<Arc<dyn DnsQueryClient>, DomainError> {
        self.requested
            .lock()
            .unwrap()
            .push((dns_server.map(str::to_string), timeout));

        if let Some(error) = &self.error {
            return Err(error.clone());
        }
        Ok(Arc::new(self.client.clone()))
    }
}

#[derive(Default)]
pub struct MockReporter {
    reported: Mutex<Vec<CheckResult>>,
}

impl MockReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reported(&self) -> Vec<CheckResult> {
        self.reported.lock().unwrap().clone()
    }
}

impl CheckReporter for MockReporter {
    fn report(&self, result: &CheckResult) {
        self.reported.lock().unwrap().push(result.clone());
    }
}

pub fn ip(s: &str) -> IpAddr {
    s.parse().unwrap()
}

pub fn a(name: &str, addr: &str) -> ResourceRecord {
    ResourceRecord::address(name, ip(addr))
}

pub fn cname(name: &str, target: &str) -> ResourceRecord {
    ResourceRecord::cname(name, target)
}

pub fn ns(zone: &str, nameserver: &str) -> ResourceRecord {
    ResourceRecord::ns(zone, nameserver)
}

pub fn answers(records: Vec<ResourceRecord>) -> AnswerSet {
    AnswerSet::new(records)
}

/// `host0 -> host1 -> ... -> host{hops}` with an A record at the end.
pub fn cname_chain(hops: usize, final_ip: &str) -> AnswerSet {
    let mut records: Vec<ResourceRecord> = (0..hops)
        .map(|i| cname(&format!("host{}.example", i), &format!("host{}.example", i + 1)))
        .collect();
    records.push(a(&format!("host{}.example", hops), final_ip));
    AnswerSet::new(records)
}
