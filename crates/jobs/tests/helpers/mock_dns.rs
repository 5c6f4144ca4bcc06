#![allow(dead_code)]

use async_trait::async_trait;
use dns_monitor_application::ports::{CheckReporter, DnsQueryClient, QueryClientFactory};
use dns_monitor_application::use_cases::{CollectDnsMonitorUseCase, RunDnsCheckUseCase};
use dns_monitor_domain::{
    AnswerSet, CheckResult, DomainError, MonitorConfig, NameServer, QueryFailure, ResourceRecord,
};
use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Answers each hostname with a fixed address; unknown names are NXDOMAIN.
pub struct StaticQueryClient {
    addresses: HashMap<String, IpAddr>,
    call_count: Arc<AtomicU64>,
}

#[async_trait]
impl DnsQueryClient for StaticQueryClient {
    async fn lookup(
        &self,
        name: &str,
        _server: Option<&NameServer>,
    ) -> Result<AnswerSet, QueryFailure> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        match self.addresses.get(name) {
            Some(ip) => Ok(AnswerSet::new(vec![ResourceRecord::address(name, *ip)])),
            None => Err(QueryFailure::NameNotFound {
                server: "10.0.0.53".to_string(),
            }),
        }
    }

    fn server_label(&self) -> String {
        "10.0.0.53".to_string()
    }
}

pub struct StaticClientFactory {
    addresses: HashMap<String, IpAddr>,
    call_count: Arc<AtomicU64>,
}

impl StaticClientFactory {
    pub fn new(addresses: &[(&str, &str)]) -> Self {
        Self {
            addresses: addresses
                .iter()
                .map(|(name, ip)| (name.to_string(), ip.parse().unwrap()))
                .collect(),
            call_count: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn lookups(&self) -> u64 {
        self.call_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl QueryClientFactory for StaticClientFactory {
    async fn create(
        &self,
        _dns_server: Option<&str>,
        _timeout: Duration,
    ) -> Result<Arc<dyn DnsQueryClient>, DomainError> {
        Ok(Arc::new(StaticQueryClient {
            addresses: self.addresses.clone(),
            call_count: self.call_count.clone(),
        }))
    }
}

#[derive(Default)]
pub struct RecordingReporter {
    reported: Mutex<Vec<CheckResult>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> usize {
        self.reported.lock().unwrap().len()
    }

    pub fn hostnames(&self) -> Vec<String> {
        self.reported
            .lock()
            .unwrap()
            .iter()
            .map(|r| r.hostname.to_string())
            .collect()
    }
}

impl CheckReporter for RecordingReporter {
    fn report(&self, result: &CheckResult) {
        self.reported.lock().unwrap().push(result.clone());
    }
}

pub fn make_collector(
    factory: Arc<StaticClientFactory>,
    reporter: Arc<RecordingReporter>,
) -> Arc<CollectDnsMonitorUseCase> {
    Arc::new(CollectDnsMonitorUseCase::new(
        Arc::new(RunDnsCheckUseCase::new(factory)),
        reporter,
    ))
}

pub fn make_monitor(device: &str, hostname: &str, expected: &str) -> MonitorConfig {
    let mut monitor = MonitorConfig::new(device);
    monitor.hostname = hostname.to_string();
    monitor.expected_ip_address = expected.to_string();
    monitor
}
