use std::fmt;
use std::net::IpAddr;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    A,
    AAAA,
    CNAME,
    NS,
    Other,
}

impl RecordKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::A => "A",
            RecordKind::AAAA => "AAAA",
            RecordKind::CNAME => "CNAME",
            RecordKind::NS => "NS",
            RecordKind::Other => "OTHER",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordPayload {
    Address(IpAddr),
    Target(Arc<str>),
    Opaque,
}

/// One record from a DNS response, reduced to what chain resolution needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRecord {
    pub name: Arc<str>,
    pub kind: RecordKind,
    pub payload: RecordPayload,
}

impl ResourceRecord {
    pub fn address(name: &str, ip: IpAddr) -> Self {
        let kind = match ip {
            IpAddr::V4(_) => RecordKind::A,
            IpAddr::V6(_) => RecordKind::AAAA,
        };
        Self {
            name: Arc::from(name),
            kind,
            payload: RecordPayload::Address(ip),
        }
    }

    pub fn cname(name: &str, target: &str) -> Self {
        Self {
            name: Arc::from(name),
            kind: RecordKind::CNAME,
            payload: RecordPayload::Target(Arc::from(target)),
        }
    }

    pub fn ns(zone: &str, nameserver: &str) -> Self {
        Self {
            name: Arc::from(zone),
            kind: RecordKind::NS,
            payload: RecordPayload::Target(Arc::from(nameserver)),
        }
    }

    pub fn other(name: &str) -> Self {
        Self {
            name: Arc::from(name),
            kind: RecordKind::Other,
            payload: RecordPayload::Opaque,
        }
    }

    pub fn ip(&self) -> Option<IpAddr> {
        match self.payload {
            RecordPayload::Address(ip) => Some(ip),
            _ => None,
        }
    }

    pub fn target(&self) -> Option<&str> {
        match &self.payload {
            RecordPayload::Target(target) => Some(target),
            _ => None,
        }
    }

    pub fn answers_for(&self, name: &str) -> bool {
        names_match(&self.name, name)
    }
}

/// DNS names compare case-insensitively, with or without the root dot.
pub fn names_match(a: &str, b: &str) -> bool {
    a.trim_end_matches('.')
        .eq_ignore_ascii_case(b.trim_end_matches('.'))
}

/// Answer, authority and additional records of one response, in that order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerSet {
    records: Vec<ResourceRecord>,
}

impl AnswerSet {
    pub fn new(records: Vec<ResourceRecord>) -> Self {
        Self { records }
    }

    pub fn from_sections(
        answers: Vec<ResourceRecord>,
        authority: Vec<ResourceRecord>,
        additional: Vec<ResourceRecord>,
    ) -> Self {
        let mut records = answers;
        records.extend(authority);
        records.extend(additional);
        Self { records }
    }

    pub fn records(&self) -> &[ResourceRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// First record of `kind` owned by `name`.
    pub fn find(&self, name: &str, kind: RecordKind) -> Option<&ResourceRecord> {
        self.records
            .iter()
            .find(|r| r.kind == kind && r.answers_for(name))
    }

    pub fn address_for(&self, name: &str, kind: RecordKind) -> Option<IpAddr> {
        self.find(name, kind).and_then(ResourceRecord::ip)
    }

    pub fn cname_target(&self, name: &str) -> Option<&str> {
        self.find(name, RecordKind::CNAME)
            .and_then(ResourceRecord::target)
    }

    /// First delegation record anywhere in the set, regardless of owner.
    pub fn delegation(&self) -> Option<&ResourceRecord> {
        self.records.iter().find(|r| r.kind == RecordKind::NS)
    }

    /// Glue address for a nameserver, IPv4 before IPv6.
    pub fn glue_for(&self, nameserver: &str) -> Option<IpAddr> {
        self.address_for(nameserver, RecordKind::A)
            .or_else(|| self.address_for(nameserver, RecordKind::AAAA))
    }
}

impl FromIterator<ResourceRecord> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = ResourceRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionOutcome {
    Resolved(IpAddr),
    NotFound,
}

impl ResolutionOutcome {
    pub fn address(&self) -> Option<IpAddr> {
        match self {
            Self::Resolved(ip) => Some(*ip),
            Self::NotFound => None,
        }
    }
}

impl From<Option<IpAddr>> for ResolutionOutcome {
    fn from(value: Option<IpAddr>) -> Self {
        value.map_or(Self::NotFound, Self::Resolved)
    }
}
