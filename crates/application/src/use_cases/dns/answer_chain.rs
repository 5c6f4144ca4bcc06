//! Answer-chain resolution
//!
//! Turns the records of one DNS response into a single address, following
//! CNAME aliases and NS delegations with a bounded hop budget:
//!
//! 1. AAAA record owned by the queried name
//! 2. A record owned by the queried name
//! 3. CNAME owned by the queried name: follow the aliases inside the answer
//!    set, then re-query the last unresolved target against the same server
//! 4. any NS record: re-query the name against the delegated server
//!
//! Direct answers are always honoured. Every CNAME hop and every follow-up
//! query spends one unit of a single budget shared by the whole chase, so a
//! chase sends at most `max_depth` queries and its worst-case latency is
//! `max_depth` times the client's per-query timeout.

use crate::ports::DnsQueryClient;
use dns_monitor_domain::{AnswerSet, NameServer, RecordKind, ResolutionOutcome, DNS_PORT};
use std::net::IpAddr;
use tracing::debug;

pub const DEFAULT_MAX_DEPTH: u8 = 10;

/// Where walking the aliases of one answer set ended.
enum AliasWalk {
    Resolved(IpAddr),
    /// At least one CNAME was followed and its last target is not in the set.
    Aliased,
    /// The name has neither an address nor a CNAME in the set.
    Unaliased,
    Exhausted,
}

pub struct AnswerChainResolver<'a> {
    client: &'a dyn DnsQueryClient,
    max_depth: u8,
}

impl<'a> AnswerChainResolver<'a> {
    pub fn new(client: &'a dyn DnsQueryClient) -> Self {
        Self {
            client,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    pub fn with_max_depth(mut self, max_depth: u8) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub async fn resolve(&self, answers: &AnswerSet, name: &str) -> ResolutionOutcome {
        let mut budget = self.max_depth;
        let mut name = name.to_string();
        let mut server: Option<NameServer> = None;
        let mut fetched: Option<AnswerSet> = None;

        loop {
            let current = fetched.as_ref().unwrap_or(answers);

            let next_server = match walk_aliases(current, &mut name, &mut budget) {
                AliasWalk::Resolved(ip) => return ResolutionOutcome::Resolved(ip),
                AliasWalk::Exhausted => {
                    debug!(name = %name, "Chain depth exhausted");
                    return ResolutionOutcome::NotFound;
                }
                AliasWalk::Aliased => server.clone(),
                AliasWalk::Unaliased => match delegated_server(current, server.as_ref()) {
                    Some(delegated) => {
                        debug!(name = %name, server = %delegated, budget, "Following delegation");
                        Some(delegated)
                    }
                    None => return ResolutionOutcome::NotFound,
                },
            };

            if budget == 0 {
                debug!(name = %name, "Chain depth exhausted");
                return ResolutionOutcome::NotFound;
            }
            budget -= 1;

            match self.client.lookup(&name, next_server.as_ref()).await {
                Ok(next) => {
                    fetched = Some(next);
                    server = next_server;
                }
                Err(e) => {
                    debug!(name = %name, error = %e, "Follow-up lookup failed");
                    return ResolutionOutcome::NotFound;
                }
            }
        }
    }
}

/// Follows CNAMEs inside one answer set, renaming `name` to each target.
fn walk_aliases(answers: &AnswerSet, name: &mut String, budget: &mut u8) -> AliasWalk {
    let mut aliased = false;
    loop {
        let direct = answers
            .address_for(name.as_str(), RecordKind::AAAA)
            .or_else(|| answers.address_for(name.as_str(), RecordKind::A));
        if let Some(ip) = direct {
            return AliasWalk::Resolved(ip);
        }

        let Some(target) = answers.cname_target(name.as_str()) else {
            return if aliased {
                AliasWalk::Aliased
            } else {
                AliasWalk::Unaliased
            };
        };
        if *budget == 0 {
            return AliasWalk::Exhausted;
        }
        *budget -= 1;

        debug!(name = %name, target, budget = *budget, "Following CNAME");
        *name = target.to_string();
        aliased = true;
    }
}

/// The next server for a delegation, preferring a glue address.
fn delegated_server(answers: &AnswerSet, server: Option<&NameServer>) -> Option<NameServer> {
    let nameserver = answers.delegation()?.target()?;
    let port = server.map_or(DNS_PORT, |s| s.port);
    Some(match answers.glue_for(nameserver) {
        Some(glue) => NameServer::new(&glue.to_string(), port),
        None => NameServer::new(nameserver, port),
    })
}
