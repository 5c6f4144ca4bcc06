use super::record_map::RecordMapper;
use dns_monitor_domain::{AnswerSet, QueryFailure};
use hickory_proto::op::{Message, ResponseCode};
use tracing::debug;

/// A decoded response, reduced to what a health check inspects.
#[derive(Debug, Clone)]
pub struct DnsResponse {
    pub id: u16,

    pub rcode: ResponseCode,

    pub truncated: bool,

    /// Answer, authority and additional sections, in that order
    pub answers: AnswerSet,
}

pub struct ResponseParser;

impl ResponseParser {
    /// Decode wire bytes received from `server`. Undecodable bytes are an
    /// `InvalidResponse` failure attributed to that server.
    pub fn parse(response_bytes: &[u8], server: &str) -> Result<DnsResponse, QueryFailure> {
        let message = Message::from_vec(response_bytes).map_err(|e| QueryFailure::InvalidResponse {
            server: server.to_string(),
            reason: format!("Failed to parse DNS response: {}", e),
        })?;

        let answers = AnswerSet::from_sections(
            RecordMapper::to_resource_records(message.answers()),
            RecordMapper::to_resource_records(message.name_servers()),
            RecordMapper::to_resource_records(message.additionals()),
        );

        let response = DnsResponse {
            id: message.id(),
            rcode: message.response_code(),
            truncated: message.truncated(),
            answers,
        };

        debug!(
            server = %server,
            rcode = ?response.rcode,
            records = response.answers.len(),
            truncated = response.truncated,
            "DNS response parsed"
        );

        Ok(response)
    }

    pub fn rcode_to_status(rcode: ResponseCode) -> &'static str {
        match rcode {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::NXDomain => "NXDOMAIN",
            ResponseCode::ServFail => "SERVFAIL",
            ResponseCode::Refused => "REFUSED",
            ResponseCode::NotImp => "NOTIMP",
            ResponseCode::FormErr => "FORMERR",
            ResponseCode::YXDomain => "YXDOMAIN",
            ResponseCode::YXRRSet => "YXRRSET",
            ResponseCode::NXRRSet => "NXRRSET",
            ResponseCode::NotAuth => "NOTAUTH",
            ResponseCode::NotZone => "NOTZONE",
            _ => "UNKNOWN",
        }
    }
}
