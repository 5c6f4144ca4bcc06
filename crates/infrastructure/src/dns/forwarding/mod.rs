pub mod message_builder;
pub mod record_map;
pub mod response_parser;

pub use message_builder::MessageBuilder;
pub use record_map::RecordMapper;
pub use response_parser::{DnsResponse, ResponseParser};
