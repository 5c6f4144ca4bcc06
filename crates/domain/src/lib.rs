//! DNS Monitor Domain Layer
pub mod answer;
pub mod check_request;
pub mod check_result;
pub mod config;
pub mod errors;
pub mod plugin_output;

pub use answer::{
    names_match, AnswerSet, RecordKind, RecordPayload, ResolutionOutcome, ResourceRecord,
};
pub use check_request::{
    CheckRequest, NameServer, DEFAULT_EVENT_CLASS, DEFAULT_EVENT_KEY, DNS_PORT,
};
pub use check_result::{CheckResult, EventSeverity, OutcomeKind, Severity};
pub use config::{
    CliOverrides, Config, ConfigError, LoggingConfig, MonitorConfig, ResolverConfig,
};
pub use errors::{DomainError, QueryFailure};
pub use plugin_output::{CheckEvent, PerformanceValue, PluginOutput};
