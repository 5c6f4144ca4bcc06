pub mod dns;
pub mod monitor;

pub use dns::{AnswerChainResolver, OutcomeClassifier, RunDnsCheckUseCase};
pub use monitor::CollectDnsMonitorUseCase;
