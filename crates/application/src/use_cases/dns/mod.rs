pub mod answer_chain;
pub mod classify;
pub mod run_check;

pub use answer_chain::{AnswerChainResolver, DEFAULT_MAX_DEPTH};
pub use classify::{addresses_match, OutcomeClassifier};
pub use run_check::RunDnsCheckUseCase;
