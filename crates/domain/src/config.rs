//! Configuration for DNS Monitor
//!
//! - `root`: main configuration and CLI overrides
//! - `monitor`: one scheduled DNS check per entry
//! - `resolver`: system resolver and chain-following settings
//! - `logging`: logging settings
//! - `errors`: configuration errors

pub mod errors;
pub mod logging;
pub mod monitor;
pub mod resolver;
pub mod root;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use monitor::MonitorConfig;
pub use resolver::ResolverConfig;
pub use root::{CliOverrides, Config};
