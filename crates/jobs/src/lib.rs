pub mod dns_monitor;
pub mod runner;

pub use dns_monitor::DnsMonitorJob;
pub use runner::JobRunner;
