mod check_reporter;
mod dns_query_client;

pub use check_reporter::CheckReporter;
pub use dns_query_client::{DnsQueryClient, QueryClientFactory};
