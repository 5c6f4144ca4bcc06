pub mod resolv_conf;

pub use resolv_conf::{load_nameservers, parse_nameservers, FALLBACK_NAMESERVER};
