mod mock_dns;

pub use mock_dns::*;
