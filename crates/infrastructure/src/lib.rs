pub mod dns;
pub mod reporting;
pub mod system;
