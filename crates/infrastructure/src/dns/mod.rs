pub mod client;
pub mod client_factory;
pub mod forwarding;
pub mod transport;

pub use client::HickoryQueryClient;
pub use client_factory::HickoryQueryClientFactory;
