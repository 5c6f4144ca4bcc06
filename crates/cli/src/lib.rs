pub mod bootstrap;
pub mod di;
pub mod output;
