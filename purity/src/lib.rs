pub mod categories;
pub mod channel;
pub mod config;
pub mod cursor;
pub mod errors;
pub mod registry;
pub mod responses;

pub use categories::CategoryDirectory;
pub use channel::{Channel, ChannelEvent};
pub use config::Config;
pub use errors::Error;
pub use registry::ChannelRegistry;

pub use contract_api;
pub use purity_data;
