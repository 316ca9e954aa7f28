pub mod category;
pub mod channel;
pub mod content;
pub mod subscriber;
pub mod types;
