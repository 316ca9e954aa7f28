use serde::{Deserialize, Serialize};

use strum::{Display, EnumString};

use crate::errors::Error;

/// Events emitted by content channel contracts.
#[derive(Display, EnumString, Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChannelEventKind {
    SubscriptionHappened,
    NewContentUploaded,
}

/// A decoded contract event as delivered by the transport.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct EventLog {
    pub event: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_number: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_hash: Option<String>,

    /// Event arguments, as returned by the node.
    #[serde(default)]
    pub data: serde_json::Value,
}

/// Live listener registered with a contract client.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionHandle(pub u64);

/// Called once per event, or per transport failure, until unsubscribed.
pub type EventCallback = Box<dyn FnMut(Result<EventLog, Error>)>;
