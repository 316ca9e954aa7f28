use crate::types::Address;

use serde::{Deserialize, Serialize};

/// Channel data mirrored from a content channel contract.
///
/// Amounts are in ether, as decimal strings.
#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq, Eq)]
pub struct ChannelMetadata {
    pub creator: Address,

    pub name: String,

    pub id: u64,

    pub balance: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription_price: Option<String>,

    pub subscription_count: u64,

    pub description: String,

    /// Current user's premium subscription deadline, seconds since the unix epoch.
    ///
    /// Absent when the user never subscribed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription_deadline: Option<u64>,
}
