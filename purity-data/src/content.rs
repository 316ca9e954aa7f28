use num_derive::{FromPrimitive, ToPrimitive};

use serde::{Deserialize, Serialize};

use strum::{Display, EnumString};

/// The label under which every upload of a channel is listed.
pub const ALL_LABEL: &str = "All";

/// Where the uploaded file lives.
#[derive(
    Display,
    EnumString,
    FromPrimitive,
    ToPrimitive,
    Serialize,
    Deserialize,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
)]
#[strum(serialize_all = "UPPERCASE")]
pub enum FileProtocol {
    DNS = 0,
    IPFS = 1,
    IPNS = 2,
}

#[derive(
    Display,
    EnumString,
    FromPrimitive,
    ToPrimitive,
    Serialize,
    Deserialize,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ContentType {
    /// Anything a web browser can open; image, video, etc...
    Undefined = 0,

    Webpage = 1,

    /// Always stored on IPFS
    Premium = 100,

    EncryptedPremium = 101,
}

impl ContentType {
    pub fn is_premium(&self) -> bool {
        matches!(self, Self::Premium | Self::EncryptedPremium)
    }
}

/// One upload of a channel, as stored in its content slot.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ContentRecord {
    pub protocol: FileProtocol,

    pub content_type: ContentType,

    /// Batched links to the file(s).
    pub file_address: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    /// Seconds since the unix epoch.
    pub upload_timestamp: u64,
}
