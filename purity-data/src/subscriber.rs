use crate::types::Address;

use serde::{Deserialize, Serialize};

/// Compressed secp256k1 public key as the channel contract stores it.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SerializedPublicKey {
    /// True when the SEC1 tag is 0x03 (odd y coordinate).
    pub odd_prefix: bool,

    /// X coordinate.
    pub key: [u8; 32],
}

impl SerializedPublicKey {
    pub fn sec1_tag(&self) -> u8 {
        if self.odd_prefix {
            0x03
        } else {
            0x02
        }
    }

    /// SEC1 compressed encoding.
    pub fn to_sec1_bytes(&self) -> [u8; 33] {
        let mut bytes = [0u8; 33];

        bytes[0] = self.sec1_tag();
        bytes[1..].copy_from_slice(&self.key);

        bytes
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SubscriberRecord {
    pub address: Address,

    /// Hex encoded, SEC1 uncompressed.
    pub decompressed_public_key: String,
}
