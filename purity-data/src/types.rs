use std::fmt::Display;

use serde::{Deserialize, Serialize};
use serde_with::{DeserializeFromStr, SerializeDisplay};

use thiserror::Error;

const ADDRESS_LENGTH: usize = 20;

#[derive(Error, Debug, PartialEq)]
pub enum AddressError {
    #[error("Address: {0}")]
    Hex(#[from] hex::FromHexError),

    #[error("Address: expected 20 bytes, got {0}")]
    Length(usize),
}

/// Ethereum address
#[derive(
    SerializeDisplay,
    DeserializeFromStr,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Hash,
    PartialOrd,
    Ord,
)]
pub struct Address([u8; ADDRESS_LENGTH]);

impl Address {
    /// The address the registry returns for names it does not know.
    pub const ZERO: Address = Address([0; ADDRESS_LENGTH]);

    pub const fn new(bytes: [u8; ADDRESS_LENGTH]) -> Self {
        Self(bytes)
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    pub fn as_bytes(&self) -> &[u8; ADDRESS_LENGTH] {
        &self.0
    }
}

impl From<[u8; ADDRESS_LENGTH]> for Address {
    fn from(bytes: [u8; ADDRESS_LENGTH]) -> Self {
        Self(bytes)
    }
}

impl From<Address> for [u8; ADDRESS_LENGTH] {
    fn from(addr: Address) -> Self {
        addr.0
    }
}

impl core::str::FromStr for Address {
    type Err = AddressError;

    fn from_str(hex_str: &str) -> Result<Self, Self::Err> {
        let hex_str = hex_str
            .strip_prefix("0x")
            .or_else(|| hex_str.strip_prefix("0X"))
            .unwrap_or(hex_str);

        let decoded = hex::decode(hex_str)?;

        let bytes: [u8; ADDRESS_LENGTH] = decoded
            .as_slice()
            .try_into()
            .map_err(|_| AddressError::Length(decoded.len()))?;

        Ok(Self(bytes))
    }
}

impl TryFrom<&str> for Address {
    type Error = AddressError;

    fn try_from(str: &str) -> Result<Self, Self::Error> {
        str.parse()
    }
}

impl TryFrom<String> for Address {
    type Error = AddressError;

    fn try_from(string: String) -> Result<Self, Self::Error> {
        string.parse()
    }
}

impl Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

/// Block from which event listeners start.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum BlockNumber {
    Number(u64),

    #[default]
    Latest,
}

impl From<u64> for BlockNumber {
    fn from(number: u64) -> Self {
        Self::Number(number)
    }
}
