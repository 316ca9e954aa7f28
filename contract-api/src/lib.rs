pub mod errors;
pub mod events;
pub mod utils;

use async_trait::async_trait;

use errors::Error;

use events::{EventCallback, SubscriptionHandle};

pub use purity_data::types::{Address, BlockNumber};

use serde::{Deserialize, Serialize};

use serde_json::Value;

type Result<T> = std::result::Result<T, Error>;

/// Contract call argument.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Address(Address),
    Bytes(Vec<u8>),
    Uint(u128),
    Bool(bool),
    String(String),
}

impl Token {
    /// Text passed as raw bytes, as fixed size byte array parameters expect.
    pub fn text(text: &str) -> Self {
        Self::Bytes(text.as_bytes().to_vec())
    }
}

impl From<Address> for Token {
    fn from(addr: Address) -> Self {
        Self::Address(addr)
    }
}

impl From<bool> for Token {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<u64> for Token {
    fn from(value: u64) -> Self {
        Self::Uint(value.into())
    }
}

impl From<u128> for Token {
    fn from(value: u128) -> Self {
        Self::Uint(value)
    }
}

impl From<String> for Token {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

/// Everything the SDK needs from a node connection.
///
/// Encoding, the wire protocol and the sender's identity are the
/// implementor's business.
///
/// Reads return the node's JSON: unsigned integers as decimal strings,
/// byte strings as `0x` hex and tuples as objects keyed by output name.
#[async_trait(?Send)]
pub trait ContractClient {
    /// Call a view method.
    async fn read(&self, contract: Address, method: &str, args: &[Token]) -> Result<Value>;

    /// ABI encode a state changing call for later submission.
    fn build_payload(&self, contract: Address, method: &str, args: &[Token]) -> Result<String>;

    /// Gas needed for a call sent by the current user.
    async fn estimate_cost(&self, contract: Address, method: &str, args: &[Token]) -> Result<u64>;

    /// Register a live listener for a contract event.
    async fn subscribe(
        &self,
        contract: Address,
        event: &str,
        from_block: BlockNumber,
        callback: EventCallback,
    ) -> Result<SubscriptionHandle>;

    /// Stop a listener. Unknown handles are ignored.
    fn unsubscribe(&self, handle: SubscriptionHandle);

    /// Last block seen by the node.
    fn last_block_number(&self) -> BlockNumber;

    /// Current user's address.
    fn sender(&self) -> Address;
}
