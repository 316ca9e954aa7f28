use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Contract: {0}")]
    Contract(#[from] contract_api::errors::Error),

    #[error("Serde: {0}")]
    Serde(#[from] serde_json::error::Error),

    #[error("Public key: {0}")]
    Key(#[from] k256::elliptic_curve::Error),

    #[error("Purity: Channel {0:?} does not exist")]
    NotFound(String),

    #[error("Purity: Cannot get length of category {topic:?}: {source}")]
    Lookup {
        topic: String,
        source: contract_api::errors::Error,
    },

    #[error("Purity: Cannot {0} before the channel is initialized")]
    Precondition(&'static str),

    #[error("Purity: Subscriber addresses and keys differ in count")]
    Roster,

    #[error("Purity: Unknown file protocol {0}")]
    UnknownProtocol(u64),

    #[error("Purity: Unknown content type {0}")]
    UnknownContentType(u64),

    #[error("Config: {0}")]
    Config(&'static str),
}
