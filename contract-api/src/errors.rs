use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Transport: {0}")]
    Transport(String),

    /// The contract holds no value for the requested key.
    #[error("Contract: no record")]
    NoRecord,

    #[error("Serde: {0}")]
    Serde(#[from] serde_json::error::Error),

    #[error("Hex: {0}")]
    Hex(#[from] hex::FromHexError),

    #[error("UTF-8: {0}")]
    FromUtf8(#[from] std::string::FromUtf8Error),

    #[error("Units: cannot convert {0:?}")]
    Units(String),
}

impl Error {
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }
}
