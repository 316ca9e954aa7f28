use serde::{Deserialize, Serialize};

use purity_data::types::Address;

use crate::errors::Error;

/// Where the registry lives and how much to fetch per call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Purity registry contract.
    pub registry_address: Address,

    /// Categories per registry read.
    pub category_page_size: usize,

    /// Content items per page.
    pub content_page_size: usize,

    /// Default window when listing the channels of a category.
    pub channel_page_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            registry_address: Address::ZERO,
            category_page_size: 5,
            content_page_size: 1,
            channel_page_size: 3,
        }
    }
}

impl Config {
    pub fn new(registry_address: Address) -> Self {
        Self {
            registry_address,
            ..Default::default()
        }
    }

    pub fn from_json(json: &str) -> Result<Self, Error> {
        let config: Self = serde_json::from_str(json)?;

        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.category_page_size == 0 {
            return Err(Error::Config("category page size must be greater than zero"));
        }

        if self.content_page_size == 0 {
            return Err(Error::Config("content page size must be greater than zero"));
        }

        if self.channel_page_size == 0 {
            return Err(Error::Config("channel page size must be greater than zero"));
        }

        Ok(())
    }
}
