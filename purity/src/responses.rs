use contract_api::utils::{from_base_units, hex_to_utf8};

use num_traits::FromPrimitive;

use purity_data::{
    category::CategoryRecord,
    channel::ChannelMetadata,
    content::{ContentRecord, ContentType, FileProtocol},
    types::Address,
};

use serde::{de::DeserializeOwned, Deserialize};
use serde_with::{serde_as, DisplayFromStr};

use crate::errors::Error;

pub(crate) fn decode<T>(value: serde_json::Value) -> Result<T, Error>
where
    T: DeserializeOwned,
{
    Ok(serde_json::from_value(value)?)
}

/// Single unsigned integer output.
#[serde_as]
#[derive(Debug, Deserialize)]
pub struct UintResponse(#[serde_as(as = "DisplayFromStr")] pub u64);

#[serde_as]
#[derive(Debug, Deserialize)]
pub struct UintListResponse(#[serde_as(as = "Vec<DisplayFromStr>")] pub Vec<u64>);

/// Fixed size byte arrays holding text.
#[derive(Debug, Deserialize)]
pub struct TextListResponse(pub Vec<String>);

impl TryFrom<TextListResponse> for Vec<String> {
    type Error = Error;

    fn try_from(response: TextListResponse) -> Result<Self, Self::Error> {
        response
            .0
            .iter()
            .map(|hex| Ok(hex_to_utf8(hex)?))
            .collect()
    }
}

/// Three parallel arrays; names, channel counts and ids.
#[serde_as]
#[derive(Debug, Deserialize)]
pub struct CategoriesResponse {
    #[serde(rename = "0")]
    pub names: Vec<String>,

    #[serde(rename = "1")]
    #[serde_as(as = "Vec<DisplayFromStr>")]
    pub channel_counts: Vec<u64>,

    #[serde(rename = "2")]
    #[serde_as(as = "Vec<DisplayFromStr>")]
    pub ids: Vec<u64>,
}

impl CategoriesResponse {
    pub fn into_records(self, size: usize) -> Result<Vec<CategoryRecord>, Error> {
        let CategoriesResponse {
            names,
            channel_counts,
            ids,
        } = self;

        names
            .iter()
            .zip(channel_counts)
            .zip(ids)
            .take(size)
            .map(|((name, channel_count), id)| {
                Ok(CategoryRecord {
                    name: hex_to_utf8(name)?,
                    channel_count,
                    id,
                })
            })
            .collect()
    }
}

#[serde_as]
#[derive(Debug, Deserialize)]
pub struct ChannelDataResponse {
    #[serde(rename = "contentCreator_")]
    pub content_creator: Address,

    #[serde(rename = "channelName_")]
    pub channel_name: String,

    #[serde(rename = "channelId_")]
    #[serde_as(as = "DisplayFromStr")]
    pub channel_id: u64,

    /// Wei
    #[serde(rename = "balance_")]
    #[serde_as(as = "DisplayFromStr")]
    pub balance: u128,

    /// Wei
    #[serde(rename = "price_")]
    #[serde_as(as = "Option<DisplayFromStr>")]
    pub price: Option<u128>,

    #[serde(rename = "subscriptionCount_")]
    #[serde_as(as = "DisplayFromStr")]
    pub subscription_count: u64,

    #[serde(rename = "userSubTime_")]
    #[serde_as(as = "DisplayFromStr")]
    pub user_sub_time: u64,

    #[serde(rename = "description_")]
    pub description: String,
}

impl TryFrom<ChannelDataResponse> for ChannelMetadata {
    type Error = Error;

    fn try_from(response: ChannelDataResponse) -> Result<Self, Self::Error> {
        let ChannelDataResponse {
            content_creator,
            channel_name,
            channel_id,
            balance,
            price,
            subscription_count,
            user_sub_time,
            description,
        } = response;

        Ok(Self {
            creator: content_creator,
            name: hex_to_utf8(&channel_name)?,
            id: channel_id,
            balance: from_base_units(balance),
            subscription_price: price.map(from_base_units),
            subscription_count,
            description,
            subscription_deadline: (user_sub_time > 0).then_some(user_sub_time),
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct SubscribersResponse {
    #[serde(rename = "subscribers_")]
    pub subscribers: Vec<Address>,

    #[serde(rename = "pubKeyPrefixes_")]
    pub pub_key_prefixes: Vec<bool>,

    /// Hex encoded x coordinates.
    #[serde(rename = "pubKeys_")]
    pub pub_keys: Vec<String>,
}

#[serde_as]
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentResponse {
    #[serde_as(as = "DisplayFromStr")]
    pub protocol: u64,

    #[serde_as(as = "DisplayFromStr")]
    pub content_type: u64,

    pub file_address: String,

    #[serde(default)]
    pub summary: Option<String>,

    #[serde_as(as = "DisplayFromStr")]
    pub upload_time: u64,
}

impl TryFrom<ContentResponse> for ContentRecord {
    type Error = Error;

    fn try_from(response: ContentResponse) -> Result<Self, Self::Error> {
        let ContentResponse {
            protocol,
            content_type,
            file_address,
            summary,
            upload_time,
        } = response;

        let protocol = FileProtocol::from_u64(protocol).ok_or(Error::UnknownProtocol(protocol))?;

        let content_type =
            ContentType::from_u64(content_type).ok_or(Error::UnknownContentType(content_type))?;

        Ok(Self {
            protocol,
            content_type,
            file_address,
            summary: summary.filter(|summary| !summary.is_empty()),
            upload_timestamp: upload_time,
        })
    }
}
