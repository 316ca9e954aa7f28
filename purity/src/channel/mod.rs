mod content;
mod events;

pub use events::ChannelEvent;

use std::{collections::HashMap, time::Duration};

use chrono::{DateTime, TimeZone, Utc};

use contract_api::{
    errors::Error as ContractError,
    events::SubscriptionHandle,
    utils::{hex_to_bytes, to_base_units},
    ContractClient, Token,
};

use k256::{elliptic_curve::sec1::ToEncodedPoint, PublicKey};

use log::{debug, warn};

use purity_data::{
    channel::ChannelMetadata,
    content::{ContentRecord, ContentType, FileProtocol, ALL_LABEL},
    subscriber::{SerializedPublicKey, SubscriberRecord},
    types::Address,
};

use crate::{
    cursor::PaginationCursor,
    errors::Error,
    responses::{decode, ChannelDataResponse, SubscribersResponse, UintResponse},
};

/// Local mirror of one content channel contract.
///
/// Every method that changes local state takes `&mut self`; one call at a time per channel.
///
/// Listeners registered through this channel must be removed with
/// [`Channel::unsubscribe_all`] before it is dropped.
pub struct Channel<C> {
    client: C,
    address: Address,

    /// Set by initialization only.
    metadata: Option<ChannelMetadata>,

    /// Seconds a subscription lasts.
    period: Option<u64>,

    subscribers: Vec<SubscriberRecord>,

    /// Labels known to the contract, without "All".
    content_labels: Vec<String>,

    /// Label to content storage indices, never invalidated implicitly.
    label_indexes: HashMap<String, Vec<u64>>,

    active_label: String,
    contents: Vec<ContentRecord>,

    /// Position is the next page number.
    content_cursor: PaginationCursor,

    subscriptions: Vec<SubscriptionHandle>,
}

impl<C> PartialEq for Channel<C> {
    fn eq(&self, other: &Self) -> bool {
        self.address == other.address
    }
}

impl<C> Channel<C>
where
    C: ContractClient,
{
    /// Uninitialized channel, see [`Channel::initialize`].
    pub fn new(client: C, address: Address, content_page_size: usize) -> Result<Self, Error> {
        Ok(Self {
            client,
            address,
            metadata: None,
            period: None,
            subscribers: Vec::new(),
            content_labels: Vec::new(),
            label_indexes: HashMap::new(),
            active_label: ALL_LABEL.to_owned(),
            contents: Vec::with_capacity(content_page_size),
            content_cursor: PaginationCursor::new(content_page_size)?,
            subscriptions: Vec::new(),
        })
    }

    /// Channel initialized from data the caller already has, without reading the contract.
    ///
    /// Fields left at their defaults can be refreshed individually.
    pub fn with_metadata(
        client: C,
        address: Address,
        content_page_size: usize,
        metadata: ChannelMetadata,
    ) -> Result<Self, Error> {
        let mut channel = Self::new(client, address, content_page_size)?;

        debug!("Channel {}: {:?} known in advance", address, metadata.name);

        channel.metadata = Some(metadata);

        Ok(channel)
    }

    pub fn address(&self) -> Address {
        self.address
    }

    /// Read all channel data at once.
    pub async fn initialize(&mut self) -> Result<(), Error> {
        let value = self.client.read(self.address, "getChannelData", &[]).await?;

        let response: ChannelDataResponse = decode(value)?;
        let metadata = ChannelMetadata::try_from(response)?;

        debug!("Channel {}: {:?} initialized", self.address, metadata.name);

        self.metadata = Some(metadata);

        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.metadata.is_some()
    }

    pub fn metadata(&self) -> Result<&ChannelMetadata, Error> {
        self.metadata.as_ref().ok_or(Error::Precondition("read metadata"))
    }

    fn metadata_mut(&mut self, operation: &'static str) -> Result<&mut ChannelMetadata, Error> {
        self.metadata.as_mut().ok_or(Error::Precondition(operation))
    }

    async fn read_uint(&self, method: &str, args: &[Token]) -> Result<u64, Error> {
        let value = self.client.read(self.address, method, args).await?;

        let UintResponse(uint) = decode(value)?;

        Ok(uint)
    }

    pub async fn fetch_description(&mut self) -> Result<(), Error> {
        self.metadata_mut("fetch description")?;

        let value = self.client.read(self.address, "description", &[]).await?;
        let description: String = decode(value)?;

        self.metadata_mut("fetch description")?.description = description;

        Ok(())
    }

    pub async fn fetch_channel_id(&mut self) -> Result<(), Error> {
        self.metadata_mut("fetch channel id")?;

        let id = self.read_uint("channelId", &[]).await?;

        self.metadata_mut("fetch channel id")?.id = id;

        Ok(())
    }

    pub async fn fetch_subscription_count(&mut self) -> Result<(), Error> {
        self.metadata_mut("fetch subscription count")?;

        let count = self.read_uint("getSubscriptionCount", &[]).await?;

        self.metadata_mut("fetch subscription count")?.subscription_count = count;

        Ok(())
    }

    /// Refresh how long a subscription lasts.
    pub async fn fetch_period_time(&mut self) -> Result<(), Error> {
        let period = self.read_uint("period", &[]).await?;

        self.period = Some(period);

        Ok(())
    }

    /// Refresh the current user's premium deadline.
    ///
    /// Absent if the contract has no record of the user.
    pub async fn fetch_subscription_deadline(&mut self) -> Result<(), Error> {
        self.metadata_mut("fetch subscription deadline")?;

        let user = self.client.sender();

        let deadline = match self.read_uint("premiumDeadlines", &[Token::from(user)]).await {
            Ok(deadline) => deadline,
            Err(Error::Contract(ContractError::NoRecord)) => {
                warn!("Channel {}: no subscription record for {}", self.address, user);
                0
            }
            Err(e) => return Err(e),
        };

        self.metadata_mut("fetch subscription deadline")?
            .subscription_deadline = (deadline > 0).then_some(deadline);

        Ok(())
    }

    /// Current user's subscription deadline.
    pub fn subscription_deadline(&self) -> Result<Option<DateTime<Utc>>, Error> {
        let deadline = self.metadata()?.subscription_deadline.and_then(|secs| {
            let secs = i64::try_from(secs).ok()?;

            Utc.timestamp_opt(secs, 0).single()
        });

        Ok(deadline)
    }

    pub fn is_subscribed(&self, now: DateTime<Utc>) -> Result<bool, Error> {
        Ok(self
            .subscription_deadline()?
            .map_or(false, |deadline| deadline > now))
    }

    /// How long a subscription lasts, once fetched.
    pub fn subscription_period(&self) -> Option<Duration> {
        self.period.map(Duration::from_secs)
    }

    pub fn subscribers(&self) -> &[SubscriberRecord] {
        &self.subscribers
    }

    pub fn clear_subscribers(&mut self) {
        self.subscribers.clear();
    }

    /// Fetch every subscriber and their public key.
    ///
    /// Appends to the roster; clear it first to refetch.
    /// One undecodable key fails the whole fetch.
    pub async fn fetch_subscribers_with_keys(&mut self) -> Result<(), Error> {
        let value = self
            .client
            .read(self.address, "getSubscribersWithKeys", &[])
            .await?;

        let SubscribersResponse {
            subscribers,
            pub_key_prefixes,
            pub_keys,
        } = decode(value)?;

        if subscribers.len() != pub_key_prefixes.len() || subscribers.len() != pub_keys.len() {
            return Err(Error::Roster);
        }

        let roster = subscribers
            .into_iter()
            .zip(pub_key_prefixes)
            .zip(pub_keys)
            .map(|((address, odd_prefix), key)| {
                let decompressed_public_key = decompress_public_key(odd_prefix, &key)?;

                Ok(SubscriberRecord {
                    address,
                    decompressed_public_key,
                })
            })
            .collect::<Result<Vec<_>, Error>>()?;

        debug!(
            "Channel {}: {} subscribers fetched",
            self.address,
            roster.len()
        );

        self.subscribers.extend(roster);

        Ok(())
    }

    pub fn set_description_payload(&self, description: &str) -> Result<String, Error> {
        let args = [Token::from(description.to_owned())];

        Ok(self
            .client
            .build_payload(self.address, "setDescription", &args)?)
    }

    /// Subscribe the current user, registering their key for premium content encryption.
    pub fn subscribe_payload(&self, public_key: &SerializedPublicKey) -> Result<String, Error> {
        let args = [
            Token::from(public_key.odd_prefix),
            Token::Bytes(public_key.key.to_vec()),
        ];

        Ok(self.client.build_payload(self.address, "subscribe", &args)?)
    }

    /// Price in ether.
    pub fn set_subscription_price_payload(&self, price: &str) -> Result<String, Error> {
        let args = [Token::from(to_base_units(price)?)];

        Ok(self
            .client
            .build_payload(self.address, "setSubscriptionPrice", &args)?)
    }

    pub fn withdraw_balance_payload(&self) -> Result<String, Error> {
        Ok(self
            .client
            .build_payload(self.address, "withdrawBalance", &[])?)
    }

    pub async fn estimate_gas_for_withdraw(&self) -> Result<u64, Error> {
        Ok(self
            .client
            .estimate_cost(self.address, "withdrawBalance", &[])
            .await?)
    }

    pub fn upload_content_payload(
        &self,
        batched_links: &str,
        protocol: FileProtocol,
        content_type: ContentType,
        summary: &str,
        label: &str,
    ) -> Result<String, Error> {
        let args = [
            Token::from(protocol as u64),
            Token::from(batched_links.to_owned()),
            Token::from(content_type as u64),
            Token::from(summary.to_owned()),
            Token::text(label),
        ];

        Ok(self
            .client
            .build_payload(self.address, "uploadSubscriberContent", &args)?)
    }
}

impl<C> Drop for Channel<C> {
    fn drop(&mut self) {
        if !self.subscriptions.is_empty() {
            warn!(
                "Channel {}: dropped with {} live listeners",
                self.address,
                self.subscriptions.len()
            );
        }
    }
}

/// Hex encoded uncompressed SEC1 point of a compressed key.
fn decompress_public_key(odd_prefix: bool, key_hex: &str) -> Result<String, Error> {
    let bytes = hex_to_bytes(key_hex)?;

    let key: [u8; 32] = bytes
        .as_slice()
        .try_into()
        .map_err(|_| k256::elliptic_curve::Error)?;

    let serialized = SerializedPublicKey { odd_prefix, key };

    let public_key = PublicKey::from_sec1_bytes(&serialized.to_sec1_bytes())?;

    Ok(hex::encode(public_key.to_encoded_point(false)))
}
