use contract_api::{utils::to_base_units, ContractClient, Token};

use log::debug;

use purity_data::{category::CategoryRecord, types::Address};

use crate::{
    categories::CategoryDirectory,
    channel::Channel,
    config::Config,
    errors::Error,
    responses::{decode, UintResponse},
};

/// The Purity registry; channels by name and by category.
pub struct ChannelRegistry<C> {
    client: C,
    config: Config,
    directory: CategoryDirectory<C>,
}

impl<C> ChannelRegistry<C>
where
    C: ContractClient + Clone,
{
    pub fn new(client: C, config: Config) -> Result<Self, Error> {
        config.validate()?;

        let directory = CategoryDirectory::new(
            client.clone(),
            config.registry_address,
            config.category_page_size,
        )?;

        Ok(Self {
            client,
            config,
            directory,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Current user's address.
    pub fn user(&self) -> Address {
        self.client.sender()
    }

    /// Initialized channel registered under this name.
    pub async fn resolve_channel(&self, name: &str) -> Result<Channel<C>, Error> {
        let value = self
            .client
            .read(
                self.config.registry_address,
                "getChannelAddressFromName",
                &[Token::text(name)],
            )
            .await?;

        let address: Address = decode(value)?;

        if address.is_zero() {
            return Err(Error::NotFound(name.to_owned()));
        }

        debug!("Registry: channel {:?} at {}", name, address);

        self.channel_at(address).await
    }

    /// Initialized channel at this contract address.
    pub async fn channel_at(&self, address: Address) -> Result<Channel<C>, Error> {
        let mut channel =
            Channel::new(self.client.clone(), address, self.config.content_page_size)?;

        channel.initialize().await?;

        Ok(channel)
    }

    /// Price in ether, period in seconds.
    pub fn create_channel_payload(
        &self,
        name: &str,
        topic: &str,
        subscription_price: &str,
        subscription_period: u64,
        permit_external_subscriptions: bool,
        description: &str,
    ) -> Result<String, Error> {
        let args = [
            Token::text(name),
            Token::text(topic),
            Token::from(to_base_units(subscription_price)?),
            Token::from(subscription_period),
            Token::from(permit_external_subscriptions),
            Token::from(description.to_owned()),
        ];

        Ok(self
            .client
            .build_payload(self.config.registry_address, "createContentChannel", &args)?)
    }

    /// Addresses of up to `size` channels of a category, starting at a channel id.
    pub async fn list_channel_addresses_in_category(
        &self,
        category: &str,
        from_channel_id: u64,
        size: usize,
    ) -> Result<Vec<Address>, Error> {
        let args = [
            Token::text(category),
            Token::from(from_channel_id),
            Token::from(size as u64),
        ];

        let value = self
            .client
            .read(
                self.config.registry_address,
                "getChannelsFromCategories",
                &args,
            )
            .await?;

        decode(value)
    }

    /// Same as [`ChannelRegistry::list_channel_addresses_in_category`] with the configured window size.
    pub async fn list_channel_addresses(
        &self,
        category: &str,
        from_channel_id: u64,
    ) -> Result<Vec<Address>, Error> {
        self.list_channel_addresses_in_category(
            category,
            from_channel_id,
            self.config.channel_page_size,
        )
        .await
    }

    /// Percentage kept by the registry on withdrawals.
    pub async fn withdraw_fee_percent(&self) -> Result<u64, Error> {
        let value = self
            .client
            .read(self.config.registry_address, "withdrawFeePercent", &[])
            .await?;

        let UintResponse(fee) = decode(value)?;

        Ok(fee)
    }

    pub fn categories(&self) -> &[CategoryRecord] {
        self.directory.categories()
    }

    pub fn has_more_categories(&self) -> bool {
        self.directory.has_more()
    }

    pub async fn fetch_categories(&mut self) -> Result<(), Error> {
        self.directory.fetch_next_page().await
    }

    pub fn request_more_categories(&mut self) {
        self.directory.request_more()
    }

    pub fn reset_categories(&mut self) {
        self.directory.reset()
    }

    pub async fn category_length(&self, topic: &str) -> Result<u64, Error> {
        self.directory.category_length(topic).await
    }
}
