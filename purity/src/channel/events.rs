use contract_api::{
    events::{ChannelEventKind, EventCallback, EventLog, SubscriptionHandle},
    ContractClient,
};

use log::{debug, warn};

use purity_data::types::Address;

use crate::errors::Error;

use super::Channel;

/// Delivered to listeners of a channel's contract events.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelEvent {
    pub channel: Address,
    pub kind: ChannelEventKind,
    pub log: EventLog,
}

impl<C> Channel<C>
where
    C: ContractClient,
{
    /// Call `handler` each time someone subscribes to this channel.
    pub async fn subscribe_to_subscription_events<F>(
        &mut self,
        handler: F,
    ) -> Result<SubscriptionHandle, Error>
    where
        F: FnMut(ChannelEvent) + 'static,
    {
        self.listen(ChannelEventKind::SubscriptionHappened, handler)
            .await
    }

    /// Call `handler` each time content is uploaded to this channel.
    pub async fn subscribe_to_new_content_events<F>(
        &mut self,
        handler: F,
    ) -> Result<SubscriptionHandle, Error>
    where
        F: FnMut(ChannelEvent) + 'static,
    {
        self.listen(ChannelEventKind::NewContentUploaded, handler)
            .await
    }

    /// Listen from the last block the node has seen.
    ///
    /// Transport errors are logged; the listener stays registered.
    async fn listen<F>(
        &mut self,
        kind: ChannelEventKind,
        mut handler: F,
    ) -> Result<SubscriptionHandle, Error>
    where
        F: FnMut(ChannelEvent) + 'static,
    {
        let channel = self.address;
        let from_block = self.client.last_block_number();

        let callback: EventCallback = Box::new(move |result| match result {
            Ok(log) => {
                debug!("Channel {}: {} at block {:?}", channel, kind, log.block_number);

                handler(ChannelEvent { channel, kind, log });
            }
            Err(e) => warn!("Channel {}: {} listener error: {}", channel, kind, e),
        });

        let handle = self
            .client
            .subscribe(self.address, &kind.to_string(), from_block, callback)
            .await?;

        debug!(
            "Channel {}: listening to {} from {:?}",
            self.address, kind, from_block
        );

        self.subscriptions.push(handle);

        Ok(handle)
    }

    /// Number of listeners registered and not yet removed.
    pub fn live_subscriptions(&self) -> usize {
        self.subscriptions.len()
    }

    /// Remove every listener of this channel. Safe to call repeatedly.
    pub fn unsubscribe_all(&mut self) {
        for handle in self.subscriptions.drain(..) {
            self.client.unsubscribe(handle);
        }
    }
}
