use contract_api::{ContractClient, Token};

use log::debug;

use purity_data::content::{ContentRecord, ALL_LABEL};

use crate::{
    errors::Error,
    responses::{decode, ContentResponse, TextListResponse, UintListResponse, UintResponse},
};

use super::Channel;

impl<C> Channel<C>
where
    C: ContractClient,
{
    /// Content fetched so far for the active label, newest first.
    pub fn contents(&self) -> &[ContentRecord] {
        &self.contents
    }

    pub fn has_more_contents(&self) -> bool {
        self.content_cursor.has_more()
    }

    /// Page the next fetch will read.
    pub fn next_content_page(&self) -> u64 {
        self.content_cursor.position()
    }

    pub fn active_label(&self) -> &str {
        &self.active_label
    }

    /// Every label of the channel, "All" first.
    pub fn content_labels(&self) -> Vec<String> {
        std::iter::once(ALL_LABEL.to_owned())
            .chain(self.content_labels.iter().cloned())
            .collect()
    }

    pub async fn fetch_content_labels(&mut self) -> Result<(), Error> {
        let value = self
            .client
            .read(self.address, "getContentLabels", &[])
            .await?;

        let response: TextListResponse = decode(value)?;

        self.content_labels = response.try_into()?;

        Ok(())
    }

    /// Switch label, dropping content fetched so far.
    ///
    /// The label's index is fetched once and then reused.
    pub async fn set_active_label(&mut self, label: &str) -> Result<(), Error> {
        self.active_label = label.to_owned();
        self.contents.clear();
        self.content_cursor.reset();

        if label != ALL_LABEL {
            self.labelled_content_indexes(label).await?;
        }

        debug!("Channel {}: active label {:?}", self.address, label);

        Ok(())
    }

    /// Storage indices of the content uploaded under a label, oldest first.
    pub async fn labelled_content_indexes(&mut self, label: &str) -> Result<&[u64], Error> {
        if !self.label_indexes.contains_key(label) {
            let value = self
                .client
                .read(
                    self.address,
                    "getLabelledContentIndexes",
                    &[Token::text(label)],
                )
                .await?;

            let UintListResponse(indexes) = decode(value)?;

            self.label_indexes.insert(label.to_owned(), indexes);
        }

        Ok(&self.label_indexes[label])
    }

    /// Forget every cached label index, to see uploads made since they were fetched.
    pub fn invalidate_label_indexes(&mut self) {
        self.label_indexes.clear();
    }

    /// Read the content stored at this index.
    pub async fn content(&self, index: u64) -> Result<ContentRecord, Error> {
        let value = self
            .client
            .read(self.address, "subscriberContents", &[Token::from(index)])
            .await?;

        let response: ContentResponse = decode(value)?;

        response.try_into()
    }

    /// Number of content slots under the active label.
    async fn content_total(&mut self) -> Result<u64, Error> {
        if self.active_label == ALL_LABEL {
            let value = self
                .client
                .read(self.address, "getSubscriberContentsLength", &[])
                .await?;

            let UintResponse(length) = decode(value)?;

            return Ok(length);
        }

        let label = self.active_label.clone();
        let indexes = self.labelled_content_indexes(&label).await?;

        Ok(indexes.len() as u64)
    }

    /// Fetch the next page of content, newest first.
    ///
    /// Page `k` covers slots `total - 1 - k * size` down to `total - (k + 1) * size`.
    pub async fn fetch_next_content_page(&mut self) -> Result<(), Error> {
        let page = self.content_cursor.position();
        let page_size = self.content_cursor.page_size() as u64;

        if !self.content_cursor.has_more() || self.contents.len() as u64 >= (page + 1) * page_size
        {
            return Ok(());
        }

        let total = self.content_total().await?;

        let start = total as i64 - (page * page_size) as i64 - 1;
        let lowest = (start - page_size as i64 + 1).max(0);

        let indexes: Vec<u64> = match self.label_indexes.get(&self.active_label) {
            Some(label_indexes) if self.active_label != ALL_LABEL => (lowest..=start)
                .rev()
                .map(|slot| label_indexes[slot as usize])
                .collect(),
            _ => (lowest..=start).rev().map(|slot| slot as u64).collect(),
        };

        let mut page_contents = Vec::with_capacity(indexes.len());
        for index in indexes {
            page_contents.push(self.content(index).await?);
        }

        if start - (page_size as i64) < 0 {
            self.content_cursor.exhaust();
        }

        self.contents.extend(page_contents);
        self.content_cursor.increment();

        debug!(
            "Channel {}: page {} of {:?}, {} items, more {}",
            self.address,
            page,
            self.active_label,
            self.contents.len(),
            self.content_cursor.has_more()
        );

        Ok(())
    }
}
