use contract_api::{ContractClient, Token};

use log::debug;

use purity_data::{category::CategoryRecord, types::Address};

use crate::{
    cursor::PaginationCursor,
    errors::Error,
    responses::{decode, CategoriesResponse, UintResponse},
};

/// Categories of the registry, fetched a page at a time, lowest id first.
#[derive(Clone)]
pub struct CategoryDirectory<C> {
    client: C,
    registry: Address,
    cursor: PaginationCursor,
    categories: Vec<CategoryRecord>,
}

impl<C> CategoryDirectory<C>
where
    C: ContractClient,
{
    pub fn new(client: C, registry: Address, page_size: usize) -> Result<Self, Error> {
        Ok(Self {
            client,
            registry,
            cursor: PaginationCursor::new(page_size)?,
            categories: Vec::with_capacity(page_size),
        })
    }

    /// Categories fetched so far.
    pub fn categories(&self) -> &[CategoryRecord] {
        &self.categories
    }

    pub fn has_more(&self) -> bool {
        self.cursor.has_more()
    }

    /// Id the next fetch starts after.
    pub fn cursor(&self) -> u64 {
        self.cursor.position()
    }

    /// Fetch the next page of categories.
    ///
    /// Stops at the first category without channels, the registry's end marker.
    pub async fn fetch_next_page(&mut self) -> Result<(), Error> {
        if !self.cursor.has_more() {
            return Ok(());
        }

        let from = self.cursor.position();
        let size = self.cursor.page_size();

        let batch = self.get_categories(from, size).await?;

        if batch.is_empty() {
            self.cursor.exhaust();
        }

        for category in batch {
            if category.is_end_marker() {
                self.cursor.exhaust();
                break;
            }

            self.cursor.advance_to(category.id);
            self.categories.push(category);
        }

        debug!(
            "Categories: {} fetched, next from {}, more {}",
            self.categories.len(),
            self.cursor.position(),
            self.cursor.has_more()
        );

        Ok(())
    }

    /// Move the cursor one id forward without fetching.
    ///
    /// Kept for callers relying on the legacy cursor handling; the next fetch
    /// skips the category right after the last one fetched.
    pub fn request_more(&mut self) {
        self.cursor.increment();
    }

    pub fn reset(&mut self) {
        self.cursor.reset();
        self.categories.clear();
    }

    /// Up to `size` categories with ids greater than `from_category_id`.
    pub async fn get_categories(
        &self,
        from_category_id: u64,
        size: usize,
    ) -> Result<Vec<CategoryRecord>, Error> {
        let args = [Token::from(from_category_id), Token::from(size as u64)];

        let value = self
            .client
            .read(self.registry, "getCategories", &args)
            .await?;

        let response: CategoriesResponse = decode(value)?;

        response.into_records(size)
    }

    /// Number of channels listed under a topic.
    pub async fn category_length(&self, topic: &str) -> Result<u64, Error> {
        let lookup = |source| Error::Lookup {
            topic: topic.to_owned(),
            source,
        };

        let value = self
            .client
            .read(self.registry, "getCategoryLength", &[Token::text(topic)])
            .await
            .map_err(lookup)?;

        let UintResponse(length) = serde_json::from_value(value)
            .map_err(|e| lookup(contract_api::errors::Error::Serde(e)))?;

        Ok(length)
    }
}
