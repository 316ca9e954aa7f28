use crate::errors::Error;

/// Bookkeeping for incremental reads of a large on-chain collection.
///
/// Once exhausted a cursor stays exhausted until reset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationCursor {
    page_size: usize,
    position: u64,
    has_more: bool,
}

impl PaginationCursor {
    /// Fails on an empty page size, which would never make progress.
    pub fn new(page_size: usize) -> Result<Self, Error> {
        if page_size == 0 {
            return Err(Error::Config("page size must be greater than zero"));
        }

        Ok(Self {
            page_size,
            position: 0,
            has_more: true,
        })
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Next page number or id to fetch from, depending on the collection.
    pub fn position(&self) -> u64 {
        self.position
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn advance_to(&mut self, position: u64) {
        self.position = position;
    }

    pub fn increment(&mut self) {
        self.position += 1;
    }

    pub fn exhaust(&mut self) {
        self.has_more = false;
    }

    pub fn reset(&mut self) {
        self.position = 0;
        self.has_more = true;
    }
}
