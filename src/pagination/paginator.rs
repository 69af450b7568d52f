//! Sequential page-number paginator

use super::types::{is_last_page, Page, PageSource, PaginationState};
use crate::error::Result;
use crate::query::QuerySpec;
use crate::types::{Record, Resource};
use futures::stream::{self, Stream};
use tracing::debug;

/// Fetches pages from a [`PageSource`] until the stop predicate holds
///
/// A paginator is single-use: once `Done` (or after an error) it yields
/// nothing more. Start a new one to fetch again.
pub struct Paginator<'a, S: PageSource + ?Sized> {
    source: &'a S,
    resource: Resource,
    query: QuerySpec,
    state: PaginationState,
    pages_fetched: u32,
    records_fetched: u64,
}

impl<'a, S: PageSource + ?Sized> Paginator<'a, S> {
    /// Create a paginator; `query.page` is ignored, fetching starts at 1
    pub fn new(source: &'a S, resource: Resource, query: QuerySpec) -> Self {
        Self {
            source,
            resource,
            query,
            state: PaginationState::new(),
            pages_fetched: 0,
            records_fetched: 0,
        }
    }

    /// Current state
    pub fn state(&self) -> PaginationState {
        self.state
    }

    /// Pages fetched so far
    pub fn pages_fetched(&self) -> u32 {
        self.pages_fetched
    }

    /// Records fetched so far
    pub fn records_fetched(&self) -> u64 {
        self.records_fetched
    }

    /// Fetch the next page, or `None` once done
    pub async fn next_page(&mut self) -> Result<Option<Page>> {
        let PaginationState::Fetching { page } = self.state else {
            return Ok(None);
        };

        let query = self.query.for_page(page);
        let fetched = match self.source.fetch_page(self.resource, &query).await {
            Ok(fetched) => fetched,
            Err(e) => {
                self.state = PaginationState::Done;
                return Err(e);
            }
        };

        self.pages_fetched += 1;
        self.records_fetched += fetched.items.len() as u64;

        self.state = if is_last_page(page, fetched.page_size, fetched.total_count) {
            PaginationState::Done
        } else {
            PaginationState::Fetching { page: page + 1 }
        };

        debug!(
            "{}: page {} returned {} items (total {:?}), done={}",
            self.resource,
            page,
            fetched.items.len(),
            fetched.total_count,
            self.state.is_done()
        );

        Ok(Some(fetched))
    }

    /// Fetch every page and concatenate the items in order
    pub async fn collect_all(mut self) -> Result<Vec<Record>> {
        let mut accumulated = Vec::new();
        while let Some(page) = self.next_page().await? {
            accumulated.extend(page.items);
        }
        debug!(
            "{}: collected {} records over {} pages",
            self.resource,
            accumulated.len(),
            self.pages_fetched
        );
        Ok(accumulated)
    }

    /// Lazily yield pages as a stream
    pub fn into_stream(self) -> impl Stream<Item = Result<Page>> + 'a
    where
        S: 'a,
    {
        stream::try_unfold(self, |mut paginator| async move {
            Ok(paginator
                .next_page()
                .await?
                .map(|page| (page, paginator)))
        })
    }
}
