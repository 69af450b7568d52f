//! Sample-with-retry over a candidate pool

use super::pool::CandidatePool;
use crate::error::{Error, Result};
use crate::pagination::{PageSource, Paginator, DEFAULT_PAGE_SIZE};
use crate::query::{EmptyParams, Filter, QuerySpec};
use crate::types::{Record, Resource};
use rand::Rng;
use tracing::{debug, warn};

/// Attempts per sample when not configured otherwise
pub const DEFAULT_RETRIES: u32 = 3;

/// Runs filtered, fully paginated fetches against random pool values
pub struct Sampler<'a, S: PageSource + ?Sized> {
    source: &'a S,
    resource: Resource,
    page_size: u32,
    empty_params: EmptyParams,
}

impl<'a, S: PageSource + ?Sized> Sampler<'a, S> {
    /// Sample cards from `source`
    pub fn new(source: &'a S) -> Self {
        Self {
            source,
            resource: Resource::Cards,
            page_size: DEFAULT_PAGE_SIZE,
            empty_params: EmptyParams::default(),
        }
    }

    #[must_use]
    pub fn with_resource(mut self, resource: Resource) -> Self {
        self.resource = resource;
        self
    }

    #[must_use]
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    #[must_use]
    pub fn with_empty_params(mut self, policy: EmptyParams) -> Self {
        self.empty_params = policy;
        self
    }

    /// Fetch every record matching `field:"value"` for some value in `pool`.
    ///
    /// Makes up to `retries` attempts. Each attempt picks a value uniformly
    /// at random and paginates over the matching records. The first
    /// non-empty result is returned.
    ///
    /// Side effect: every value whose attempt came back empty, or failed, is
    /// removed from `pool`.
    ///
    /// # Errors
    ///
    /// [`Error::Exhausted`] when the last attempt failed (with that failure
    /// as its source), when every attempt came back empty, or when the pool
    /// ran dry first.
    pub async fn sample_once<R: Rng + ?Sized>(
        &self,
        pool: &mut CandidatePool,
        field: &str,
        retries: u32,
        rng: &mut R,
    ) -> Result<Vec<Record>> {
        let mut tried: Vec<String> = Vec::new();

        for attempt in 1..=retries {
            let Some(value) = pool.pick(rng).map(str::to_string) else {
                debug!("{field}: candidate pool is empty after {} attempts", tried.len());
                break;
            };
            tried.push(value.clone());

            let query = QuerySpec::new(1, self.page_size)
                .filter(&Filter::new().quoted(field, value.as_str()))
                .empty_params(self.empty_params);

            match Paginator::new(self.source, self.resource, query)
                .collect_all()
                .await
            {
                Ok(records) if !records.is_empty() => {
                    debug!(
                        "{field}:\"{value}\" matched {} records on attempt {attempt}",
                        records.len()
                    );
                    return Ok(records);
                }
                Ok(_) => {
                    debug!("{field}:\"{value}\" matched nothing (attempt {attempt}/{retries})");
                }
                Err(e) if attempt == retries => {
                    pool.remove(&value);
                    return Err(exhausted(field, tried, Some(e)));
                }
                Err(e) => {
                    warn!("{field}:\"{value}\" failed (attempt {attempt}/{retries}): {e}");
                }
            }

            pool.remove(&value);
        }

        Err(exhausted(field, tried, None))
    }
}

fn exhausted(field: &str, tried: Vec<String>, source: Option<Error>) -> Error {
    Error::Exhausted {
        field: field.to_string(),
        attempts: tried.len() as u32,
        tried,
        source: source.map(Box::new),
    }
}
