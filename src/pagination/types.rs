//! Pagination types and traits
//!
//! Defines the page envelope, the state machine states, and the
//! [`PageSource`] seam the paginator fetches through.

use crate::error::{Error, Result};
use crate::query::QuerySpec;
use crate::types::{Record, Resource};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Upstream page size cap, used as the default page size
pub const DEFAULT_PAGE_SIZE: u32 = 250;

/// Raw page envelope as sent by the API
///
/// `data`, `page` and `pageSize` are required; `totalCount` may be absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageEnvelope {
    /// Items on this page
    pub data: Vec<Record>,
    /// Page number as reported by the server
    pub page: u32,
    /// Page size as reported by the server
    pub page_size: u32,
    /// Items on this page, when reported
    #[serde(default)]
    pub count: Option<u64>,
    /// Total matching items; absent or zero means unknown
    #[serde(default)]
    pub total_count: Option<u64>,
}

impl PageEnvelope {
    /// Parse an envelope from a response body
    pub fn from_body(body: &str) -> Result<Self> {
        serde_json::from_str(body)
            .map_err(|e| Error::decode(format!("malformed page envelope: {e}")))
    }

    /// Validate and convert into a [`Page`]
    pub fn into_page(self) -> Result<Page> {
        if self.page == 0 {
            return Err(Error::decode("page envelope has page 0"));
        }
        if self.page_size == 0 {
            return Err(Error::decode("page envelope has pageSize 0"));
        }
        Ok(Page {
            items: self.data,
            page: self.page,
            page_size: self.page_size,
            total_count: self.total_count.filter(|&t| t > 0),
        })
    }
}

/// Envelope for non-paginated responses (`find`, metadata lists)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataEnvelope<T> {
    /// Response payload
    pub data: T,
}

/// One validated page
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    /// Items in server order
    pub items: Vec<Record>,
    /// Page number (≥ 1)
    pub page: u32,
    /// Page size (> 0)
    pub page_size: u32,
    /// Total matching items; `None` when unknown or reported as zero
    pub total_count: Option<u64>,
}

impl Page {
    /// Number of items on this page
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when the page carries no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Paginator state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaginationState {
    /// Next request will ask for `page`
    Fetching {
        /// Page number to request next
        page: u32,
    },
    /// No more pages will be requested
    Done,
}

impl PaginationState {
    /// Initial state: about to fetch page 1
    pub fn new() -> Self {
        Self::Fetching { page: 1 }
    }

    /// Check if pagination is complete
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done)
    }
}

impl Default for PaginationState {
    fn default() -> Self {
        Self::new()
    }
}

/// Stop predicate, evaluated with the page number just fetched
pub fn is_last_page(page: u32, page_size: u32, total_count: Option<u64>) -> bool {
    match total_count {
        None | Some(0) => true,
        Some(total) => u64::from(page_size) * u64::from(page) >= total,
    }
}

/// Anything that can return one page for a query
///
/// Implementations perform exactly one request per call and never retry.
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetch a single page of `resource` matching `query`
    async fn fetch_page(&self, resource: Resource, query: &QuerySpec) -> Result<Page>;
}
