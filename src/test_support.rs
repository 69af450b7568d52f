//! In-memory page sources for unit tests

use crate::error::{Error, Result};
use crate::pagination::{Page, PageSource};
use crate::query::QuerySpec;
use crate::types::{Record, Resource};
use async_trait::async_trait;
use serde_json::json;
use std::sync::Mutex;

type Responder = Box<dyn Fn(Resource, &QuerySpec) -> Result<Page> + Send + Sync>;

/// A [`PageSource`] answering from a closure and logging every request
pub struct ScriptedSource {
    respond: Responder,
    requests: Mutex<Vec<(Resource, QuerySpec)>>,
}

impl ScriptedSource {
    pub fn new(respond: impl Fn(Resource, &QuerySpec) -> Result<Page> + Send + Sync + 'static) -> Self {
        Self {
            respond: Box::new(respond),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Serves `total` records `r-0..r-{total}` in pages of `page_size`
    pub fn paged(total: u64, page_size: u32) -> Self {
        Self::new(move |_, query| Ok(slice_page(total, page_size, query.page, Some(total))))
    }

    /// Every request recorded so far
    pub fn requests(&self) -> Vec<(Resource, QuerySpec)> {
        self.requests.lock().unwrap().clone()
    }

    /// Page numbers requested, in order
    pub fn pages_requested(&self) -> Vec<u32> {
        self.requests().iter().map(|(_, q)| q.page).collect()
    }

    /// Filter expressions requested, in order
    pub fn filters_requested(&self) -> Vec<String> {
        self.requests()
            .iter()
            .map(|(_, q)| q.filter.clone().unwrap_or_default())
            .collect()
    }
}

#[async_trait]
impl PageSource for ScriptedSource {
    async fn fetch_page(&self, resource: Resource, query: &QuerySpec) -> Result<Page> {
        self.requests
            .lock()
            .unwrap()
            .push((resource, query.clone()));
        (self.respond)(resource, query)
    }
}

/// Record `{"id": id}`
pub fn record(id: &str) -> Record {
    match json!({ "id": id }) {
        serde_json::Value::Object(map) => map,
        _ => unreachable!(),
    }
}

/// Page `page` of a `total`-item result set
pub fn slice_page(total: u64, page_size: u32, page: u32, total_count: Option<u64>) -> Page {
    let start = u64::from(page - 1) * u64::from(page_size);
    let end = (start + u64::from(page_size)).min(total);
    let items = (start..end.max(start))
        .map(|n| record(&format!("r-{n}")))
        .collect();
    Page {
        items,
        page,
        page_size,
        total_count,
    }
}

/// Single complete page with the given ids
pub fn single_page(ids: &[&str]) -> Page {
    Page {
        items: ids.iter().map(|id| record(id)).collect(),
        page: 1,
        page_size: 250,
        total_count: Some(ids.len() as u64),
    }
}

/// Empty page, as returned for a filter with no matches
pub fn empty_page() -> Page {
    Page {
        items: Vec::new(),
        page: 1,
        page_size: 250,
        total_count: Some(0),
    }
}

/// Transport-style failure
pub fn server_error(url: &str) -> Error {
    Error::http_status(500, "Internal Server Error", url)
}
