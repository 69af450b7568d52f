//! Generic resource endpoint

use super::params::SearchParams;
use crate::error::Result;
use crate::http::HttpClient;
use crate::models::FromRecord;
use crate::pagination::{PageSource, Paginator};
use crate::query::select_suffix;
use crate::types::{Record, Resource};
use std::marker::PhantomData;
use tracing::debug;

/// Read operations on one resource, mapping records into `T`
pub struct Endpoint<'a, T> {
    http: &'a HttpClient,
    resource: Resource,
    _entity: PhantomData<fn() -> T>,
}

impl<'a, T: FromRecord> Endpoint<'a, T> {
    pub(crate) fn new(http: &'a HttpClient, resource: Resource) -> Self {
        Self {
            http,
            resource,
            _entity: PhantomData,
        }
    }

    /// Resource this endpoint reads
    pub fn resource(&self) -> Resource {
        self.resource
    }

    /// Fetch one entity by id, optionally restricted to `select` fields
    pub async fn find(&self, id: &str, select: &[String]) -> Result<T> {
        let path = format!("{}/{id}", self.resource.path());
        let url = self.http.build_url(&path, &select_suffix(select));
        let record: Record = self.http.get_data(&url).await?;
        Ok(T::from_record(&record))
    }

    /// Fetch a single page (page 1 unless `params.page` is set)
    pub async fn search(&self, params: &SearchParams) -> Result<Vec<T>> {
        let query = params.to_query(
            params.page.unwrap_or(1),
            self.http.config().page_size,
            self.http.config().empty_params,
        );
        let page = self.http.fetch_page(self.resource, &query).await?;
        Ok(page.items.iter().map(T::from_record).collect())
    }

    /// Fetch every matching entity across all pages
    pub async fn all(&self, params: &SearchParams) -> Result<Vec<T>> {
        let records = self.all_records(params).await?;
        Ok(records.iter().map(T::from_record).collect())
    }

    /// Fetch every matching raw record across all pages
    pub async fn all_records(&self, params: &SearchParams) -> Result<Vec<Record>> {
        let records = self.paginator(params).collect_all().await?;
        debug!("{}: all() returned {} records", self.resource, records.len());
        Ok(records)
    }

    /// Paginator over this endpoint, for page-at-a-time consumption
    pub fn paginator(&self, params: &SearchParams) -> Paginator<'a, HttpClient> {
        let query = params.to_query(
            1,
            self.http.config().page_size,
            self.http.config().empty_params,
        );
        Paginator::new(self.http, self.resource, query)
    }
}
