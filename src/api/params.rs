//! Search parameters shared by `search` and `all`

use crate::query::{EmptyParams, Filter, QuerySpec};

/// Filter, sort, selection and paging for a search
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchParams {
    /// Filter expression for `q`
    pub filter: Option<String>,
    /// Sort fields
    pub order_by: Vec<String>,
    /// Fields to return
    pub select: Vec<String>,
    /// Page for `search`; ignored by `all`, which always starts at 1
    pub page: Option<u32>,
    /// Page size; falls back to the client's configured page size
    pub page_size: Option<u32>,
}

impl SearchParams {
    /// Create empty search parameters
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the filter from a structured [`Filter`]
    #[must_use]
    pub fn filter(mut self, filter: &Filter) -> Self {
        self.filter = (!filter.is_empty()).then(|| filter.to_string());
        self
    }

    /// Set a raw filter expression
    #[must_use]
    pub fn raw_filter(mut self, expression: impl Into<String>) -> Self {
        let expression = expression.into();
        self.filter = (!expression.is_empty()).then_some(expression);
        self
    }

    /// Set sort fields
    #[must_use]
    pub fn order_by<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.order_by = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Set selected fields
    #[must_use]
    pub fn select<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.select = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Set the page for `search`
    #[must_use]
    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Set the page size
    #[must_use]
    pub fn page_size(mut self, size: u32) -> Self {
        self.page_size = Some(size);
        self
    }

    /// Resolve into a [`QuerySpec`] for `page`
    pub(crate) fn to_query(&self, page: u32, default_size: u32, policy: EmptyParams) -> QuerySpec {
        QuerySpec {
            filter: self.filter.clone(),
            order_by: self.order_by.clone(),
            select: self.select.clone(),
            page,
            page_size: self.page_size.unwrap_or(default_size),
            empty_params: policy,
        }
    }
}
