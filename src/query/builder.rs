//! Query string construction
//!
//! Parameters are emitted in a fixed order: `page`, `pageSize`, `q`,
//! `orderBy`, `select`.

use super::filter::Filter;
use serde::{Deserialize, Serialize};

/// Policy for `orderBy`/`select` when their lists are empty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyParams {
    /// Leave the parameter out entirely
    #[default]
    Omit,
    /// Always send it, as `orderBy=` / `select=`
    Send,
}

/// Description of a single page request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuerySpec {
    /// Rendered filter expression for `q`
    pub filter: Option<String>,
    /// Fields to sort by, in priority order
    pub order_by: Vec<String>,
    /// Fields to return
    pub select: Vec<String>,
    /// Page number (1-based)
    pub page: u32,
    /// Items per page
    pub page_size: u32,
    /// How empty lists are serialized
    pub empty_params: EmptyParams,
}

impl QuerySpec {
    /// Create a spec for the given page and page size
    pub fn new(page: u32, page_size: u32) -> Self {
        Self {
            page,
            page_size,
            ..Default::default()
        }
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

    /// Set the empty-parameter policy
    #[must_use]
    pub fn empty_params(mut self, policy: EmptyParams) -> Self {
        self.empty_params = policy;
        self
    }

    /// Same query, different page
    #[must_use]
    pub fn for_page(&self, page: u32) -> Self {
        Self {
            page,
            ..self.clone()
        }
    }

    /// Render as `k=v&k=v` without a leading `?`
    pub fn to_query_string(&self) -> String {
        let mut params = vec![
            format!("page={}", self.page),
            format!("pageSize={}", self.page_size),
        ];

        if let Some(filter) = self.filter.as_deref().filter(|f| !f.is_empty()) {
            params.push(format!("q={filter}"));
        }

        self.push_list(&mut params, "orderBy", &self.order_by);
        self.push_list(&mut params, "select", &self.select);

        params.join("&")
    }

    fn push_list(&self, params: &mut Vec<String>, key: &str, values: &[String]) {
        if values.is_empty() && self.empty_params == EmptyParams::Omit {
            return;
        }
        params.push(format!("{key}={}", values.join(",")));
    }
}

/// Render just a `select` list, as used by single-item lookups.
///
/// Returns an empty string when `select` is empty so callers can append it
/// unconditionally.
pub(crate) fn select_suffix(select: &[String]) -> String {
    if select.is_empty() {
        String::new()
    } else {
        format!("?select={}", select.join(","))
    }
}
