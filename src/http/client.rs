//! HTTP transport
//!
//! Builds URLs from the configured base, attaches the API key, and maps
//! response status and bodies into crate errors.

use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::pagination::{DataEnvelope, Page, PageEnvelope, PageSource};
use crate::query::QuerySpec;
use crate::types::Resource;
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::debug;

/// Header carrying the API key
pub const API_KEY_HEADER: &str = "X-Api-Key";

/// HTTP client bound to one [`ClientConfig`]
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    config: ClientConfig,
}

impl HttpClient {
    /// Create a new HTTP client with the given configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let mut builder = Client::builder().user_agent(&config.user_agent);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self { client, config })
    }

    /// Configuration this client was built with
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Get the underlying reqwest client
    pub fn inner(&self) -> &Client {
        &self.client
    }

    /// Build `{base}/{path}` with an optional raw query string
    pub fn build_url(&self, path: &str, query: &str) -> String {
        let base = self.config.trimmed_base_url();
        let path = path.trim_start_matches('/');
        let mut url = if path.is_empty() {
            base.to_string()
        } else {
            format!("{base}/{path}")
        };
        if !query.is_empty() {
            if !query.starts_with('?') {
                url.push('?');
            }
            url.push_str(query);
        }
        url
    }

    /// Make a GET request, failing on any non-2xx status
    pub async fn get(&self, url: &str) -> Result<Response> {
        let mut req = self.client.get(url);
        if let Some(key) = &self.config.api_key {
            req = req.header(API_KEY_HEADER, key);
        }

        let response = req.send().await?;
        let status = response.status();

        if !status.is_success() {
            debug!("Request failed: GET {} -> {}", url, status.as_u16());
            return Err(Error::http_status(
                status.as_u16(),
                status.canonical_reason().unwrap_or_default(),
                url,
            ));
        }

        debug!("Request succeeded: GET {}", url);
        Ok(response)
    }

    /// Make a GET request and read the body as text
    pub async fn get_text(&self, url: &str) -> Result<String> {
        let response = self.get(url).await?;
        Ok(response.text().await?)
    }

    /// Make a GET request and parse the JSON body
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let body = self.get_text(url).await?;
        serde_json::from_str(&body)
            .map_err(|e| Error::decode(format!("unexpected response body from {url}: {e}")))
    }

    /// GET a `{data: ...}` envelope and unwrap it
    pub async fn get_data<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let envelope: DataEnvelope<T> = self.get_json(url).await?;
        Ok(envelope.data)
    }

    /// Fetch one page of `resource`
    pub async fn get_page(&self, resource: Resource, query: &QuerySpec) -> Result<Page> {
        let url = self.build_url(resource.path(), &query.to_query_string());
        let body = self.get_text(&url).await?;
        PageEnvelope::from_body(&body)
            .and_then(PageEnvelope::into_page)
            .map_err(|e| match e {
                Error::Decode { message } => Error::decode(format!("{message} ({url})")),
                other => other,
            })
    }

    /// Probe the base URL with a single GET
    pub async fn check_base_url(&self) -> Result<()> {
        let url = self.build_url("", "");
        match self.get(&url).await {
            Ok(_) => Ok(()),
            Err(e) => Err(Error::invalid_value(
                "base_url",
                format!("baseUrl is invalid: {e}"),
            )),
        }
    }
}

#[async_trait]
impl PageSource for HttpClient {
    async fn fetch_page(&self, resource: Resource, query: &QuerySpec) -> Result<Page> {
        self.get_page(resource, query).await
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.config.base_url)
            .field("has_api_key", &self.config.api_key.is_some())
            .field("timeout", &self.config.timeout)
            .finish_non_exhaustive()
    }
}
