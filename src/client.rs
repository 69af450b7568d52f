//! Top-level API client

use crate::api::Endpoint;
use crate::config::ClientConfig;
use crate::error::Result;
use crate::http::HttpClient;
use crate::models::{Card, CardSet};
use crate::pagination::DEFAULT_PAGE_SIZE;
use crate::types::{Record, Resource};
use tracing::{debug, warn};

/// Client for the Pokemon TCG API
///
/// ```rust,ignore
/// use ptcg_sdk::{ClientConfig, PokemonTcgClient, api::SearchParams, query::Filter};
///
/// let client = PokemonTcgClient::connect(ClientConfig::from_env()).await?;
/// let charizards = client
///     .cards()
///     .all(&SearchParams::new().filter(&Filter::new().eq("name", "charizard")))
///     .await?;
/// ```
#[derive(Debug, Clone)]
pub struct PokemonTcgClient {
    http: HttpClient,
}

impl PokemonTcgClient {
    /// Validate the config and build a client without touching the network
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            http: HttpClient::with_config(config)?,
        })
    }

    /// Validate the config, then probe the base URL
    pub async fn connect(config: ClientConfig) -> Result<Self> {
        let client = Self::new(config)?;
        client.http.check_base_url().await?;
        debug!("Connected to {}", client.http.config().base_url);
        Ok(client)
    }

    /// Build from `POKEMON_TCG_API_KEY` / `POKEMON_TCG_BASE_URL`
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env())
    }

    /// Underlying transport
    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    /// Configuration in use
    pub fn config(&self) -> &ClientConfig {
        self.http.config()
    }

    /// Card endpoint
    pub fn cards(&self) -> Endpoint<'_, Card> {
        Endpoint::new(&self.http, Resource::Cards)
    }

    /// Set endpoint
    pub fn sets(&self) -> Endpoint<'_, CardSet> {
        Endpoint::new(&self.http, Resource::Sets)
    }

    /// Endpoint returning raw records
    pub fn raw(&self, resource: Resource) -> Endpoint<'_, Record> {
        Endpoint::new(&self.http, resource)
    }

    /// All energy types
    pub async fn types(&self) -> Result<Vec<String>> {
        self.metadata(Resource::Types).await
    }

    /// All subtypes
    pub async fn subtypes(&self) -> Result<Vec<String>> {
        self.metadata(Resource::Subtypes).await
    }

    /// All supertypes
    pub async fn supertypes(&self) -> Result<Vec<String>> {
        self.metadata(Resource::Supertypes).await
    }

    /// All rarities
    pub async fn rarities(&self) -> Result<Vec<String>> {
        self.metadata(Resource::Rarities).await
    }

    /// Fetch one of the string-list metadata resources
    pub async fn metadata(&self, resource: Resource) -> Result<Vec<String>> {
        let url = self.http.build_url(resource.path(), "");
        let values: Vec<String> = self.http.get_data(&url).await?;
        if values.len() >= DEFAULT_PAGE_SIZE as usize {
            warn!(
                "{} returned {} values; the list may be truncated",
                resource,
                values.len()
            );
        }
        Ok(values)
    }
}
