//! CLI runner - executes commands

use crate::api::SearchParams;
use crate::cli::commands::{Cli, Commands, MetaList, OutputFormat, SearchArgs};
use crate::client::PokemonTcgClient;
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::generate::{generate_corpus, GeneratorConfig, LogProgress};
use crate::query::Filter;
use crate::types::Resource;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use serde_json::json;
use std::path::Path;
use tracing::{debug, info};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Check => self.check().await,
            Commands::Card { id, select } => self.card(id, select).await,
            Commands::Cards(args) => self.search(Resource::Cards, args).await,
            Commands::Sets(args) => self.search(Resource::Sets, args).await,
            Commands::Meta { list } => self.meta(*list).await,
            Commands::Generate {
                count,
                out,
                retries,
                seed,
            } => self.generate(*count, out, *retries, *seed).await,
        }
    }

    /// Config file (if any) overridden by `--api-key` / `--base-url`
    fn load_config(&self) -> Result<ClientConfig> {
        let mut config = match &self.cli.config {
            Some(path) => ClientConfig::from_file(path)?,
            None => ClientConfig::default(),
        };
        if let Some(key) = &self.cli.api_key {
            config.api_key = Some(key.clone());
        }
        if let Some(url) = &self.cli.base_url {
            config.base_url = url.clone();
        }
        debug!("Using base URL {}", config.base_url);
        Ok(config)
    }

    fn client(&self) -> Result<PokemonTcgClient> {
        PokemonTcgClient::new(self.load_config()?)
    }

    /// Validate config and probe the base URL
    async fn check(&self) -> Result<()> {
        let config = self.load_config()?;
        let base_url = config.base_url.clone();
        info!("Checking connection to {}", base_url);

        PokemonTcgClient::connect(config).await?;
        self.output(&json!({
            "status": "SUCCEEDED",
            "base_url": base_url,
        }))
    }

    async fn card(&self, id: &str, select: &[String]) -> Result<()> {
        let card = self.client()?.cards().find(id, select).await?;
        self.output(&card)
    }

    /// `--page` fetches one page, otherwise every page
    async fn search(&self, resource: Resource, args: &SearchArgs) -> Result<()> {
        let client = self.client()?;
        let params = search_params(args)?;

        match (resource, args.page.is_some()) {
            (Resource::Sets, true) => self.output(&client.sets().search(&params).await?),
            (Resource::Sets, false) => self.output(&client.sets().all(&params).await?),
            (_, true) => self.output(&client.cards().search(&params).await?),
            (_, false) => self.output(&client.cards().all(&params).await?),
        }
    }

    async fn meta(&self, list: MetaList) -> Result<()> {
        let values = self.client()?.metadata(list.resource()).await?;
        self.output(&values)
    }

    async fn generate(&self, count: usize, out: &Path, retries: u32, seed: Option<u64>) -> Result<()> {
        let client = self.client()?;
        let seed = seed.unwrap_or_else(rand::random);
        info!("Generating with seed {}", seed);

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let config = GeneratorConfig::default()
            .count(count)
            .out_dir(out)
            .retries(retries);

        let report = generate_corpus(&client, config, &mut rng, &mut LogProgress).await?;
        self.output(&json!({
            "generated": report.generated,
            "files": report.files,
            "elapsed_secs": report.elapsed.as_secs_f64(),
            "seed": seed,
        }))
    }

    /// Print a value in the selected format
    fn output<T: Serialize + ?Sized>(&self, value: &T) -> Result<()> {
        let rendered = match self.cli.format {
            OutputFormat::Json => serde_json::to_string(value)?,
            OutputFormat::Pretty => serde_json::to_string_pretty(value)?,
        };
        println!("{rendered}");
        Ok(())
    }
}

/// Split a `field=value` argument
fn parse_predicate(arg: &str) -> Result<(&str, &str)> {
    match arg.split_once('=') {
        Some((field, value)) if !field.is_empty() => Ok((field, value)),
        _ => Err(Error::config(format!(
            "Invalid --query '{arg}', expected field=value"
        ))),
    }
}

/// Build search parameters from CLI arguments
fn search_params(args: &SearchArgs) -> Result<SearchParams> {
    let pairs = args
        .query
        .iter()
        .map(|arg| parse_predicate(arg))
        .collect::<Result<Vec<_>>>()?;
    let mut expression = Filter::from_pairs(pairs).to_string();

    if let Some(raw) = args.filter.as_deref().filter(|f| !f.is_empty()) {
        if !expression.is_empty() {
            expression.push(',');
        }
        expression.push_str(raw);
    }

    let mut params = SearchParams::new()
        .raw_filter(expression)
        .order_by(args.order_by.iter().cloned())
        .select(args.select.iter().cloned());
    if let Some(page) = args.page {
        params = params.page(page);
    }
    if let Some(size) = args.page_size {
        params = params.page_size(size);
    }
    Ok(params)
}
