//! CLI commands and argument parsing

use crate::config::{API_KEY_ENV, BASE_URL_ENV};
use crate::generate::{DEFAULT_COUNT, DEFAULT_OUT_DIR};
use crate::sampling::DEFAULT_RETRIES;
use crate::types::Resource;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Pokemon TCG API command line client
#[derive(Parser, Debug)]
#[command(name = "ptcg")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// API key sent as X-Api-Key
    #[arg(long, global = true, env = API_KEY_ENV, hide_env_values = true)]
    pub api_key: Option<String>,

    /// API base URL
    #[arg(long, global = true, env = BASE_URL_ENV)]
    pub base_url: Option<String>,

    /// Client configuration file (YAML or JSON)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate the configuration and probe the base URL
    Check,

    /// Fetch one card by id
    Card {
        /// Card id, e.g. `xy1-1`
        id: String,

        /// Fields to return (comma-separated)
        #[arg(long, value_delimiter = ',')]
        select: Vec<String>,
    },

    /// Search cards
    Cards(SearchArgs),

    /// Search sets
    Sets(SearchArgs),

    /// List a metadata resource
    Meta {
        /// Which list to fetch
        #[arg(value_enum)]
        list: MetaList,
    },

    /// Write a corpus of randomly sampled cards as JSON files
    Generate {
        /// Number of cards to write
        #[arg(long, default_value_t = DEFAULT_COUNT)]
        count: usize,

        /// Output directory
        #[arg(short, long, default_value = DEFAULT_OUT_DIR)]
        out: PathBuf,

        /// Sampling attempts per card
        #[arg(long, default_value_t = DEFAULT_RETRIES)]
        retries: u32,

        /// RNG seed for a reproducible corpus
        #[arg(long)]
        seed: Option<u64>,
    },
}

/// Shared search arguments for `cards` and `sets`
#[derive(Args, Debug, Clone, Default)]
pub struct SearchArgs {
    /// Filter predicate as `field=value` (repeatable)
    #[arg(short, long = "query")]
    pub query: Vec<String>,

    /// Raw filter expression appended to the `--query` predicates
    #[arg(long)]
    pub filter: Option<String>,

    /// Sort fields (comma-separated, `-` prefix for descending)
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    pub order_by: Vec<String>,

    /// Fields to return (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub select: Vec<String>,

    /// Fetch only this page instead of every page
    #[arg(long)]
    pub page: Option<u32>,

    /// Page size
    #[arg(long)]
    pub page_size: Option<u32>,
}

/// Metadata lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum MetaList {
    Types,
    Subtypes,
    Supertypes,
    Rarities,
}

impl MetaList {
    pub fn resource(self) -> Resource {
        match self {
            MetaList::Types => Resource::Types,
            MetaList::Subtypes => Resource::Subtypes,
            MetaList::Supertypes => Resource::Supertypes,
            MetaList::Rarities => Resource::Rarities,
        }
    }
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Compact JSON on one line
    Json,
    /// Indented JSON
    Pretty,
}
