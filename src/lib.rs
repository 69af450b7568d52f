// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::unused_self)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # Pokemon TCG SDK
//!
//! Async client for the Pokemon TCG REST API.
//!
//! ## Features
//!
//! - **Typed entities**: cards, sets, prices and legalities mapped from raw records
//! - **Pagination**: `all`-style fetches walk every page in order and fail as a whole
//! - **Query building**: filters, sort and field selection rendered into the query string
//! - **Corpus generation**: sample real cards into JSON fixture files
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use ptcg_sdk::{api::SearchParams, query::Filter, ClientConfig, PokemonTcgClient, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = PokemonTcgClient::connect(ClientConfig::from_env()).await?;
//!
//!     let card = client.cards().find("xy1-1", &[]).await?;
//!     println!("{} ({})", card.name, card.set_name());
//!
//!     let fire = client
//!         .cards()
//!         .all(&SearchParams::new().filter(&Filter::new().eq("types", "Fire")))
//!         .await?;
//!     println!("{} fire cards", fire.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │ PokemonTcgClient: cards() sets() types() rarities() ...  │
//! └──────────────────────────────────────────────────────────┘
//!                              │
//! ┌───────────┬────────────────┴──────┬───────────┬──────────┐
//! │  Endpoint │      Paginator        │   Query   │  Models  │
//! │ find      │ Fetching → Done       │ q         │ Card     │
//! │ search    │ stop on totalCount    │ orderBy   │ CardSet  │
//! │ all       │ fail fast             │ select    │ prices   │
//! └───────────┴───────────────────────┴───────────┴──────────┘
//!                              │
//!                    HttpClient (X-Api-Key)
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the SDK
pub mod error;

/// Common types and type aliases
pub mod types;

/// Client configuration
pub mod config;

/// Query string construction
pub mod query;

/// HTTP transport
pub mod http;

/// Page-number pagination
pub mod pagination;

/// Typed entities mapped from raw records
pub mod models;

/// Resource endpoints
pub mod api;

/// Top-level client
pub mod client;

/// Random sampling with retry
pub mod sampling;

/// Test corpus generation
pub mod generate;

/// Command-line interface
pub mod cli;

#[cfg(test)]
mod test_support;

// ============================================================================
// Re-exports
// ============================================================================

pub use client::PokemonTcgClient;
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use types::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
