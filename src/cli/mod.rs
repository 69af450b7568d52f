//! CLI module
//!
//! Command-line interface over the client.
//!
//! # Commands
//!
//! - `check` - Validate configuration and probe the base URL
//! - `card` - Fetch one card by id
//! - `cards` / `sets` - Search, one page with `--page` or every page without
//! - `meta` - List types, subtypes, supertypes or rarities
//! - `generate` - Write a corpus of sampled cards for fixtures

mod commands;
mod runner;

pub use commands::{Cli, Commands, MetaList, OutputFormat, SearchArgs};
pub use runner::Runner;
