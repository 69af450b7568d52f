//! Generation module
//!
//! Builds a small on-disk corpus of real card records for fixtures.
//!
//! # Overview
//!
//! - [`GenerationPools`] - candidate values per [`Category`], loaded from
//!   the metadata endpoints and the set list
//! - [`CorpusGenerator`] - cycles through the categories round robin,
//!   samples one card per item, and writes it as `card-{i}.json`
//! - [`ProgressReporter`] - progress callback ([`LogProgress`],
//!   [`NoProgress`])
//!
//! A run stops at the first item that cannot be generated.

mod driver;
mod pools;
mod types;

pub use driver::{generate_corpus, CorpusGenerator};
pub use pools::{is_pokemon_subtype, GenerationPools, ENERGY_SUBTYPES, TRAINER_SUBTYPES};
pub use types::{
    Category, GenerationReport, GeneratorConfig, LogProgress, NoProgress, ProgressReporter,
    DEFAULT_COUNT, DEFAULT_OUT_DIR,
};
