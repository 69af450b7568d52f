//! Generation types
//!
//! Categories, run configuration, progress reporting and the run report.

use crate::sampling::DEFAULT_RETRIES;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

/// Items generated when not configured otherwise
pub const DEFAULT_COUNT: usize = 10;

/// Output directory when not configured otherwise
pub const DEFAULT_OUT_DIR: &str = "tests/data";

// ============================================================================
// Category
// ============================================================================

/// Strategy used to pick the filter for one generated item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Supertype,
    Subtype,
    Type,
    Rarity,
    Set,
}

impl Category {
    /// Every category, in round-robin order
    pub const ALL: [Category; 5] = [
        Category::Supertype,
        Category::Subtype,
        Category::Type,
        Category::Rarity,
        Category::Set,
    ];

    /// Category for item `index` (`index % 5`)
    pub fn for_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    /// Card field the filter is built on
    pub fn field(self) -> &'static str {
        match self {
            Category::Supertype => "supertype",
            Category::Subtype => "subtypes",
            Category::Type => "types",
            Category::Rarity => "rarity",
            Category::Set => "set.id",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Supertype => "Supertype",
            Category::Subtype => "Subtype",
            Category::Type => "Type",
            Category::Rarity => "Rarity",
            Category::Set => "Set",
        };
        f.write_str(name)
    }
}

// ============================================================================
// Configuration
// ============================================================================

/// Settings for one generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Number of items to generate
    pub count: usize,
    /// Directory the `card-{i}.json` files are written to
    pub out_dir: PathBuf,
    /// Sampling attempts per item
    pub retries: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            retries: DEFAULT_RETRIES,
        }
    }
}

impl GeneratorConfig {
    #[must_use]
    pub fn count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    #[must_use]
    pub fn out_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.out_dir = dir.into();
        self
    }

    #[must_use]
    pub fn retries(mut self, retries: u32) -> Self {
        self.retries = retries;
        self
    }
}

// ============================================================================
// Report
// ============================================================================

/// Outcome of a completed run
#[derive(Debug, Clone, Default)]
pub struct GenerationReport {
    /// Items written
    pub generated: usize,
    /// Files written, in item order
    pub files: Vec<PathBuf>,
    /// Wall time of the run
    pub elapsed: Duration,
}

// ============================================================================
// Progress
// ============================================================================

/// Receives progress updates from a generation run
pub trait ProgressReporter: Send {
    /// Run is starting with `total` items
    fn start(&mut self, total: usize);

    /// `done` of `total` items are complete
    fn advance(&mut self, done: usize, total: usize);

    /// Run ended, successfully or not, after `done` items
    fn finish(&mut self, done: usize);
}

/// Reports progress through `tracing`
#[derive(Debug, Default)]
pub struct LogProgress;

impl ProgressReporter for LogProgress {
    fn start(&mut self, total: usize) {
        info!("Generating {} cards", total);
    }

    fn advance(&mut self, done: usize, total: usize) {
        let percent = if total == 0 { 100 } else { done * 100 / total };
        info!("Generating cards {}% || {}/{} Cards", percent, done, total);
    }

    fn finish(&mut self, done: usize) {
        info!("Finished after {} cards", done);
    }
}

/// Discards progress updates
#[derive(Debug, Default)]
pub struct NoProgress;

impl ProgressReporter for NoProgress {
    fn start(&mut self, _total: usize) {}

    fn advance(&mut self, _done: usize, _total: usize) {}

    fn finish(&mut self, _done: usize) {}
}
