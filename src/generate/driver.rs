//! Corpus generation loop

use super::pools::GenerationPools;
use super::types::{Category, GenerationReport, GeneratorConfig, ProgressReporter};
use crate::client::PokemonTcgClient;
use crate::error::{Error, Result};
use crate::models::RecordExt;
use crate::pagination::{PageSource, DEFAULT_PAGE_SIZE};
use crate::query::EmptyParams;
use crate::sampling::Sampler;
use crate::types::Record;
use rand::Rng;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, error, info};

/// Writes sampled card records to `card-{i}.json` files
pub struct CorpusGenerator<'a, S: PageSource + ?Sized> {
    source: &'a S,
    config: GeneratorConfig,
    page_size: u32,
    empty_params: EmptyParams,
}

impl<'a, S: PageSource + ?Sized> CorpusGenerator<'a, S> {
    pub fn new(source: &'a S, config: GeneratorConfig) -> Self {
        Self {
            source,
            config,
            page_size: DEFAULT_PAGE_SIZE,
            empty_params: EmptyParams::default(),
        }
    }

    #[must_use]
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    #[must_use]
    pub fn with_empty_params(mut self, policy: EmptyParams) -> Self {
        self.empty_params = policy;
        self
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate `config.count` items, drawing filter values from `pools`.
    ///
    /// Item `i` (1-based) samples with [`Category::for_index`]`(i)`. The
    /// first item that cannot be sampled, or whose record has no `id`,
    /// aborts the run with [`Error::GenerationAborted`]; files written
    /// before it are left in place.
    pub async fn run<R: Rng + ?Sized>(
        &self,
        pools: &mut GenerationPools,
        rng: &mut R,
        progress: &mut dyn ProgressReporter,
    ) -> Result<GenerationReport> {
        let started = Instant::now();
        let total = self.config.count;
        tokio::fs::create_dir_all(&self.config.out_dir).await?;

        let sampler = Sampler::new(self.source)
            .with_page_size(self.page_size)
            .with_empty_params(self.empty_params);

        let mut report = GenerationReport::default();
        progress.start(total);

        for index in 1..=total {
            let category = Category::for_index(index);
            let written = match self.generate_one(&sampler, pools, category, index, rng).await {
                Ok(path) => path,
                Err(e) => {
                    error!("Failed to generate card {}: {}", index, e);
                    progress.finish(report.generated);
                    return Err(Error::GenerationAborted {
                        index,
                        generated: report.generated,
                        source: Box::new(e),
                    });
                }
            };

            report.generated += 1;
            report.files.push(written);
            progress.advance(index, total);
        }

        progress.finish(report.generated);
        report.elapsed = started.elapsed();
        info!(
            "Generated {} test card JSON files in {} in {:.2} seconds",
            report.generated,
            self.config.out_dir.display(),
            report.elapsed.as_secs_f64()
        );
        Ok(report)
    }

    async fn generate_one<R: Rng + ?Sized>(
        &self,
        sampler: &Sampler<'_, S>,
        pools: &mut GenerationPools,
        category: Category,
        index: usize,
        rng: &mut R,
    ) -> Result<PathBuf> {
        let records = sampler
            .sample_once(
                pools.pool_mut(category),
                category.field(),
                self.config.retries,
                rng,
            )
            .await?;

        let record = pick_record(&records, rng)?;
        let id = record.str_or_empty("id");
        if id.is_empty() {
            return Err(Error::decode(format!(
                "sampled {category} record has no id"
            )));
        }

        let path = self.config.out_dir.join(format!("card-{index}.json"));
        let body = serde_json::to_string_pretty(record)?;
        tokio::fs::write(&path, body).await?;
        debug!("Wrote {} ({category}) to {}", id, path.display());
        Ok(path)
    }
}

fn pick_record<'r, R: Rng + ?Sized>(records: &'r [Record], rng: &mut R) -> Result<&'r Record> {
    if records.is_empty() {
        return Err(Error::Other("no records to pick from".to_string()));
    }
    Ok(&records[rng.gen_range(0..records.len())])
}

/// Load pools from the API and run a generator over the client's transport
pub async fn generate_corpus<R: Rng + ?Sized>(
    client: &PokemonTcgClient,
    config: GeneratorConfig,
    rng: &mut R,
    progress: &mut dyn ProgressReporter,
) -> Result<GenerationReport> {
    let mut pools = GenerationPools::fetch(client).await?;
    CorpusGenerator::new(client.http(), config)
        .with_page_size(client.config().page_size)
        .with_empty_params(client.config().empty_params)
        .run(&mut pools, rng, progress)
        .await
}
