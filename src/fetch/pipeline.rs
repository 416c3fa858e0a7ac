use futures::stream::{self, StreamExt};
use tracing::{debug, error, info};

use crate::core::pokemon::Pokemon;
use crate::fetch::client::{FetchError, ResourceFetcher};
use crate::fetch::config::FetchConfig;
use crate::parsing::normalize::{normalize_with, DescriptionSelector};
use crate::parsing::pokemon::parse_pokemon;
use crate::parsing::species::parse_species;

/// An item that was attempted and dropped from the catalog
#[derive(Debug)]
pub struct ItemFailure {
    pub number: u32,
    pub error: FetchError,
}

/// Result of a full catalog load
#[derive(Debug, Default)]
pub struct FetchOutcome {
    /// Records in item order (1, 2, ...), failed items absent
    pub records: Vec<Pokemon>,
    pub failures: Vec<ItemFailure>,
}

impl FetchOutcome {
    pub fn attempted(&self) -> usize {
        self.records.len() + self.failures.len()
    }

    pub fn failed_numbers(&self) -> Vec<u32> {
        self.failures.iter().map(|f| f.number).collect()
    }
}

/// Two-stage loader: pokemon resource, then the species resource it links to
pub struct FetchPipeline<F> {
    fetcher: F,
    config: FetchConfig,
    selector: DescriptionSelector,
}

impl<F: ResourceFetcher> FetchPipeline<F> {
    pub fn new(fetcher: F, config: FetchConfig) -> Self {
        let selector = config.selector();
        Self {
            fetcher,
            config,
            selector,
        }
    }

    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Fetch, parse and normalize a single item.
    ///
    /// # Errors
    ///
    /// Returns the first failure of either lookup: a transport error, a
    /// non-success status, or a payload that does not parse.
    pub async fn fetch_one(&self, number: u32) -> Result<Pokemon, FetchError> {
        let url = self.config.pokemon_url(number);
        let body = self.fetcher.get_text(&url).await?;
        let raw = parse_pokemon(&body).map_err(|source| FetchError::Parse { url, source })?;

        // The species URL comes from the payload, never built locally
        let species_url = raw.species.url.clone();
        let body = self.fetcher.get_text(&species_url).await?;
        let species = parse_species(&body).map_err(|source| FetchError::Parse {
            url: species_url,
            source,
        })?;
        debug!(
            number,
            entries = species.flavor_text_entries.len(),
            "fetched species payload"
        );

        Ok(normalize_with(raw, &species, &self.selector))
    }

    /// Attempt every item in `1..=count` and collect what loaded.
    ///
    /// A failed item is logged and skipped; it never stops the remaining
    /// items. Resolves only after every item has been attempted. With
    /// `max_concurrent > 1` items overlap, and the records are re-sorted by
    /// number before returning.
    pub async fn run(&self, count: u32) -> FetchOutcome {
        let concurrency = self.config.max_concurrent.max(1);
        info!(count, concurrency, "Loading catalog");

        let mut outcome = FetchOutcome::default();
        let mut items = stream::iter(1..=count)
            .map(|number| async move { (number, self.fetch_one(number).await) })
            .buffered(concurrency);

        while let Some((number, result)) = items.next().await {
            match result {
                Ok(pokemon) => outcome.records.push(pokemon),
                Err(err) => {
                    error!(number, error = %err, "Error fetching the data");
                    outcome.failures.push(ItemFailure { number, error: err });
                }
            }
        }

        if concurrency > 1 {
            outcome.records.sort_by_key(|p| p.number);
        }

        info!(
            loaded = outcome.records.len(),
            failed = outcome.failures.len(),
            "Catalog load finished"
        );
        outcome
    }

    /// [`run`](Self::run), keeping only the records
    pub async fn load_all(&self, count: u32) -> Vec<Pokemon> {
        self.run(count).await.records
    }
}
