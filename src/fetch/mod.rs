//! Catalog loading from PokeAPI.
//!
//! Each item takes two dependent lookups: the pokemon resource, then the
//! species resource whose URL the first response supplies. Items are
//! isolated from each other, so one unreachable or malformed item only
//! removes that item from the catalog.
//!
//! ## Example
//!
//! ```rust,no_run
//! use pokedex::fetch::{FetchConfig, FetchPipeline, HttpFetcher};
//!
//! # async fn demo() -> Result<(), pokedex::fetch::FetchError> {
//! let config = FetchConfig::default();
//! let pipeline = FetchPipeline::new(HttpFetcher::new(&config)?, config);
//!
//! let outcome = pipeline.run(151).await;
//! println!("{} loaded, {} failed", outcome.records.len(), outcome.failures.len());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod pipeline;

pub use client::{FetchError, HttpFetcher, ResourceFetcher};
pub use config::FetchConfig;
pub use pipeline::{FetchOutcome, FetchPipeline, ItemFailure};

use crate::catalog::store::PokedexStore;

/// Load `config.count` items over HTTP into a fresh store.
///
/// # Errors
///
/// Returns an error only if the HTTP client cannot be built; item failures
/// are logged and skipped.
pub async fn load_store(config: FetchConfig) -> Result<PokedexStore, FetchError> {
    let count = config.count;
    let pipeline = FetchPipeline::new(HttpFetcher::new(&config)?, config);
    let records = pipeline.load_all(count).await;

    let mut store = PokedexStore::new();
    store.load_all(records);
    Ok(store)
}
