//! # pokedex
//!
//! A library for loading the first-generation Pokédex from PokeAPI and
//! browsing it.
//!
//! Every Pokémon takes two lookups: the pokemon resource (number, name,
//! sprites, types) and the species resource it links to (flavor text).
//! `pokedex` merges the two into one [`Pokemon`] record, loads the whole
//! generation into a [`PokedexStore`], and renders it as a filterable list
//! with a per-card standard/shiny sprite toggle.
//!
//! ## Features
//!
//! - **Fault isolation**: a Pokémon that fails to load is logged and skipped
//! - **Stable order**: the catalog is always in Pokédex order
//! - **Type filter and search**: pure queries over the loaded snapshot
//! - **Shiny toggle**: per-number palette state that survives re-renders
//!
//! ## Example
//!
//! ```rust,no_run
//! use pokedex::fetch::{FetchConfig, FetchPipeline, HttpFetcher};
//! use pokedex::PokedexStore;
//!
//! # async fn demo() -> anyhow::Result<()> {
//! let config = FetchConfig::default();
//! let pipeline = FetchPipeline::new(HttpFetcher::new(&config)?, config);
//!
//! let store = PokedexStore::from_records(pipeline.load_all(151).await);
//! for p in store.filter_by_type("poison") {
//!     println!("#{} {}", p.number, p.name);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: In-memory store and queries
//! - [`core`]: Record and identifier types
//! - [`fetch`]: PokeAPI client and the load pipeline
//! - [`palette`]: Standard/shiny sprite selection
//! - [`parsing`]: PokeAPI payloads and normalization
//! - [`render`]: HTML rendering and interaction events
//! - [`cli`]: Command-line interface implementation
//! - [`web`]: Web server for browsing in a browser

pub mod catalog;
pub mod cli;
pub mod core;
pub mod fetch;
pub mod palette;
pub mod parsing;
pub mod render;
pub mod web;

// Re-export commonly used types for convenience
pub use crate::catalog::store::PokedexStore;
pub use crate::core::pokemon::Pokemon;
pub use crate::core::types::*;
pub use crate::fetch::pipeline::{FetchOutcome, FetchPipeline};
pub use crate::palette::state::PaletteState;
pub use crate::render::browser::{Browser, BrowserEvent, ViewUpdate};
