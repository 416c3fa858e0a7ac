//! Per-record sprite palette selection (standard vs. shiny).
//!
//! The state is keyed by [`PokemonNumber`](crate::core::types::PokemonNumber)
//! and lives apart from the catalog store, so a record keeps its selection
//! across every filtered or searched re-render.

pub mod state;
