//! Core data types for the Pokédex catalog.
//!
//! - [`Pokemon`](pokemon::Pokemon): one normalized catalog record
//! - [`PokemonNumber`](types::PokemonNumber): the record identity key
//! - [`ImageVariant`](types::ImageVariant): standard vs. shiny sprite selection

pub mod pokemon;
pub mod types;
