//! PokeAPI payload types and the record normalizer.
//!
//! Two payloads make up one catalog record:
//!
//! - **pokemon** (`/api/v2/pokemon/{id}`): number, name, sprites, types and
//!   a link to the species resource
//! - **species** (`/api/v2/pokemon-species/{id}`): localized flavor text
//!   entries, one per language and game version
//!
//! [`normalize::normalize`] merges them into a [`crate::core::pokemon::Pokemon`].
//!
//! ## Example
//!
//! ```rust
//! use pokedex::parsing::normalize::{normalize, FALLBACK_DESCRIPTION};
//! use pokedex::parsing::pokemon::parse_pokemon;
//! use pokedex::parsing::species::RawSpecies;
//!
//! let raw = parse_pokemon(r#"{"id": 25, "name": "pikachu",
//!     "sprites": {"front_default": "25.png", "front_shiny": null},
//!     "types": [{"slot": 1, "type": {"name": "electric"}}],
//!     "species": {"url": "https://pokeapi.co/api/v2/pokemon-species/25/"}}"#).unwrap();
//!
//! let pikachu = normalize(raw, &RawSpecies::default());
//! assert_eq!(pikachu.types, vec!["electric"]);
//! assert_eq!(pikachu.description, FALLBACK_DESCRIPTION);
//! ```
//!
//! ## Fields Read
//!
//! | Payload | Field | Required |
//! |---------|-------|----------|
//! | pokemon | `id`, `name` | Yes |
//! | pokemon | `sprites.front_default` | Yes |
//! | pokemon | `sprites.front_shiny` | No |
//! | pokemon | `types[].type.name` | No |
//! | pokemon | `species.url` | Yes |
//! | species | `flavor_text_entries[]` | No |

pub mod normalize;
pub mod pokemon;
pub mod species;
