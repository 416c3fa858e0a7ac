//! In-memory Pokédex storage and queries.
//!
//! The store is filled once from a finished catalog load and is read-only
//! afterwards. Queries never mutate it and always return records in the
//! order they were loaded.
//!
//! ## Example
//!
//! ```rust
//! use pokedex::catalog::store::PokedexStore;
//! use pokedex::core::pokemon::Pokemon;
//!
//! let store = PokedexStore::from_records(vec![
//!     Pokemon::new(1, "bulbasaur", "1.png").with_types(["grass", "poison"]),
//!     Pokemon::new(4, "charmander", "4.png").with_types(["fire"]),
//! ]);
//!
//! assert_eq!(store.search("char")[0].name, "charmander");
//! assert_eq!(store.search("4")[0].name, "charmander");
//! assert_eq!(store.filter_by_type("poison")[0].name, "bulbasaur");
//! ```

pub mod store;
