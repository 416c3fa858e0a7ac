use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use thiserror::Error;
use tracing::warn;

use crate::core::pokemon::Pokemon;
use crate::core::types::PokemonNumber;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to serialize catalog: {0}")]
    SerializeError(#[from] serde_json::Error),
}

/// Catalog export format version
pub const CATALOG_VERSION: &str = "1.0.0";

/// Serializable snapshot of the store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogData {
    pub version: String,
    pub created_at: String,
    pub pokemon: Vec<Pokemon>,
}

/// The loaded Pokédex.
///
/// Written only by [`load_all`](Self::load_all), which replaces the whole
/// snapshot. Every query is a pure read that returns records in load order.
#[derive(Debug, Default)]
pub struct PokedexStore {
    pokemon: Vec<Pokemon>,

    /// Index: number -> index in pokemon vec
    number_to_index: HashMap<PokemonNumber, usize>,
}

impl PokedexStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store already loaded with `records`
    pub fn from_records(records: Vec<Pokemon>) -> Self {
        let mut store = Self::new();
        store.load_all(records);
        store
    }

    /// Replace the current snapshot with `records`.
    ///
    /// Numbers are the identity key; a record repeating an earlier number
    /// is dropped.
    pub fn load_all(&mut self, records: Vec<Pokemon>) {
        self.pokemon = Vec::with_capacity(records.len());
        self.number_to_index = HashMap::with_capacity(records.len());

        for record in records {
            if self.number_to_index.contains_key(&record.number) {
                warn!(number = %record.number, name = %record.name, "Dropping duplicate record");
                continue;
            }
            self.number_to_index
                .insert(record.number, self.pokemon.len());
            self.pokemon.push(record);
        }
    }

    /// The full snapshot
    pub fn all(&self) -> &[Pokemon] {
        &self.pokemon
    }

    /// Get a record by number
    pub fn get(&self, number: PokemonNumber) -> Option<&Pokemon> {
        self.number_to_index
            .get(&number)
            .map(|&idx| &self.pokemon[idx])
    }

    /// Records whose comma-joined types contain `kind` as a substring.
    ///
    /// Matching is on the joined string, so `"poiso"` matches `"poison"`.
    /// An empty `kind` returns everything.
    pub fn filter_by_type(&self, kind: &str) -> Vec<&Pokemon> {
        if kind.is_empty() {
            return self.pokemon.iter().collect();
        }
        self.pokemon
            .iter()
            .filter(|p| p.joined_types().contains(kind))
            .collect()
    }

    /// Records whose name contains `query` ignoring case, or whose number
    /// equals `query` exactly. An empty query returns everything.
    pub fn search(&self, query: &str) -> Vec<&Pokemon> {
        let needle = query.to_lowercase();
        self.pokemon
            .iter()
            .filter(|p| p.name.to_lowercase().contains(&needle) || p.number.to_string() == query)
            .collect()
    }

    /// Distinct type names across the catalog, sorted
    pub fn categories(&self) -> Vec<&str> {
        self.pokemon
            .iter()
            .flat_map(|p| p.types.iter().map(String::as_str))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Versioned, timestamped copy of the current snapshot
    pub fn snapshot(&self) -> CatalogData {
        CatalogData {
            version: CATALOG_VERSION.to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
            pokemon: self.pokemon.clone(),
        }
    }

    /// Export the snapshot to JSON
    pub fn to_json(&self) -> Result<String, CatalogError> {
        Ok(serde_json::to_string_pretty(&self.snapshot())?)
    }

    /// Number of records in the store
    pub fn len(&self) -> usize {
        self.pokemon.len()
    }

    /// Check if store is empty
    pub fn is_empty(&self) -> bool {
        self.pokemon.is_empty()
    }
}
