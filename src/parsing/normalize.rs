use tracing::debug;

use crate::core::pokemon::Pokemon;
use crate::core::types::PokemonNumber;
use crate::parsing::pokemon::RawPokemon;
use crate::parsing::species::{clean_flavor_text, RawSpecies};

/// Description used when no flavor text matches the selector
pub const FALLBACK_DESCRIPTION: &str = "Description not available";

/// Which flavor-text entry becomes the description
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptionSelector {
    pub language: String,
    pub version: String,
}

impl DescriptionSelector {
    pub fn new(language: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            version: version.into(),
        }
    }
}

impl Default for DescriptionSelector {
    fn default() -> Self {
        Self::new("en", "red")
    }
}

/// Merge a pokemon payload and its species payload using the default selector
pub fn normalize(raw: RawPokemon, species: &RawSpecies) -> Pokemon {
    normalize_with(raw, species, &DescriptionSelector::default())
}

/// Merge a pokemon payload and its species payload into a catalog record.
///
/// Never fails: a missing flavor text yields [`FALLBACK_DESCRIPTION`] and a
/// missing shiny sprite yields `shiny: None`. Types are kept verbatim.
pub fn normalize_with(
    raw: RawPokemon,
    species: &RawSpecies,
    selector: &DescriptionSelector,
) -> Pokemon {
    let description = if let Some(text) = species.flavor_text(&selector.language, &selector.version)
    {
        clean_flavor_text(text)
    } else {
        debug!(
            number = raw.id,
            language = %selector.language,
            version = %selector.version,
            "no matching flavor text"
        );
        FALLBACK_DESCRIPTION.to_string()
    };

    if raw.sprites.front_shiny.is_none() {
        debug!(number = raw.id, "no shiny sprite");
    }

    let types = raw.type_names();
    Pokemon {
        number: PokemonNumber(raw.id),
        name: raw.name,
        image: raw.sprites.front_default,
        shiny: raw.sprites.front_shiny,
        types,
        description,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::pokemon::parse_pokemon;
    use crate::parsing::species::parse_species;

    fn charmander() -> RawPokemon {
        parse_pokemon(
            r#"{"id": 4, "name": "charmander",
                "sprites": {"front_default": "4.png", "front_shiny": "shiny/4.png"},
                "types": [{"slot": 1, "type": {"name": "fire", "url": ""}}],
                "species": {"url": "https://pokeapi.co/api/v2/pokemon-species/4/"}}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_normalize_selects_red_english_entry() {
        let species = parse_species(
            r#"{"flavor_text_entries": [
                {"flavor_text": "Obviously prefers\nhot places.", "language": {"name": "en"}, "version": {"name": "red"}},
                {"flavor_text": "Other", "language": {"name": "en"}, "version": {"name": "yellow"}}
            ]}"#,
        )
        .unwrap();

        let p = normalize(charmander(), &species);
        assert_eq!(p.number, PokemonNumber(4));
        assert_eq!(p.name, "charmander");
        assert_eq!(p.image, "4.png");
        assert_eq!(p.shiny.as_deref(), Some("shiny/4.png"));
        assert_eq!(p.types, vec!["fire"]);
        assert_eq!(p.description, "Obviously prefers hot places.");
    }

    #[test]
    fn test_normalize_falls_back_without_match() {
        let p = normalize(charmander(), &RawSpecies::default());
        assert_eq!(p.description, FALLBACK_DESCRIPTION);
    }

    #[test]
    fn test_normalize_with_custom_selector() {
        let species = parse_species(
            r#"{"flavor_text_entries": [
                {"flavor_text": "Yellow text", "language": {"name": "en"}, "version": {"name": "yellow"}}
            ]}"#,
        )
        .unwrap();

        let selector = DescriptionSelector::new("en", "yellow");
        let p = normalize_with(charmander(), &species, &selector);
        assert_eq!(p.description, "Yellow text");
    }

    #[test]
    fn test_normalize_keeps_type_case() {
        let mut raw = charmander();
        raw.types[0].kind.name = "Fire".to_string();
        let p = normalize(raw, &RawSpecies::default());
        assert_eq!(p.types, vec!["Fire"]);
    }
}
