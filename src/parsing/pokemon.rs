use serde::Deserialize;

/// A `{ name, url }` pair as PokeAPI uses for every linked resource
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// A bare `{ url }` link to another resource
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ResourceRef {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawSprites {
    /// Standard sprite. Required: a pokemon payload without one is rejected.
    pub front_default: String,
    #[serde(default)]
    pub front_shiny: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawTypeSlot {
    #[serde(default)]
    pub slot: u32,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

/// The subset of `GET /api/v2/pokemon/{id}` this crate reads
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawPokemon {
    pub id: u32,
    pub name: String,
    pub sprites: RawSprites,
    #[serde(default)]
    pub types: Vec<RawTypeSlot>,
    pub species: ResourceRef,
}

impl RawPokemon {
    /// Type names in the order the API lists them
    pub fn type_names(&self) -> Vec<String> {
        self.types.iter().map(|t| t.kind.name.clone()).collect()
    }
}

/// Parse a pokemon payload.
///
/// # Errors
///
/// Returns an error if the body is not JSON or lacks a required field
/// (`id`, `name`, `sprites.front_default`, `species.url`).
pub fn parse_pokemon(body: &str) -> Result<RawPokemon, serde_json::Error> {
    serde_json::from_str(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BULBASAUR: &str = r#"{
        "id": 1,
        "name": "bulbasaur",
        "height": 7,
        "sprites": {
            "front_default": "https://raw.example/sprites/1.png",
            "front_shiny": "https://raw.example/sprites/shiny/1.png",
            "back_default": null
        },
        "types": [
            {"slot": 1, "type": {"name": "grass", "url": "https://pokeapi.co/api/v2/type/12/"}},
            {"slot": 2, "type": {"name": "poison", "url": "https://pokeapi.co/api/v2/type/4/"}}
        ],
        "species": {"name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon-species/1/"}
    }"#;

    #[test]
    fn test_parse_pokemon() {
        let raw = parse_pokemon(BULBASAUR).unwrap();
        assert_eq!(raw.id, 1);
        assert_eq!(raw.name, "bulbasaur");
        assert_eq!(raw.type_names(), vec!["grass", "poison"]);
        assert_eq!(
            raw.species.url,
            "https://pokeapi.co/api/v2/pokemon-species/1/"
        );
        assert_eq!(
            raw.sprites.front_shiny.as_deref(),
            Some("https://raw.example/sprites/shiny/1.png")
        );
    }

    #[test]
    fn test_parse_pokemon_null_shiny() {
        let body = r#"{"id": 9, "name": "x", "sprites": {"front_default": "a.png", "front_shiny": null},
                       "types": [], "species": {"url": "s"}}"#;
        let raw = parse_pokemon(body).unwrap();
        assert!(raw.sprites.front_shiny.is_none());
    }

    #[test]
    fn test_parse_pokemon_missing_species_is_error() {
        let body = r#"{"id": 9, "name": "x", "sprites": {"front_default": "a.png"}}"#;
        assert!(parse_pokemon(body).is_err());
    }

    #[test]
    fn test_parse_pokemon_not_json() {
        assert!(parse_pokemon("<html>Not Found</html>").is_err());
    }
}
