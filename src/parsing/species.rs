use serde::Deserialize;

use crate::parsing::pokemon::NamedResource;

/// One localized, per-game Pokédex entry
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FlavorTextEntry {
    pub flavor_text: String,
    pub language: NamedResource,
    pub version: NamedResource,
}

/// The subset of `GET /api/v2/pokemon-species/{id}` this crate reads
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawSpecies {
    #[serde(default)]
    pub flavor_text_entries: Vec<FlavorTextEntry>,
}

impl RawSpecies {
    /// First entry whose language and game version both match
    pub fn flavor_text(&self, language: &str, version: &str) -> Option<&str> {
        self.flavor_text_entries
            .iter()
            .find(|e| e.language.name == language && e.version.name == version)
            .map(|e| e.flavor_text.as_str())
    }
}

/// Parse a species payload.
///
/// # Errors
///
/// Returns an error if the body is not JSON or an entry is malformed.
pub fn parse_species(body: &str) -> Result<RawSpecies, serde_json::Error> {
    serde_json::from_str(body)
}

/// Replace each form feed, line feed and carriage return with one space.
///
/// Substitution is one-for-one: "a\n\nb" becomes "a  b".
pub fn clean_flavor_text(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\u{c}' | '\n' | '\r' => ' ',
            other => other,
        })
        .collect()
}
