use serde::{Deserialize, Serialize};

use crate::core::types::{ImageVariant, PokemonNumber};

/// A normalized catalog entry, merged from the pokemon and species payloads
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pokemon {
    /// Pokédex number (unique within a catalog)
    pub number: PokemonNumber,

    /// Display name as returned by the API (lower case, e.g. "bulbasaur")
    pub name: String,

    /// Standard sprite URL
    pub image: String,

    /// Shiny sprite URL, if the API provides one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shiny: Option<String>,

    /// Type names in slot order, kept verbatim
    pub types: Vec<String>,

    /// Cleaned flavor text, or the fallback sentinel
    pub description: String,
}

impl Pokemon {
    pub fn new(
        number: impl Into<PokemonNumber>,
        name: impl Into<String>,
        image: impl Into<String>,
    ) -> Self {
        Self {
            number: number.into(),
            name: name.into(),
            image: image.into(),
            shiny: None,
            types: Vec::new(),
            description: String::new(),
        }
    }

    #[must_use]
    pub fn with_shiny(mut self, shiny: impl Into<String>) -> Self {
        self.shiny = Some(shiny.into());
        self
    }

    #[must_use]
    pub fn with_types<S: Into<String>>(mut self, types: impl IntoIterator<Item = S>) -> Self {
        self.types = types.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Types joined the way the type filter matches against them ("grass, poison")
    pub fn joined_types(&self) -> String {
        self.types.join(", ")
    }

    pub fn has_shiny(&self) -> bool {
        self.shiny.is_some()
    }

    /// Sprite URL for a variant. A missing shiny sprite pins the result to the standard one.
    pub fn image_for(&self, variant: ImageVariant) -> &str {
        match variant {
            ImageVariant::Primary => &self.image,
            ImageVariant::Alternate => self.shiny.as_deref().unwrap_or(&self.image),
        }
    }
}
