use serde::{Deserialize, Serialize};

/// National Pokédex number, the sole identity key of a catalog record
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PokemonNumber(pub u32);

impl PokemonNumber {
    #[must_use]
    pub fn new(n: u32) -> Self {
        Self(n)
    }
}

impl std::fmt::Display for PokemonNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for PokemonNumber {
    fn from(n: u32) -> Self {
        Self(n)
    }
}

/// Which of the two sprite variants is selected for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageVariant {
    /// Standard palette (`front_default`)
    #[default]
    Primary,
    /// Alternate palette (`front_shiny`)
    Alternate,
}

impl std::fmt::Display for ImageVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Primary => write!(f, "standard"),
            Self::Alternate => write!(f, "shiny"),
        }
    }
}
