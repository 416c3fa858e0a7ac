use std::collections::HashMap;

use crate::core::pokemon::Pokemon;
use crate::core::types::{ImageVariant, PokemonNumber};

/// Which records currently show their shiny sprite. Unseen numbers are standard.
#[derive(Debug, Clone, Default)]
pub struct PaletteState {
    shiny: HashMap<PokemonNumber, bool>,
}

impl PaletteState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the stored flag for `number` and return the new value
    pub fn flip(&mut self, number: PokemonNumber) -> bool {
        let flag = self.shiny.entry(number).or_insert(false);
        *flag = !*flag;
        *flag
    }

    /// Flip `pokemon`'s flag and return the sprite now displayed.
    ///
    /// Without a shiny sprite the flag still flips, but the standard
    /// sprite is returned either way.
    pub fn toggle<'a>(&mut self, pokemon: &'a Pokemon) -> &'a str {
        self.flip(pokemon.number);
        self.displayed(pokemon)
    }

    /// Raw bookkeeping flag, regardless of whether a shiny sprite exists
    pub fn is_alternate(&self, number: PokemonNumber) -> bool {
        self.shiny.get(&number).copied().unwrap_or(false)
    }

    /// The variant actually shown for `pokemon`
    pub fn variant(&self, pokemon: &Pokemon) -> ImageVariant {
        if pokemon.has_shiny() && self.is_alternate(pokemon.number) {
            ImageVariant::Alternate
        } else {
            ImageVariant::Primary
        }
    }

    /// Sprite URL to render for `pokemon`
    pub fn displayed<'a>(&self, pokemon: &'a Pokemon) -> &'a str {
        pokemon.image_for(self.variant(pokemon))
    }

    /// Back to all-standard
    pub fn reset(&mut self) {
        self.shiny.clear();
    }
}
