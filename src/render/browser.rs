use std::collections::HashSet;

use crate::catalog::store::PokedexStore;
use crate::core::pokemon::Pokemon;
use crate::core::types::{ImageVariant, PokemonNumber};
use crate::palette::state::PaletteState;
use crate::render::html::{render_list, render_page, RenderedList};

/// Interaction events coming from the rendered surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowserEvent {
    /// Type selector changed; empty clears the filter
    TypeFilterChanged(String),
    /// Search box changed
    SearchQueryChanged(String),
    /// A card's toggle control was activated
    ToggleRequested(PokemonNumber),
}

/// What the surface has to do in response to an event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewUpdate {
    /// Replace the whole list
    Rerender(RenderedList),
    /// Swap one card's sprite
    ImageSwap {
        number: PokemonNumber,
        image: String,
        variant: ImageVariant,
    },
    /// The event referred to a record that is not loaded
    Ignored,
}

/// A loaded catalog plus the palette selections made while browsing it
#[derive(Debug, Default)]
pub struct Browser {
    store: PokedexStore,
    palette: PaletteState,
}

impl Browser {
    pub fn new(store: PokedexStore) -> Self {
        Self {
            store,
            palette: PaletteState::new(),
        }
    }

    pub fn store(&self) -> &PokedexStore {
        &self.store
    }

    pub fn palette(&self) -> &PaletteState {
        &self.palette
    }

    /// Records passing both the type filter and the search query.
    /// `None` or an empty string disables that criterion.
    pub fn visible(&self, kind: Option<&str>, query: Option<&str>) -> Vec<&Pokemon> {
        let mut records = self.store.filter_by_type(kind.unwrap_or(""));
        if let Some(query) = query.filter(|q| !q.is_empty()) {
            let matched: HashSet<PokemonNumber> =
                self.store.search(query).iter().map(|p| p.number).collect();
            records.retain(|p| matched.contains(&p.number));
        }
        records
    }

    pub fn render(&self, records: &[&Pokemon]) -> RenderedList {
        render_list(records, &self.palette)
    }

    /// Full page for the given filter and query
    pub fn page(&self, kind: Option<&str>, query: Option<&str>) -> String {
        let records = self.visible(kind, query);
        render_page(&records, &self.store.categories(), &self.palette)
    }

    /// Toggle a record's palette and return the sprite now displayed,
    /// or `None` if no record has that number.
    pub fn toggle(&mut self, number: PokemonNumber) -> Option<&str> {
        let pokemon = self.store.get(number)?;
        Some(self.palette.toggle(pokemon))
    }

    /// Apply an event. Filter and search events each replace the list on
    /// their own, the way the selector and the search box act independently.
    pub fn handle(&mut self, event: BrowserEvent) -> ViewUpdate {
        match event {
            BrowserEvent::TypeFilterChanged(kind) => {
                ViewUpdate::Rerender(self.render(&self.store.filter_by_type(&kind)))
            }
            BrowserEvent::SearchQueryChanged(query) => {
                ViewUpdate::Rerender(self.render(&self.store.search(&query)))
            }
            BrowserEvent::ToggleRequested(number) => {
                let Some(image) = self.toggle(number).map(str::to_string) else {
                    return ViewUpdate::Ignored;
                };
                let variant = self
                    .store
                    .get(number)
                    .map_or(ImageVariant::Primary, |p| self.palette.variant(p));
                ViewUpdate::ImageSwap {
                    number,
                    image,
                    variant,
                }
            }
        }
    }
}
