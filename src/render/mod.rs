//! Presentation adapter: turns records into markup and events into updates.
//!
//! Rendering is a pure function of the record list and the palette state,
//! and always replaces the previous list. Toggle controls are not wired up
//! imperatively; each card carries its record number (`data-number`) and
//! [`html::RenderedList::bindings`] lists the numbers a surface must route
//! toggle requests for.
//!
//! ## Events
//!
//! | Event | Effect |
//! |-------|--------|
//! | `TypeFilterChanged(type)` | re-render `filter_by_type(type)` |
//! | `SearchQueryChanged(text)` | re-render `search(text)` |
//! | `ToggleRequested(number)` | flip the palette, swap one sprite |

pub mod browser;
pub mod html;

pub use browser::{Browser, BrowserEvent, ViewUpdate};
