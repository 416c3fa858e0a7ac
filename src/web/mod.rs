//! Web server for browsing the loaded Pokédex.
//!
//! This module serves the rendered card list with Axum. The page script
//! sends the three interaction events back as requests and swaps the
//! returned markup or sprite into place.
//!
//! ## Starting the Server
//!
//! ```text
//! # Start on default port 8080
//! pokedex serve
//!
//! # Custom port and auto-open browser
//! pokedex serve --port 3000 --open
//!
//! # Bind to all interfaces
//! pokedex serve --address 0.0.0.0
//! ```
//!
//! ## Endpoints
//!
//! - `GET /` - Main page (accepts `type` and `q`)
//! - `GET /fragments/list` - Card list markup for a filter change or search
//! - `GET /api/pokemon` - Catalog as JSON (accepts `type` and `q`)
//! - `GET /api/types` - Type names for the selector
//! - `GET /api/catalog` - Versioned snapshot of the loaded catalog
//! - `POST /api/toggle/{number}` - Toggle a card between standard and shiny

pub mod server;
