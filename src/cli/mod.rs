//! Command-line interface for pokedex.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **list**: Load the catalog and print it, optionally filtered by type or searched
//! - **show**: Load and print a single record
//! - **serve**: Load the catalog and start the interactive web interface
//!
//! ## Usage
//!
//! ```text
//! # Print all 151
//! pokedex list
//!
//! # Only poison types, as JSON
//! pokedex list --type poison --format json
//!
//! # Search by name or number
//! pokedex list --search char
//! pokedex show 25
//!
//! # Start web UI
//! pokedex serve --port 8080 --open
//! ```

use clap::{Parser, Subcommand};

use crate::fetch::config::{
    FetchConfig, DEFAULT_BASE_URL, DEFAULT_COUNT, DEFAULT_LANGUAGE, DEFAULT_TIMEOUT_SECS,
    DEFAULT_VERSION,
};

pub mod list;
pub mod show;

#[derive(Parser)]
#[command(name = "pokedex")]
#[command(version)]
#[command(about = "Browse the first-generation Pokédex from PokeAPI")]
#[command(
    long_about = "pokedex loads the first 151 Pokémon from PokeAPI, merges each with its species description, and lets you filter and search the result.\n\nA Pokémon that fails to load is logged and left out; it never stops the rest of the catalog from loading."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load the catalog and list it
    List(list::ListArgs),

    /// Load and show one Pokémon
    Show(show::ShowArgs),

    /// Start the web server
    Serve(ServeArgs),
}

/// Where and how to load the catalog from
#[derive(clap::Args, Clone, Debug)]
pub struct FetchArgs {
    /// Base URL of the pokemon resource (the number is appended)
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Number of Pokémon to load, starting at 1
    #[arg(long, default_value_t = DEFAULT_COUNT)]
    pub count: u32,

    /// Flavor text language
    #[arg(long, default_value = DEFAULT_LANGUAGE)]
    pub language: String,

    /// Flavor text game version
    #[arg(long = "game-version", default_value = DEFAULT_VERSION)]
    pub game_version: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Pokémon fetched at once (1 = strictly one after another)
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u16).range(1..=32))]
    pub concurrency: u16,
}

impl FetchArgs {
    pub fn to_config(&self) -> FetchConfig {
        FetchConfig {
            base_url: self.base_url.clone(),
            count: self.count,
            language: self.language.clone(),
            version: self.game_version.clone(),
            timeout_secs: self.timeout,
            max_concurrent: usize::from(self.concurrency),
            ..FetchConfig::default()
        }
    }
}

#[derive(clap::Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(short, long, default_value = "8080")]
    pub port: u16,

    /// Address to bind to
    #[arg(short, long, default_value = "127.0.0.1")]
    pub address: String,

    /// Open browser automatically
    #[arg(long)]
    pub open: bool,

    #[command(flatten)]
    pub fetch: FetchArgs,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_fetch_args_defaults_match_config() {
        let cli = Cli::parse_from(["pokedex", "list"]);
        let Commands::List(args) = cli.command else {
            panic!("expected list");
        };
        assert_eq!(args.fetch.to_config(), FetchConfig::default());
    }

    #[test]
    fn test_fetch_args_override() {
        let cli = Cli::parse_from([
            "pokedex",
            "serve",
            "--count",
            "3",
            "--game-version",
            "blue",
            "--concurrency",
            "4",
        ]);
        let Commands::Serve(args) = cli.command else {
            panic!("expected serve");
        };
        let config = args.fetch.to_config();
        assert_eq!(config.count, 3);
        assert_eq!(config.version, "blue");
        assert_eq!(config.max_concurrent, 4);
        assert_eq!(args.port, 8080);
    }

    #[test]
    fn test_zero_concurrency_rejected() {
        assert!(Cli::try_parse_from(["pokedex", "list", "--concurrency", "0"]).is_err());
    }
}
