use clap::Args;

use crate::cli::{FetchArgs, OutputFormat};
use crate::core::pokemon::Pokemon;
use crate::fetch::load_store;
use crate::render::Browser;

#[derive(Args)]
pub struct ListArgs {
    /// Only Pokémon whose types contain this text (e.g. "poison")
    #[arg(short = 't', long = "type")]
    pub kind: Option<String>,

    /// Only Pokémon whose name contains this text, or whose number equals it
    #[arg(short, long)]
    pub search: Option<String>,

    #[command(flatten)]
    pub fetch: FetchArgs,
}

pub fn run(args: ListArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let config = args.fetch.to_config();
    let rt = tokio::runtime::Runtime::new()?;
    let store = rt.block_on(load_store(config))?;

    if verbose {
        eprintln!("Loaded {} Pokémon", store.len());
    }

    let browser = Browser::new(store);
    let records = browser.visible(args.kind.as_deref(), args.search.as_deref());
    print_records(&records, format)
}

fn print_records(records: &[&Pokemon], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            let name_width = column_width(records.iter().map(|p| p.name.clone()), 4);
            let types_width = column_width(records.iter().map(|p| p.joined_types()), 5);

            println!("Pokédex ({} Pokémon)\n", records.len());
            println!(
                "{:>4} {:<name_w$} {:<types_w$} Description",
                "No.",
                "Name",
                "Types",
                name_w = name_width,
                types_w = types_width
            );
            println!("{}", "-".repeat(4 + name_width + types_width + 3 + 40));

            for p in records {
                println!(
                    "{:>4} {:<name_w$} {:<types_w$} {}",
                    p.number,
                    p.name,
                    p.joined_types(),
                    truncate(&p.description, 60),
                    name_w = name_width,
                    types_w = types_width
                );
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(records)?);
        }
        OutputFormat::Tsv => {
            println!("number\tname\ttypes\timage\tshiny\tdescription");
            for p in records {
                println!(
                    "{}\t{}\t{}\t{}\t{}\t{}",
                    p.number,
                    p.name,
                    p.types.join(","),
                    p.image,
                    p.shiny.as_deref().unwrap_or(""),
                    p.description
                );
            }
        }
    }

    Ok(())
}

/// Widest value in characters, never below `min`
fn column_width(values: impl Iterator<Item = String>, min: usize) -> usize {
    values.map(|v| v.chars().count()).max().unwrap_or(min).max(min)
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{cut}...")
    }
}
