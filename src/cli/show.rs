use clap::Args;

use crate::cli::{FetchArgs, OutputFormat};
use crate::fetch::{FetchPipeline, HttpFetcher};

#[derive(Args)]
pub struct ShowArgs {
    /// Pokédex number
    #[arg(required = true)]
    pub number: u32,

    #[command(flatten)]
    pub fetch: FetchArgs,
}

pub fn run(args: ShowArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let config = args.fetch.to_config();
    if verbose {
        eprintln!("Fetching {}", config.pokemon_url(args.number));
    }

    let number = args.number;
    let pipeline = FetchPipeline::new(HttpFetcher::new(&config)?, config);
    let rt = tokio::runtime::Runtime::new()?;
    let pokemon = rt.block_on(pipeline.fetch_one(number))?;

    match format {
        OutputFormat::Text => {
            println!("#{} {}\n", pokemon.number, pokemon.name);
            println!("Types:  {}", pokemon.joined_types());
            println!("Image:  {}", pokemon.image);
            println!("Shiny:  {}", pokemon.shiny.as_deref().unwrap_or("-"));
            println!("\n{}", pokemon.description);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&pokemon)?);
        }
        OutputFormat::Tsv => {
            println!("number\tname\ttypes\timage\tshiny\tdescription");
            println!(
                "{}\t{}\t{}\t{}\t{}\t{}",
                pokemon.number,
                pokemon.name,
                pokemon.types.join(","),
                pokemon.image,
                pokemon.shiny.as_deref().unwrap_or(""),
                pokemon.description
            );
        }
    }

    Ok(())
}
