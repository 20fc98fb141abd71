//! Pokemon Atlas command line.
//!
//! Every subcommand prints plain text to stdout; logs go to stderr and are
//! filtered with `RUST_LOG`.

use std::io::Read;

use clap::{Parser, Subcommand};
use pokemon_atlas::mcp_interface::{
    counters_display, evolution_display, export_set_display, import_set_display, rank_display,
    search_display,
};
use pokemon_atlas::{AtlasConfig, PokeApiClient};
use tracing::info;

#[derive(Parser)]
#[command(name = "pokemon-atlas")]
#[command(about = "Type matchups, counters, evolution chains and team sets", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Rank all attacking types against one or two defending types
    Rank {
        #[arg(required = true, num_args = 1..=2)]
        types: Vec<String>,
    },

    /// Find creatures covering several super-effective types
    Counters {
        #[arg(required = true, num_args = 1..=2)]
        types: Vec<String>,

        /// Minimum number of matched attacking types
        #[arg(long)]
        min_match: Option<usize>,

        /// Number of counters to show
        #[arg(long)]
        max: Option<usize>,
    },

    /// Show the evolution family of a species
    Evolution { species: String },

    /// Search creature names by substring
    Search {
        query: String,

        #[arg(long, default_value_t = 20)]
        limit: usize,
    },

    /// Export a starting set for a creature, or normalize pasted sets
    #[command(subcommand)]
    Set(SetCommand),
}

#[derive(Subcommand)]
enum SetCommand {
    /// Print a seeded set for a creature
    Export { name: String },

    /// Read set blocks from stdin and print them normalized
    Import,
}

fn connect() -> Result<(AtlasConfig, PokeApiClient), Box<dyn std::error::Error>> {
    let config = AtlasConfig::from_env()?;
    info!(base_url = %config.base_url, "using data service");
    let client = PokeApiClient::new(&config)?;
    Ok((config, client))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let output = match cli.command {
        Command::Rank { types } => rank_display(&types),
        Command::Counters {
            types,
            min_match,
            max,
        } => {
            let (config, client) = connect()?;
            let mut options = config.counters;
            if let Some(min_match) = min_match {
                options = options.with_min_match_types(min_match);
            }
            if let Some(max) = max {
                options = options.with_max_results(max);
            }
            counters_display(&client, &types, &options).await
        }
        Command::Evolution { species } => {
            let (_, client) = connect()?;
            evolution_display(&client, &species).await
        }
        Command::Search { query, limit } => {
            let (_, client) = connect()?;
            search_display(&client, &query, limit).await
        }
        Command::Set(SetCommand::Export { name }) => {
            let (_, client) = connect()?;
            export_set_display(&client, &name).await
        }
        Command::Set(SetCommand::Import) => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            import_set_display(&text)
        }
    };

    println!("{}", output.trim_end());
    Ok(())
}
