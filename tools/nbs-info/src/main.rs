//! nbs-info - NBS song inspector
//!
//! Decodes a Note Block Studio file with the same decoder the player uses
//! and prints what came out: header, layer table, per-tick notes or JSON.

mod cli;
mod display;

use anyhow::{Context, Result};
use clap::Parser;
use nether_nbs::{ParseOptions, Song, SoundRegistry, parse_nbs_file};

use cli::{Cli, Commands, InputArgs};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Summary { input } => {
            let song = load(&input)?;
            print!("{}", display::summary(&song));
        }

        Commands::Notes { input, until } => {
            let song = load(&input)?;
            print!("{}", display::note_listing(&song, until));
        }

        Commands::Json { input, pretty } => {
            let song = load(&input)?;
            let json = if pretty {
                serde_json::to_string_pretty(&song)?
            } else {
                serde_json::to_string(&song)?
            };
            println!("{}", json);
        }
    }

    Ok(())
}

fn load(input: &InputArgs) -> Result<Song> {
    let registry = if let Some(path) = &input.registry {
        tracing::debug!("Loading sound registry from {:?}", path);
        SoundRegistry::load(path)
            .with_context(|| format!("Failed to load sound registry {:?}", path))?
    } else if input.legacy_registry {
        SoundRegistry::legacy()
    } else {
        SoundRegistry::modern()
    };

    let options = ParseOptions {
        legacy_instruments: input.legacy_instruments,
        tempo_rounding: input.tempo_rounding,
    };

    tracing::info!("Decoding {:?}", input.file);
    parse_nbs_file(&input.file, &registry, options)
        .with_context(|| format!("Failed to decode {:?}", input.file))
}
