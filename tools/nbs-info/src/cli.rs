//! CLI command definitions using clap

use clap::{Parser, Subcommand};
use nether_nbs::TempoRounding;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "nbs-info")]
#[command(about = "Inspect NBS songs as the decoder sees them")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the song header and layer table
    Summary {
        #[command(flatten)]
        input: InputArgs,
    },

    /// List every note, tick by tick
    Notes {
        #[command(flatten)]
        input: InputArgs,

        /// Only list notes up to this tick
        #[arg(long)]
        until: Option<u32>,
    },

    /// Dump the decoded song as JSON
    Json {
        #[command(flatten)]
        input: InputArgs,

        /// Pretty-print the output
        #[arg(long)]
        pretty: bool,
    },
}

/// Options shared by every command
#[derive(clap::Args)]
pub struct InputArgs {
    /// Path to the .nbs file
    pub file: PathBuf,

    /// Sound registry snapshot (TOML)
    #[arg(long, conflicts_with = "legacy_registry")]
    pub registry: Option<PathBuf>,

    /// Resolve sounds against the pre-1.13 host naming
    #[arg(long)]
    pub legacy_registry: bool,

    /// Play instruments 10-15 as instrument 0
    #[arg(long)]
    pub legacy_instruments: bool,

    /// Tempo rounding mode (round or ceil)
    #[arg(long, default_value = "round")]
    pub tempo_rounding: TempoRounding,
}
