//! Command-line argument definitions.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "twentyone",
    version,
    about = "Single-table blackjack in the terminal"
)]
pub struct TwentyoneCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play interactively against the dealer
    Play {
        /// RNG seed for a reproducible shoe
        #[arg(long)]
        seed: Option<u64>,
        /// Stop after this many resolved rounds
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        rounds: Option<u32>,
        /// Append one JSON line per resolved round to this file
        #[arg(long)]
        log: Option<String>,
    },
    /// Deal one round and print the opening table
    Deal {
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}
