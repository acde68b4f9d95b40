//! Deal command handler for inspecting a single opening deal.
//!
//! Shuffles a shoe, deals one round, and prints the table as a player would
//! see it: the dealer's first card face down, the odds line, and the outcome
//! if either side was dealt a natural. Balance, bet step and the fallback
//! seed come from the loaded configuration.

use crate::config::Config;
use crate::error::CliError;
use crate::formatters::format_table;
use std::io::Write;
use twentyone_engine::engine::Engine;

/// Handle the deal command.
///
/// # Arguments
///
/// * `config` - Loaded configuration (balance, bet step, fallback seed)
/// * `seed` - Optional RNG seed for deterministic dealing, overriding `config.seed`
/// * `out` - Output stream for command results
///
/// # Examples
///
/// ```ignore
/// use twentyone_cli::commands::deal::handle_deal_command;
/// let mut out = Vec::new();
/// handle_deal_command(&Config::default(), Some(42), &mut out).unwrap();
/// ```
pub fn handle_deal_command(
    config: &Config,
    seed: Option<u64>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let seed = seed.or(config.seed).unwrap_or_else(rand::random);
    let eng = Engine::new(Some(seed), config.engine_config())?;
    writeln!(out, "Seed: {}", seed)?;
    for line in format_table(&eng) {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}
