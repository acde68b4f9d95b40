//! # twentyone CLI Library
//!
//! This library provides the command-line interface for the twentyone blackjack engine.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line arguments
//! and executes the appropriate subcommand.
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::io;
//! let args = vec!["twentyone", "play", "--seed", "7"];
//! let code = twentyone_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Play interactively against the dealer
//! - `deal`: Deal a single round for inspection
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::Write;
pub mod cli;
mod commands;
mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
#[macro_use]
mod macros;
pub mod ui;
pub mod validation;

use cli::{Commands, TwentyoneCli};
use commands::{handle_cfg_command, handle_deal_command, handle_play_command};

pub use error::CliError;

const COMMANDS: &[&str] = &["play", "deal", "cfg"];

/// Main entry point for the CLI application.
///
/// Parses command-line arguments and dispatches to the appropriate subcommand handler.
///
/// # Arguments
///
/// * `args` - Iterator over command-line arguments (typically `std::env::args()`)
/// * `out` - Output stream for normal output (typically `stdout`)
/// * `err` - Output stream for error messages (typically `stderr`)
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors
///
/// # Example
///
/// ```
/// use std::io;
/// let args = vec!["twentyone", "deal", "--seed", "42"];
/// let code = twentyone_cli::run(args, &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match TwentyoneCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                if write!(out, "{}", e).is_err() {
                    return exit_code::ERROR;
                }
                return exit_code::SUCCESS;
            }
            write_or_exit!(err, "{}", e);
            write_or_exit!(err, "Usage: twentyone <command> [options]\n");
            write_or_exit!(err, "Commands:");
            for c in COMMANDS {
                write_or_exit!(err, "  {}", c);
            }
            write_or_exit!(err, "\nFor full help, run: twentyone --help");
            return exit_code::ERROR;
        }
    };

    let result = match cli.cmd {
        Commands::Cfg => handle_cfg_command(out, err),
        Commands::Deal { seed } => {
            load_config(err).and_then(|config| handle_deal_command(&config, seed, out))
        }
        Commands::Play { seed, rounds, log } => load_config(err).and_then(|config| {
            let stdin = std::io::stdin();
            let mut stdin_lock = stdin.lock();
            handle_play_command(&config, seed, rounds, log, out, err, &mut stdin_lock)
        }),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        // already reported by the handler
        Err(CliError::Config(_)) | Err(CliError::InvalidInput(_)) => exit_code::ERROR,
        Err(e) => {
            write_or_exit!(err, "Error: {}", e);
            exit_code::ERROR
        }
    }
}

fn load_config(err: &mut dyn Write) -> Result<config::Config, CliError> {
    match config::load() {
        Ok(config) => Ok(config),
        Err(e) => {
            let msg = format!("Invalid configuration: {}", e);
            ui::write_error(err, &msg)?;
            Err(CliError::Config(msg))
        }
    }
}
