//! # Play Command
//!
//! Interactive blackjack against the dealer.
//!
//! The table is redrawn after every accepted action. While the round is live
//! the player can hit, stand, and move the bet; once it resolves the only
//! choices are a new round or quitting. Running out of money ends the game:
//! after the configured delay a fresh game starts with the starting balance.
//!
//! With `--log` every resolved round is appended to a JSONL file.

use crate::config::Config;
use crate::error::CliError;
use crate::formatters::format_table;
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{ParseResult, TableAction, parse_table_action};
use std::io::{BufRead, Write};
use std::time::Instant;
use twentyone_engine::engine::Engine;
use twentyone_engine::errors::GameError;
use twentyone_engine::game::Phase;
use twentyone_engine::logger::RoundLogger;

const LIVE_CHOICES: &str = "h/s/+/-/bet N/q";
const RESOLVED_CHOICES: &str = "n/q";

/// Handle the play command: interactive blackjack
///
/// # Arguments
///
/// * `config` - Resolved configuration (balance, bet step, restart delay, seed)
/// * `seed` - RNG seed overriding the configured one (default: random)
/// * `rounds` - Stop after this many resolved rounds (default: until quit or EOF)
/// * `log` - Optional JSONL path receiving one record per resolved round
/// * `out` - Output stream for the table
/// * `err` - Error stream for rejected input
/// * `stdin` - Input stream for player actions
///
/// # Returns
///
/// * `Ok(())` when the player quits, input ends, or the round limit is reached
/// * `Err(CliError)` if rounds is 0, the log can't be written, or I/O fails
pub fn handle_play_command(
    config: &Config,
    seed: Option<u64>,
    rounds: Option<u32>,
    log: Option<String>,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    if rounds == Some(0) {
        ui::write_error(err, "rounds must be >= 1")?;
        return Err(CliError::InvalidInput("rounds must be >= 1".to_string()));
    }

    let seed = seed.or(config.seed).unwrap_or_else(rand::random);
    let mut logger = match log.as_deref() {
        Some(path) => Some(RoundLogger::create(path)?),
        None => None,
    };

    match rounds {
        Some(n) => writeln!(out, "play: seed={} rounds={}", seed, n)?,
        None => writeln!(out, "play: seed={}", seed)?,
    }

    let mut eng = Engine::new(Some(seed), config.engine_config())?;
    render(&eng, out)?;

    let mut recorded: Option<u32> = None;
    let mut resolved = 0u32;

    loop {
        if eng.phase().is_resolved() && recorded != Some(eng.rounds()) {
            recorded = Some(eng.rounds());
            resolved += 1;
            if let (Some(logger), Some(rec)) = (logger.as_mut(), eng.last_record()) {
                logger.write(rec)?;
            }
            if rounds.is_some_and(|n| resolved >= n) {
                break;
            }
            if let Some(deadline) = eng.restart_deadline() {
                writeln!(
                    out,
                    "Out of money. New game in {} ms",
                    config.restart_delay_ms
                )?;
                std::thread::sleep(deadline.saturating_duration_since(Instant::now()));
                eng.poll_restart(Instant::now())?;
                render(&eng, out)?;
                continue;
            }
        }

        let choices = if eng.phase() == Phase::PlayerTurn {
            LIVE_CHOICES
        } else {
            RESOLVED_CHOICES
        };
        ui::prompt(out, choices)?;

        let Some(line) = read_stdin_line(stdin) else {
            writeln!(out)?;
            break;
        };
        match parse_table_action(&line) {
            ParseResult::Quit => break,
            ParseResult::Invalid(msg) => ui::write_error(err, &msg)?,
            ParseResult::Action(action) => match apply(&mut eng, action) {
                Ok(()) => render(&eng, out)?,
                Err(e) => ui::write_error(err, &e.to_string())?,
            },
        }
    }

    writeln!(out, "Rounds resolved: {}", resolved)?;
    writeln!(out, "Final balance: {}", eng.balance())?;
    Ok(())
}

fn apply(eng: &mut Engine, action: TableAction) -> Result<(), GameError> {
    match action {
        TableAction::Hit => eng.hit().map(|_| ()),
        TableAction::Stand => eng.stand().map(|_| ()),
        TableAction::RaiseBet => eng.raise_bet().map(|_| ()),
        TableAction::LowerBet => eng.lower_bet().map(|_| ()),
        TableAction::SetBet(amount) => eng.set_bet(amount).map(|_| ()),
        TableAction::NewRound => eng.new_round().map(|_| ()),
    }
}

fn render(eng: &Engine, out: &mut dyn Write) -> Result<(), CliError> {
    writeln!(out, "--- Round {} ---", eng.rounds())?;
    for line in format_table(eng) {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use twentyone_engine::logger::RoundRecord;

    fn quick_config() -> Config {
        Config {
            restart_delay_ms: 0,
            ..Config::default()
        }
    }

    fn run_play(input: &str, rounds: Option<u32>, log: Option<String>) -> (Result<(), CliError>, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut stdin = Cursor::new(input.as_bytes().to_vec());
        let result = handle_play_command(
            &quick_config(),
            Some(42),
            rounds,
            log,
            &mut out,
            &mut err,
            &mut stdin,
        );
        (
            result,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn quit_ends_the_session() {
        let (result, out, _) = run_play("q\n", None, None);
        assert!(result.is_ok());
        assert!(out.starts_with("play: seed=42"));
        assert!(out.contains("Dealer: ["));
        assert!(out.contains("Player: ["));
        assert!(out.contains("Final balance: 1000"));
    }

    #[test]
    fn eof_is_treated_as_quit() {
        let (result, out, _) = run_play("", None, None);
        assert!(result.is_ok());
        assert!(out.contains("Final balance:"));
    }

    #[test]
    fn zero_rounds_is_rejected() {
        let (result, _, err) = run_play("", Some(0), None);
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
        assert!(err.contains("rounds must be >= 1"));
    }

    #[test]
    fn standing_resolves_one_round() {
        let (result, out, _) = run_play("s\n", Some(1), None);
        assert!(result.is_ok());
        assert!(out.contains("Rounds resolved: 1"));
        assert!(out.contains("Final balance: 1000"), "no bet was placed");
    }

    #[test]
    fn same_seed_same_session() {
        let (_, a, _) = run_play("s\n", Some(1), None);
        let (_, b, _) = run_play("s\n", Some(1), None);
        assert_eq!(a, b);
    }

    #[test]
    fn unknown_input_is_reported_and_reprompted() {
        let (result, out, err) = run_play("double\nq\n", None, None);
        assert!(result.is_ok());
        assert!(err.contains("Unrecognized action 'double'"));
        assert!(out.matches("Enter action").count() >= 2);
    }

    #[test]
    fn oversized_bet_is_rejected_by_the_engine() {
        let (result, _, err) = run_play("bet 5000\nq\n", None, None);
        assert!(result.is_ok());
        // a natural on the opening deal ends the round before the bet lands
        assert!(err.contains("Invalid bet amount: 5000") || err.contains("Round already resolved"));
    }

    #[test]
    fn new_round_is_refused_while_the_hand_is_live() {
        let (result, out, err) = run_play("n\nq\n", None, None);
        assert!(result.is_ok());
        let opening = out.split("Enter action").next().unwrap();
        if opening.contains("Odds: ") {
            assert!(err.contains("Round still in progress"));
            assert!(out.contains("Rounds resolved: 0"));
        } else {
            assert!(err.is_empty());
        }
    }

    #[test]
    fn log_receives_one_line_per_resolved_round() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rounds").join("session.jsonl");
        let input = "s\nn\n".repeat(6);
        let (result, out, _) = run_play(&input, Some(2), Some(path.to_string_lossy().into_owned()));
        assert!(result.is_ok());
        assert!(out.contains("Rounds resolved: 2"));

        let content = std::fs::read_to_string(&path).unwrap();
        let records: Vec<RoundRecord> = content
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].seed, 42);
        assert!(records[0].round_id.ends_with("-000001"));
        assert!(records[1].round_id.ends_with("-000002"));
        assert!(records.iter().all(|r| r.ts.is_some()));
    }
}
