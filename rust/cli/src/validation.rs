//! Input parsing for the interactive table.
//!
//! Turns a line typed at the prompt into a [`TableAction`] or an error
//! message the play loop can show before prompting again.

/// A player command at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableAction {
    Hit,
    Stand,
    RaiseBet,
    LowerBet,
    SetBet(u32),
    NewRound,
}

/// Result type for parsing user input into table actions.
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    /// Valid action parsed from input
    Action(TableAction),
    /// User entered quit command (q or quit)
    Quit,
    /// Invalid input with error message
    Invalid(String),
}

/// Parse user input string into a TableAction or special commands.
///
/// Accepts the following input formats (case-insensitive):
/// - "h" or "hit" → Hit
/// - "s" or "stand" → Stand
/// - "+" or "raise" → raise the bet one step
/// - "-" or "lower" → lower the bet one step
/// - "bet X" → set the bet to X
/// - "n" or "new" → deal a new round
/// - "q" or "quit" → Quit command
///
/// # Example
///
/// ```rust
/// # use twentyone_cli::validation::{parse_table_action, ParseResult, TableAction};
///
/// assert_eq!(parse_table_action("hit"), ParseResult::Action(TableAction::Hit));
/// assert_eq!(parse_table_action("bet 50"), ParseResult::Action(TableAction::SetBet(50)));
/// assert_eq!(parse_table_action("q"), ParseResult::Quit);
///
/// match parse_table_action("double") {
///     ParseResult::Invalid(msg) => assert!(msg.contains("Unrecognized")),
///     _ => panic!("Expected Invalid"),
/// }
/// ```
pub fn parse_table_action(input: &str) -> ParseResult {
    let input = input.trim().to_lowercase();
    let parts: Vec<&str> = input.split_whitespace().collect();

    if parts.is_empty() {
        return ParseResult::Invalid("Empty input".to_string());
    }

    if parts[0] == "q" || parts[0] == "quit" {
        return ParseResult::Quit;
    }

    match parts[0] {
        "hit" | "h" => ParseResult::Action(TableAction::Hit),
        "stand" | "s" => ParseResult::Action(TableAction::Stand),
        "raise" | "+" => ParseResult::Action(TableAction::RaiseBet),
        "lower" | "-" => ParseResult::Action(TableAction::LowerBet),
        "new" | "n" => ParseResult::Action(TableAction::NewRound),
        "bet" => {
            if parts.len() < 2 {
                return ParseResult::Invalid("Bet requires an amount (e.g., 'bet 50')".to_string());
            }
            match parts[1].parse::<u32>() {
                Ok(amount) => ParseResult::Action(TableAction::SetBet(amount)),
                Err(_) => ParseResult::Invalid("Invalid bet amount".to_string()),
            }
        }
        _ => ParseResult::Invalid(format!(
            "Unrecognized action '{}'. Valid actions: hit, stand, raise, lower, bet <amount>, new, q",
            parts[0]
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_and_long_forms_agree() {
        for (short, long) in [("h", "hit"), ("s", "stand"), ("+", "raise"), ("-", "lower"), ("n", "new")] {
            assert_eq!(parse_table_action(short), parse_table_action(long));
        }
    }

    #[test]
    fn input_is_case_insensitive_and_trimmed() {
        assert_eq!(
            parse_table_action("  STAND "),
            ParseResult::Action(TableAction::Stand)
        );
        assert_eq!(parse_table_action("Quit"), ParseResult::Quit);
    }

    #[test]
    fn bet_zero_is_allowed() {
        assert_eq!(
            parse_table_action("bet 0"),
            ParseResult::Action(TableAction::SetBet(0))
        );
    }

    #[test]
    fn bet_requires_a_number() {
        assert!(matches!(parse_table_action("bet"), ParseResult::Invalid(_)));
        assert!(matches!(parse_table_action("bet lots"), ParseResult::Invalid(_)));
        assert!(matches!(parse_table_action("bet -5"), ParseResult::Invalid(_)));
    }

    #[test]
    fn empty_input_is_invalid() {
        assert_eq!(
            parse_table_action(""),
            ParseResult::Invalid("Empty input".to_string())
        );
    }
}
