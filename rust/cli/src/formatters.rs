//! Card, hand, and table formatters for terminal display.
//!
//! This module provides pure functions for formatting blackjack table elements
//! (cards, hands, the odds line, money) for terminal output. It supports
//! Unicode card symbols with ASCII fallback for terminal environments that
//! don't support Unicode rendering.
//!
//! ## Unicode vs ASCII Fallback
//!
//! The module automatically detects whether the terminal supports Unicode
//! symbols by checking environment variables on Windows (WT_SESSION, TERM_PROGRAM,
//! VSCODE_INJECTION) and assumes Unicode support on Unix-like systems.
//!
//! - **Unicode mode**: Uses ♥ ♦ ♣ ♠ symbols
//! - **ASCII mode**: Uses h d c s letters
//!
//! Face-down cards are always shown as `??`.
//!
//! ## Example
//!
//! ```rust
//! use twentyone_engine::cards::{Card, Rank, Suit};
//! use twentyone_cli::formatters::format_card;
//!
//! let ace_spades = Card { rank: Rank::Ace, suit: Suit::Spades };
//! assert!(format_card(&ace_spades) == "A♠" || format_card(&ace_spades) == "As");
//! ```

use twentyone_engine::cards::{Card, Rank, Suit};
use twentyone_engine::engine::Engine;
use twentyone_engine::hand::Hand;

/// Placeholder printed for a face-down card.
pub const HIDDEN_CARD: &str = "??";

/// Check if the terminal supports Unicode card symbols by detecting modern terminal environments.
///
/// On Windows, checks for Windows Terminal (WT_SESSION), modern terminals (TERM_PROGRAM),
/// or VS Code (VSCODE_INJECTION). On Unix-like systems, assumes Unicode support.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

/// Format a Suit as a string using Unicode symbols with ASCII fallback.
pub fn format_suit(suit: &Suit) -> String {
    if supports_unicode() {
        match suit {
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
            Suit::Clubs => "♣",
            Suit::Spades => "♠",
        }
        .to_string()
    } else {
        match suit {
            Suit::Hearts => "h",
            Suit::Diamonds => "d",
            Suit::Clubs => "c",
            Suit::Spades => "s",
        }
        .to_string()
    }
}

/// Format a Rank as a single character (A, 2-9, T, J, Q, K).
pub fn format_rank(rank: &Rank) -> String {
    match rank {
        Rank::Ace => "A",
        Rank::Two => "2",
        Rank::Three => "3",
        Rank::Four => "4",
        Rank::Five => "5",
        Rank::Six => "6",
        Rank::Seven => "7",
        Rank::Eight => "8",
        Rank::Nine => "9",
        Rank::Ten => "T",
        Rank::Jack => "J",
        Rank::Queen => "Q",
        Rank::King => "K",
    }
    .to_string()
}

/// Format a Card as a string combining rank and suit.
///
/// # Example
///
/// ```rust
/// use twentyone_engine::cards::{Card, Rank, Suit};
/// # use twentyone_cli::formatters::format_card;
///
/// let ace_spades = Card { rank: Rank::Ace, suit: Suit::Spades };
/// let formatted = format_card(&ace_spades);
/// assert!(formatted == "A♠" || formatted == "As");
/// ```
pub fn format_card(card: &Card) -> String {
    format!("{}{}", format_rank(&card.rank), format_suit(&card.suit))
}

/// Format a hand in bracket notation, masking the face-down card.
///
/// The total shown is the one a player is allowed to see: the face-up cards only.
///
/// # Example
///
/// ```rust
/// use twentyone_engine::cards::{Card, Rank, Suit};
/// use twentyone_engine::hand::{Hand, Owner};
/// # use twentyone_cli::formatters::format_hand;
///
/// let mut dealer = Hand::new(Owner::Dealer);
/// dealer.push(Card { rank: Rank::Ace, suit: Suit::Spades });
/// dealer.push(Card { rank: Rank::Nine, suit: Suit::Hearts });
/// let formatted = format_hand(&dealer);
/// assert!(formatted.starts_with("[?? 9"));
/// assert!(formatted.ends_with("(9)"));
/// ```
pub fn format_hand(hand: &Hand) -> String {
    let cards: Vec<String> = hand
        .cards()
        .iter()
        .enumerate()
        .map(|(i, c)| {
            if hand.is_hidden(i) {
                HIDDEN_CARD.to_string()
            } else {
                format_card(c)
            }
        })
        .collect();
    format!("[{}] ({})", cards.join(" "), hand.visible_points())
}

/// Format the whole table as display lines: both hands, odds, money, message.
pub fn format_table(engine: &Engine) -> Vec<String> {
    let round = engine.round();
    let mut lines = vec![
        format!("Dealer: {}", format_hand(round.dealer())),
        format!("Player: {}", format_hand(round.player())),
    ];
    if !round.phase().is_resolved() {
        lines.push(format!("Odds: {}", round.odds()));
    }
    lines.push(format!("Bet: {} Balance: {}", engine.bet(), engine.balance()));
    let message = engine.message();
    if !message.is_empty() {
        lines.push(message);
    }
    lines
}
