use serde::{Deserialize, Serialize};

use crate::errors::GameError;

/// Best possible total.
pub const BLACKJACK: u32 = 21;
/// The dealer draws while below this total.
pub const DEALER_STAND: u32 = 17;
/// Value of an ace counted high.
pub const SOFT_ACE: u32 = 11;
/// Default amount a single raise or lower moves the bet.
pub const DEFAULT_BET_STEP: u32 = 10;

/// How a round ended.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    DealerWins,
    PlayerWins,
    Draw,
}

impl Outcome {
    /// Message shown to the player.
    pub fn message(self) -> &'static str {
        match self {
            Outcome::DealerWins => "You lose!",
            Outcome::PlayerWins => "You win!",
            Outcome::Draw => "Draw!",
        }
    }
}

/// Compares final totals once the dealer has finished drawing.
///
/// A busted dealer or a dealer below the player loses; a dealer above the
/// player wins; equal totals are a draw.
pub fn compare_totals(player: u32, dealer: u32) -> Outcome {
    if dealer > BLACKJACK || dealer < player {
        Outcome::PlayerWins
    } else if dealer > player {
        Outcome::DealerWins
    } else {
        Outcome::Draw
    }
}

/// Balance after settling `bet` on `outcome`.
///
/// The bet is not taken from the balance when placed, so a loss subtracts it
/// and a win adds twice the bet.
///
/// # Examples
///
/// ```
/// use twentyone_engine::rules::{settle, Outcome};
///
/// assert_eq!(settle(Outcome::PlayerWins, 100, 30), 160);
/// assert_eq!(settle(Outcome::DealerWins, 100, 30), 70);
/// assert_eq!(settle(Outcome::Draw, 100, 30), 100);
/// ```
pub fn settle(outcome: Outcome, balance: u32, bet: u32) -> u32 {
    match outcome {
        Outcome::DealerWins => balance.saturating_sub(bet),
        Outcome::PlayerWins => balance.saturating_add(bet.saturating_mul(2)),
        Outcome::Draw => balance,
    }
}

/// Validates a proposed bet against the current balance.
///
/// # Errors
///
/// Returns [`GameError::InvalidBetAmount`] when `amount` exceeds `balance`.
///
/// # Examples
///
/// ```
/// use twentyone_engine::rules::validate_bet;
/// use twentyone_engine::errors::GameError;
///
/// assert_eq!(validate_bet(50, 100), Ok(50));
/// assert!(matches!(
///     validate_bet(150, 100),
///     Err(GameError::InvalidBetAmount { .. })
/// ));
/// ```
pub fn validate_bet(amount: u32, balance: u32) -> Result<u32, GameError> {
    if amount > balance {
        Err(GameError::InvalidBetAmount { amount, balance })
    } else {
        Ok(amount)
    }
}
