use crate::errors::GameError;
use crate::rules::{settle, validate_bet, Outcome};

/// Default starting balance for a fresh game.
pub const STARTING_BALANCE: u32 = 1_000;

/// The player's money: a balance that survives rounds and the bet riding on
/// the current round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bankroll {
    balance: u32,
    bet: u32,
}

impl Bankroll {
    pub fn new(balance: u32) -> Self {
        Self { balance, bet: 0 }
    }

    pub fn balance(&self) -> u32 {
        self.balance
    }

    pub fn bet(&self) -> u32 {
        self.bet
    }

    /// Raises the bet by `step`, capped at the balance. Returns the new bet.
    pub fn raise(&mut self, step: u32) -> u32 {
        self.bet = self.bet.saturating_add(step).min(self.balance);
        self.bet
    }

    /// Lowers the bet by `step`, never below zero. Returns the new bet.
    pub fn lower(&mut self, step: u32) -> u32 {
        self.bet = self.bet.saturating_sub(step);
        self.bet
    }

    pub fn set_bet(&mut self, amount: u32) -> Result<(), GameError> {
        self.bet = validate_bet(amount, self.balance)?;
        Ok(())
    }

    /// Applies the round result and clears the bet. Returns the new balance.
    pub fn settle(&mut self, outcome: Outcome) -> u32 {
        self.balance = settle(outcome, self.balance, self.bet);
        self.bet = 0;
        self.balance
    }

    pub fn is_broke(&self) -> bool {
        self.balance == 0
    }
}
