use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Shoe exhausted: all 52 cards have been dealt")]
    OutOfCards,
    #[error("Invalid bet amount: {amount}, balance: {balance}")]
    InvalidBetAmount { amount: u32, balance: u32 },
    #[error("Round already resolved")]
    RoundOver,
    #[error("Round still in progress")]
    RoundInProgress,
    #[error("Not the player's turn")]
    NotPlayersTurn,
    #[error("Cannot stack shoe: {0}")]
    InvalidStack(String),
}
