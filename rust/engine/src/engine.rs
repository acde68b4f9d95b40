use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::errors::GameError;
use crate::game::{Phase, Round};
use crate::logger::RoundRecord;
use crate::player::{Bankroll, STARTING_BALANCE};
use crate::rules::{Outcome, DEFAULT_BET_STEP};
use crate::shoe::Shoe;

/// Suffix appended to the outcome message when the balance runs out.
pub const GAME_OVER: &str = " - GAME OVER -";

/// Table settings that stay fixed for a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Balance a fresh game starts with
    pub starting_balance: u32,
    /// Amount one raise or lower moves the bet
    pub bet_step: u32,
    /// Wait between running out of money and the automatic restart
    pub restart_delay: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            starting_balance: STARTING_BALANCE,
            bet_step: DEFAULT_BET_STEP,
            restart_delay: Duration::from_secs(3),
        }
    }
}

/// Single-table game: one round at a time, the player's bankroll, and the
/// automatic restart that follows going broke.
///
/// # Examples
///
/// ```
/// use twentyone_engine::engine::{Engine, EngineConfig};
/// use twentyone_engine::game::Phase;
///
/// let mut engine = Engine::new(Some(12345), EngineConfig::default()).unwrap();
///
/// if engine.phase() == Phase::PlayerTurn {
///     engine.raise_bet().unwrap();
///     engine.stand().unwrap();
/// }
/// assert!(engine.phase().is_resolved());
/// assert_eq!(engine.bet(), 0);
/// ```
#[derive(Debug)]
pub struct Engine {
    round: Round,
    bankroll: Bankroll,
    config: EngineConfig,
    seed: u64,
    /// Rounds dealt this session, current one included
    rounds: u32,
    /// Whether the current round's outcome has been applied to the bankroll
    settled: bool,
    game_over: bool,
    restart_at: Option<Instant>,
    last_record: Option<RoundRecord>,
}

impl Engine {
    /// Starts a game: shuffles a fresh shoe and deals the first round.
    pub fn new(seed: Option<u64>, config: EngineConfig) -> Result<Self, GameError> {
        let seed = seed.unwrap_or(0xA1A2_A3A4);
        let mut shoe = Shoe::new_with_seed(seed);
        shoe.shuffle();
        Self::start(shoe, seed, config)
    }

    /// Starts a game whose first round is dealt from `shoe` as given.
    pub fn with_shoe(shoe: Shoe, seed: u64, config: EngineConfig) -> Result<Self, GameError> {
        Self::start(shoe, seed, config)
    }

    fn start(shoe: Shoe, seed: u64, config: EngineConfig) -> Result<Self, GameError> {
        let mut eng = Self {
            round: Round::new(shoe),
            bankroll: Bankroll::new(config.starting_balance),
            config,
            seed,
            rounds: 1,
            settled: false,
            game_over: false,
            restart_at: None,
            last_record: None,
        };
        let phase = eng.round.deal()?;
        eng.after(phase);
        Ok(eng)
    }

    pub fn round(&self) -> &Round {
        &self.round
    }

    pub fn phase(&self) -> Phase {
        self.round.phase()
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    pub fn balance(&self) -> u32 {
        self.bankroll.balance()
    }

    pub fn bet(&self) -> u32 {
        self.bankroll.bet()
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Outcome text for the presentation layer; empty while the round is live.
    pub fn message(&self) -> String {
        match self.round.outcome() {
            Some(o) if self.game_over => format!("{}{}", o.message(), GAME_OVER),
            Some(o) => o.message().to_string(),
            None => String::new(),
        }
    }

    pub fn hit(&mut self) -> Result<Phase, GameError> {
        let phase = self.round.hit()?;
        self.after(phase);
        Ok(phase)
    }

    pub fn stand(&mut self) -> Result<Phase, GameError> {
        let phase = self.round.stand()?;
        self.after(phase);
        Ok(phase)
    }

    /// Raises the bet by one step, capped at the balance. Returns the new bet.
    pub fn raise_bet(&mut self) -> Result<u32, GameError> {
        self.expect_betting()?;
        Ok(self.bankroll.raise(self.config.bet_step))
    }

    /// Lowers the bet by one step, not below zero. Returns the new bet.
    pub fn lower_bet(&mut self) -> Result<u32, GameError> {
        self.expect_betting()?;
        Ok(self.bankroll.lower(self.config.bet_step))
    }

    /// Sets the bet directly; it must not exceed the balance.
    pub fn set_bet(&mut self, amount: u32) -> Result<u32, GameError> {
        self.expect_betting()?;
        self.bankroll.set_bet(amount)?;
        Ok(self.bankroll.bet())
    }

    /// Deals the next round from a freshly shuffled shoe.
    ///
    /// A pending automatic restart is performed now instead of later, so a
    /// manual new round never leaves a second restart queued. A round still
    /// in play is rejected with [`GameError::RoundInProgress`].
    pub fn new_round(&mut self) -> Result<Phase, GameError> {
        if self.restart_at.is_some() {
            return self.restart_game();
        }
        self.expect_resolved()?;
        self.reset_round_state();
        let phase = self.round.restart()?;
        self.after(phase);
        Ok(phase)
    }

    /// Deals the next round from `shoe`, keeping the bankroll.
    pub fn new_round_with_shoe(&mut self, shoe: Shoe) -> Result<Phase, GameError> {
        if self.restart_at.is_none() {
            self.expect_resolved()?;
        }
        self.restart_at = None;
        self.game_over = false;
        if self.bankroll.is_broke() {
            self.bankroll = Bankroll::new(self.config.starting_balance);
        }
        self.reset_round_state();
        let phase = self.round.restart_with(shoe)?;
        self.after(phase);
        Ok(phase)
    }

    pub fn restart_pending(&self) -> bool {
        self.restart_at.is_some()
    }

    /// When the pending automatic restart is due, if one is scheduled.
    pub fn restart_deadline(&self) -> Option<Instant> {
        self.restart_at
    }

    /// Fires the automatic restart once its deadline has passed.
    /// Returns whether a restart happened.
    pub fn poll_restart(&mut self, now: Instant) -> Result<bool, GameError> {
        match self.restart_at {
            Some(at) if now >= at => {
                self.restart_game()?;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    /// Record of the most recently resolved round.
    pub fn last_record(&self) -> Option<&RoundRecord> {
        self.last_record.as_ref()
    }

    fn restart_game(&mut self) -> Result<Phase, GameError> {
        info!(balance = self.config.starting_balance, "restarting game");
        self.restart_at = None;
        self.game_over = false;
        self.bankroll = Bankroll::new(self.config.starting_balance);
        self.reset_round_state();
        let phase = self.round.restart()?;
        self.after(phase);
        Ok(phase)
    }

    fn reset_round_state(&mut self) {
        self.bankroll.lower(self.bankroll.bet());
        self.rounds += 1;
        self.settled = false;
    }

    fn after(&mut self, phase: Phase) {
        if let Phase::Resolved(outcome) = phase {
            if !self.settled {
                self.settle(outcome);
            }
        }
    }

    fn settle(&mut self, outcome: Outcome) {
        let bet = self.bankroll.bet();
        let balance = self.bankroll.settle(outcome);
        self.settled = true;
        info!(?outcome, bet, balance, round = self.rounds, "round resolved");

        if self.bankroll.is_broke() {
            self.game_over = true;
            if self.restart_at.is_none() {
                self.restart_at = Some(Instant::now() + self.config.restart_delay);
                info!(delay = ?self.config.restart_delay, "balance empty, restart scheduled");
            }
        }

        let player = self.round.player();
        let dealer = self.round.dealer();
        self.last_record = Some(RoundRecord {
            round_id: String::new(),
            seed: self.seed,
            round: self.rounds,
            player: player.cards().to_vec(),
            dealer: dealer.cards().to_vec(),
            player_points: player.points(),
            dealer_points: dealer.points(),
            outcome,
            bet,
            balance,
            game_over: self.game_over,
            ts: None,
        });
    }

    fn expect_resolved(&self) -> Result<(), GameError> {
        if self.round.phase().is_resolved() {
            return Ok(());
        }
        debug!(phase = ?self.round.phase(), "new round while the current one is live");
        Err(GameError::RoundInProgress)
    }

    fn expect_betting(&self) -> Result<(), GameError> {
        match self.round.phase() {
            Phase::PlayerTurn => Ok(()),
            Phase::Resolved(_) => Err(GameError::RoundOver),
            phase => {
                debug!(?phase, "bet change outside the player's turn");
                Err(GameError::NotPlayersTurn)
            }
        }
    }
}
