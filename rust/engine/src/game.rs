use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::errors::GameError;
use crate::hand::{Hand, Owner};
use crate::odds::{self, Odds};
use crate::rules::{compare_totals, Outcome, DEALER_STAND};
use crate::shoe::Shoe;

/// Where a round stands.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Opening cards are being dealt
    Dealing,
    /// Waiting on the player to hit or stand
    PlayerTurn,
    /// Dealer is drawing to 17
    DealerTurn,
    /// Round is over until the next deal
    Resolved(Outcome),
}

impl Phase {
    pub fn outcome(self) -> Option<Outcome> {
        match self {
            Phase::Resolved(o) => Some(o),
            _ => None,
        }
    }

    pub fn is_resolved(self) -> bool {
        matches!(self, Phase::Resolved(_))
    }
}

/// One round of blackjack: the shoe, both hands, and the turn state machine.
///
/// The round is the only thing that draws from the shoe or touches the hands.
#[derive(Debug)]
pub struct Round {
    shoe: Shoe,
    player: Hand,
    dealer: Hand,
    phase: Phase,
}

impl Round {
    /// Wraps a shoe without dealing. Call [`Round::deal`] to start play.
    pub fn new(shoe: Shoe) -> Self {
        Self {
            shoe,
            player: Hand::new(Owner::Player),
            dealer: Hand::new(Owner::Dealer),
            phase: Phase::Dealing,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.phase.outcome()
    }

    pub fn player(&self) -> &Hand {
        &self.player
    }

    pub fn dealer(&self) -> &Hand {
        &self.dealer
    }

    pub fn shoe(&self) -> &Shoe {
        &self.shoe
    }

    /// Current advisory percentages for the player's decision.
    pub fn odds(&self) -> Odds {
        odds::estimate(self.shoe.remaining(), &self.player, &self.dealer)
    }

    /// Deals the opening two cards each, alternating player then dealer, and
    /// settles naturals straight away.
    pub fn deal(&mut self) -> Result<Phase, GameError> {
        self.phase = Phase::Dealing;
        for _ in 0..2 {
            self.player.push(self.shoe.draw()?);
            self.dealer.push(self.shoe.draw()?);
        }
        debug!(
            player = self.player.points(),
            dealer_up = self.dealer.visible_points(),
            "opening deal"
        );

        let player_bj = self.player.has_blackjack();
        let dealer_bj = self.dealer.has_blackjack();
        self.phase = match (player_bj, dealer_bj) {
            (true, true) => self.resolve(Outcome::Draw),
            (true, false) => self.resolve(Outcome::PlayerWins),
            (false, true) => self.resolve(Outcome::DealerWins),
            (false, false) => Phase::PlayerTurn,
        };
        Ok(self.phase)
    }

    pub fn hit(&mut self) -> Result<Phase, GameError> {
        self.expect_player_turn("hit")?;
        let card = self.shoe.draw()?;
        self.player.push(card);
        debug!(card = ?card, player = self.player.points(), "player hits");

        if self.player.is_bust() {
            self.phase = self.resolve(Outcome::DealerWins);
        } else if self.player.has_blackjack() {
            self.phase = self.resolve(Outcome::PlayerWins);
        }
        Ok(self.phase)
    }

    /// Ends the player's turn and plays out the dealer.
    pub fn stand(&mut self) -> Result<Phase, GameError> {
        self.expect_player_turn("stand")?;
        self.phase = Phase::DealerTurn;
        self.dealer.flip_first_card();

        while self.dealer.points() < DEALER_STAND {
            let card = self.shoe.draw()?;
            self.dealer.push(card);
            debug!(card = ?card, dealer = self.dealer.points(), "dealer draws");
        }

        let outcome = compare_totals(self.player.points(), self.dealer.points());
        self.phase = self.resolve(outcome);
        Ok(self.phase)
    }

    /// Clears both hands, rebuilds and reshuffles the shoe, and deals again.
    pub fn restart(&mut self) -> Result<Phase, GameError> {
        self.clear_hands();
        self.shoe.reshuffle();
        self.deal()
    }

    /// Like [`Round::restart`] but deals from the given shoe.
    pub fn restart_with(&mut self, shoe: Shoe) -> Result<Phase, GameError> {
        self.clear_hands();
        self.shoe = shoe;
        self.shoe.reset_cursor();
        self.deal()
    }

    fn clear_hands(&mut self) {
        self.player.clear();
        self.dealer.clear();
        self.phase = Phase::Dealing;
    }

    fn resolve(&mut self, outcome: Outcome) -> Phase {
        self.dealer.flip_first_card();
        Phase::Resolved(outcome)
    }

    fn expect_player_turn(&self, action: &str) -> Result<(), GameError> {
        match self.phase {
            Phase::PlayerTurn => Ok(()),
            Phase::Resolved(_) => {
                warn!(action, "rejected: round already resolved");
                Err(GameError::RoundOver)
            }
            _ => {
                warn!(action, phase = ?self.phase, "rejected: not the player's turn");
                Err(GameError::NotPlayersTurn)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Rank;

    fn round(firsts: &[Rank]) -> Round {
        let mut r = Round::new(Shoe::stacked(firsts, 5).unwrap());
        r.deal().unwrap();
        r
    }

    #[test]
    fn deal_alternates_player_and_dealer() {
        // player 9,7  dealer 10,8
        let r = round(&[Rank::Nine, Rank::Ten, Rank::Seven, Rank::Eight]);
        assert_eq!(r.player().points(), 16);
        assert_eq!(r.dealer().points(), 18);
        assert_eq!(r.dealer().hidden_index(), Some(0));
        assert_eq!(r.phase(), Phase::PlayerTurn);
        assert_eq!(r.shoe().dealt(), 4);
    }

    #[test]
    fn both_naturals_draw() {
        let r = round(&[Rank::Ace, Rank::King, Rank::Queen, Rank::Ace]);
        assert_eq!(r.phase(), Phase::Resolved(Outcome::Draw));
        assert_eq!(r.dealer().hidden_index(), None);
    }

    #[test]
    fn dealer_natural_wins_before_player_acts() {
        let r = round(&[Rank::Nine, Rank::Ace, Rank::Nine, Rank::Jack]);
        assert_eq!(r.phase(), Phase::Resolved(Outcome::DealerWins));
    }

    #[test]
    fn stand_outside_player_turn_is_rejected() {
        let mut r = Round::new(Shoe::new_with_seed(1));
        assert_eq!(r.stand(), Err(GameError::NotPlayersTurn));
        assert_eq!(r.phase(), Phase::Dealing);
    }

    #[test]
    fn restart_clears_hands_and_deals_fresh() {
        let mut r = round(&[Rank::Nine, Rank::Ten, Rank::Seven, Rank::Eight]);
        r.stand().unwrap();
        let phase = r.restart().unwrap();
        assert_eq!(r.player().len(), 2);
        assert_eq!(r.dealer().len(), 2);
        assert_eq!(r.shoe().dealt(), 4);
        assert!(phase == Phase::PlayerTurn || phase.is_resolved());
    }
}
