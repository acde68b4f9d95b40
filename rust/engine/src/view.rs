//! Read-only snapshot of the table for presentation layers.
//!
//! A renderer needs nothing beyond a [`TableView`]: which faces to draw and
//! which are face down, the totals it may show, the odds line, money, the
//! outcome message, and which controls are live.

use serde::Serialize;

use crate::engine::Engine;
use crate::game::Phase;
use crate::hand::Hand;
use crate::odds::Odds;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardView {
    /// Face index in build order (`0..52`)
    pub visual_id: u8,
    /// Scoring value, `1..=10`
    pub value: u8,
    pub hidden: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HandView {
    pub cards: Vec<CardView>,
    /// Total of the face-up cards, the only total a player may see
    pub visible_points: u32,
    pub points: u32,
}

impl HandView {
    pub fn of(hand: &Hand) -> Self {
        let cards = hand
            .cards()
            .iter()
            .enumerate()
            .map(|(i, c)| CardView {
                visual_id: c.visual_id(),
                value: c.value(),
                hidden: hand.is_hidden(i),
            })
            .collect();
        Self {
            cards,
            visible_points: hand.visible_points(),
            points: hand.points(),
        }
    }
}

/// Which player controls are enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Controls {
    pub hit: bool,
    pub stand: bool,
    pub raise_bet: bool,
    pub lower_bet: bool,
    pub new_round: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableView {
    pub player: HandView,
    pub dealer: HandView,
    pub phase: Phase,
    pub odds: Odds,
    /// Odds formatted for display
    pub odds_text: String,
    pub bet: u32,
    pub balance: u32,
    pub message: String,
    pub controls: Controls,
    pub restart_pending: bool,
}

impl Engine {
    pub fn view(&self) -> TableView {
        let round = self.round();
        let odds = round.odds();
        let live = round.phase() == Phase::PlayerTurn;
        TableView {
            player: HandView::of(round.player()),
            dealer: HandView::of(round.dealer()),
            phase: round.phase(),
            odds,
            odds_text: odds.to_string(),
            bet: self.bet(),
            balance: self.balance(),
            message: self.message(),
            controls: Controls {
                hit: live,
                stand: live,
                raise_bet: live && self.bet() < self.balance(),
                lower_bet: live && self.bet() > 0,
                new_round: !live,
            },
            restart_pending: self.restart_pending(),
        }
    }
}
