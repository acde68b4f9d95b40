//! Advisory win/bust percentages shown while the player decides.
//!
//! Every estimate looks one card ahead over the undealt remainder of the shoe.
//! The two dealer-facing estimates give each remaining ace a second outcome at
//! 11 and grow the denominator by one per remaining ace; the bust estimate
//! counts aces only at 1 and keeps the plain card count as denominator. The
//! asymmetry is intentional and pinned by tests. None of these values affect
//! the round.

use std::fmt;

use serde::Serialize;

use crate::cards::Card;
use crate::hand::Hand;
use crate::rules::{BLACKJACK, DEALER_STAND, SOFT_ACE};

/// The three percentages, each rounded to two decimals.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Odds {
    /// The dealer's hidden card lifts their visible total above the player without reaching 21.
    pub dealer_higher: f64,
    /// The next card lands the dealer's current total in `17..=21`.
    pub player_in_range: f64,
    /// The next card takes the player over 21.
    pub player_bust: f64,
}

impl fmt::Display for Odds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.2} % | {:.2} % | {:.2} %",
            self.dealer_higher, self.player_in_range, self.player_bust
        )
    }
}

/// Computes all three estimates from the undealt cards and both hands.
pub fn estimate(remaining: &[Card], player: &Hand, dealer: &Hand) -> Odds {
    Odds {
        dealer_higher: dealer_higher(remaining, dealer.cards(), player.points()),
        player_in_range: player_in_range(remaining, dealer.points()),
        player_bust: player_bust(remaining, player.points()),
    }
}

/// Remaining cards plus one extra case per remaining ace.
pub fn dual_count(remaining: &[Card]) -> usize {
    remaining.len() + remaining.iter().filter(|c| c.is_ace()).count()
}

/// Chance the dealer's face-down card puts them above `player_points` but under 21.
///
/// Only the dealer's second (face-up) card is known. A remaining ace is also
/// tried at 11, and so is a face-up ace.
pub fn dealer_higher(remaining: &[Card], dealer_cards: &[Card], player_points: u32) -> f64 {
    let Some(up) = dealer_cards.get(1) else {
        return 0.0;
    };
    let visible = u32::from(up.value());
    // a face-up ace is tried at both values, but a draw still counts once
    let beats = |drawn: u32| {
        let ok = |sum: u32| sum < BLACKJACK && sum > player_points;
        ok(visible + drawn) || (up.is_ace() && ok(SOFT_ACE + drawn))
    };

    let mut favorable = 0usize;
    for card in remaining {
        if beats(u32::from(card.value())) {
            favorable += 1;
        }
        if card.is_ace() && beats(SOFT_ACE) {
            favorable += 1;
        }
    }
    percent(favorable, dual_count(remaining))
}

/// Chance the next card lands `dealer_points` in `17..=21`, aces tried both ways.
pub fn player_in_range(remaining: &[Card], dealer_points: u32) -> f64 {
    let in_range = |sum: u32| (DEALER_STAND..=BLACKJACK).contains(&sum);

    let mut favorable = 0usize;
    for card in remaining {
        if in_range(dealer_points + u32::from(card.value())) {
            favorable += 1;
        }
        if card.is_ace() && in_range(dealer_points + SOFT_ACE) {
            favorable += 1;
        }
    }
    percent(favorable, dual_count(remaining))
}

/// Chance the next card takes `player_points` over 21. Aces count 1.
pub fn player_bust(remaining: &[Card], player_points: u32) -> f64 {
    let favorable = remaining
        .iter()
        .filter(|c| player_points + u32::from(c.value()) > BLACKJACK)
        .count();
    percent(favorable, remaining.len())
}

fn percent(favorable: usize, cases: usize) -> f64 {
    if cases == 0 {
        return 0.0;
    }
    let p = favorable as f64 / cases as f64 * 100.0;
    (p * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    fn cards(ranks: &[Rank]) -> Vec<Card> {
        ranks.iter().map(|&r| Card::new(r, Suit::Clubs)).collect()
    }

    #[test]
    fn percent_rounds_to_two_decimals() {
        assert_eq!(percent(1, 3), 33.33);
        assert_eq!(percent(2, 3), 66.67);
        assert_eq!(percent(0, 0), 0.0);
    }

    #[test]
    fn dealer_higher_needs_a_face_up_card() {
        let remaining = cards(&[Rank::Five, Rank::Six]);
        assert_eq!(dealer_higher(&remaining, &cards(&[Rank::King]), 10), 0.0);
    }

    #[test]
    fn display_joins_with_percent_signs() {
        let odds = Odds {
            dealer_higher: 12.5,
            player_in_range: 40.0,
            player_bust: 7.69,
        };
        assert_eq!(odds.to_string(), "12.50 % | 40.00 % | 7.69 %");
    }
}
