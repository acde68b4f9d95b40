use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::rules::{BLACKJACK, SOFT_ACE};

/// Which side of the table a hand belongs to.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Owner {
    Player,
    Dealer,
}

/// Result of scoring a sequence of cards.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub struct Score {
    pub points: u32,
    /// Aces in the sequence
    pub aces: u32,
    /// Aces currently counted as 11
    pub soft_aces: u32,
}

/// Scores cards with the soft-ace rule.
///
/// Non-ace values are summed first. Aces are then resolved one at a time: an
/// ace counts 11 when the running total plus 11 stays within 21, otherwise 1.
pub fn score(cards: &[Card]) -> Score {
    let mut points: u32 = cards
        .iter()
        .filter(|c| !c.is_ace())
        .map(|c| u32::from(c.value()))
        .sum();
    let aces = cards.iter().filter(|c| c.is_ace()).count() as u32;
    let mut soft_aces = 0;
    for _ in 0..aces {
        if points + SOFT_ACE <= BLACKJACK {
            points += SOFT_ACE;
            soft_aces += 1;
        } else {
            points += 1;
        }
    }
    Score {
        points,
        aces,
        soft_aces,
    }
}

/// Cards dealt to one participant, with the point total kept current.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hand {
    owner: Owner,
    cards: Vec<Card>,
    #[serde(skip)]
    score: Score,
    first_card_hidden: bool,
}

impl Hand {
    pub fn new(owner: Owner) -> Self {
        Self {
            owner,
            cards: Vec::with_capacity(6),
            score: Score::default(),
            first_card_hidden: false,
        }
    }

    pub fn owner(&self) -> Owner {
        self.owner
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Appends a card and rescores. The dealer's first card goes face down.
    pub fn push(&mut self, card: Card) {
        if self.owner == Owner::Dealer && self.cards.is_empty() {
            self.first_card_hidden = true;
        }
        self.cards.push(card);
        self.score = score(&self.cards);
    }

    pub fn points(&self) -> u32 {
        self.score.points
    }

    /// Points of the face-up cards only.
    pub fn visible_points(&self) -> u32 {
        match self.hidden_index() {
            Some(i) => {
                let visible: Vec<Card> = self
                    .cards
                    .iter()
                    .enumerate()
                    .filter(|&(idx, _)| idx != i)
                    .map(|(_, c)| *c)
                    .collect();
                score(&visible).points
            }
            None => self.points(),
        }
    }

    /// Index of the face-down card, if any.
    pub fn hidden_index(&self) -> Option<usize> {
        if self.first_card_hidden && !self.cards.is_empty() {
            Some(0)
        } else {
            None
        }
    }

    pub fn is_hidden(&self, index: usize) -> bool {
        self.hidden_index() == Some(index)
    }

    pub fn flip_first_card(&mut self) {
        self.first_card_hidden = false;
    }

    pub fn clear(&mut self) {
        self.cards.clear();
        self.score = Score::default();
        self.first_card_hidden = false;
    }

    pub fn is_bust(&self) -> bool {
        self.points() > BLACKJACK
    }

    pub fn is_soft(&self) -> bool {
        self.score.soft_aces > 0
    }

    /// Two cards totalling 21.
    pub fn is_natural(&self) -> bool {
        self.cards.len() == 2 && self.points() == BLACKJACK
    }

    /// 21 with any number of cards.
    ///
    /// Re-valuing a low ace never reaches 21: an ace is only counted low once
    /// the total is already 11 or more.
    pub fn has_blackjack(&self) -> bool {
        self.points() == BLACKJACK
    }
}
