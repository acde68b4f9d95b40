use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card, Rank};
use crate::errors::GameError;

/// Number of cards in a full shoe.
pub const SHOE_SIZE: usize = 52;

/// The cards available to be dealt, with a cursor marking the next undealt card.
///
/// Cards before the cursor are dealt, cards from the cursor on are undealt.
#[derive(Debug)]
pub struct Shoe {
    cards: Vec<Card>,
    cursor: usize,
    rng: ChaCha20Rng,
}

impl Shoe {
    pub fn new_with_seed(seed: u64) -> Self {
        let rng = ChaCha20Rng::seed_from_u64(seed);
        // Keep build order until shuffle is called explicitly
        Self {
            cards: full_deck(),
            cursor: 0,
            rng,
        }
    }

    /// Builds a shoe whose first cards have the given ranks, in order.
    ///
    /// The remaining cards of the composition follow in shuffled order. Used to
    /// replay a known deal.
    pub fn stacked(firsts: &[Rank], seed: u64) -> Result<Self, GameError> {
        let mut shoe = Self::new_with_seed(seed);
        let mut pool = full_deck();
        let mut front = Vec::with_capacity(firsts.len());
        for (i, &rank) in firsts.iter().enumerate() {
            let pos = pool.iter().position(|c| c.rank == rank).ok_or_else(|| {
                GameError::InvalidStack(format!("no {:?} left for position {}", rank, i))
            })?;
            front.push(pool.remove(pos));
        }
        fisher_yates(&mut pool, &mut shoe.rng);
        front.extend(pool);
        shoe.cards = front;
        Ok(shoe)
    }

    /// Restores the fixed build order and rewinds the cursor.
    pub fn build(&mut self) {
        self.cards = full_deck();
        self.cursor = 0;
    }

    /// Permutes every card of the shoe in place. Does not move the cursor.
    pub fn shuffle(&mut self) {
        fisher_yates(&mut self.cards, &mut self.rng);
    }

    /// Fresh composition, shuffled, cursor at the top. Run at the start of each round.
    pub fn reshuffle(&mut self) {
        self.build();
        self.shuffle();
    }

    pub fn reset_cursor(&mut self) {
        self.cursor = 0;
    }

    pub fn draw(&mut self) -> Result<Card, GameError> {
        let card = *self.cards.get(self.cursor).ok_or(GameError::OutOfCards)?;
        self.cursor += 1;
        Ok(card)
    }

    /// Undealt cards, next card first.
    pub fn remaining(&self) -> &[Card] {
        &self.cards[self.cursor..]
    }

    pub fn dealt(&self) -> usize {
        self.cursor
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

/// Forward Fisher–Yates: for each `i`, swap with a uniform pick from `i..len`.
pub fn fisher_yates<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    let n = items.len();
    for i in 0..n {
        let j = rng.random_range(i..n);
        items.swap(i, j);
    }
}
