//! # twentyone-engine: Blackjack Game Core
//!
//! A single-table blackjack engine: one player against a dealer who draws to
//! 17. Provides shoe handling, soft-ace scoring, the round state machine,
//! betting with a persistent balance, and advisory odds, with reproducible
//! shuffles from a seed. Rendering is left to the caller.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and the 52-card composition
//! - [`shoe`] - Seeded Fisher–Yates shuffling and dealing with ChaCha20 RNG
//! - [`hand`] - Hands, soft-ace scoring and blackjack detection
//! - [`game`] - Round state machine (deal, hit, stand, dealer play)
//! - [`engine`] - Session orchestration: bankroll settlement and automatic restart
//! - [`player`] - Bankroll and bet bounds
//! - [`rules`] - Table constants, outcome comparison and settlement
//! - [`odds`] - One-card-ahead probability estimates
//! - [`view`] - Snapshot consumed by presentation layers
//! - [`logger`] - RoundRecord serialization to JSONL
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use twentyone_engine::cards::{Card, Rank, Suit};
//! use twentyone_engine::hand::{Hand, Owner};
//!
//! let mut hand = Hand::new(Owner::Player);
//! hand.push(Card::new(Rank::Ace, Suit::Hearts));
//! hand.push(Card::new(Rank::Ace, Suit::Spades));
//! assert_eq!(hand.points(), 12);
//! ```
//!
//! ## Deterministic Gameplay
//!
//! All shuffles are reproducible using a seeded RNG:
//!
//! ```rust
//! use twentyone_engine::shoe::Shoe;
//!
//! let mut a = Shoe::new_with_seed(42);
//! let mut b = Shoe::new_with_seed(42);
//! a.shuffle();
//! b.shuffle();
//! assert_eq!(a.cards(), b.cards());
//! ```

pub mod cards;
pub mod engine;
pub mod errors;
pub mod game;
pub mod hand;
pub mod logger;
pub mod odds;
pub mod player;
pub mod rules;
pub mod shoe;
pub mod view;
