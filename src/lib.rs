//! poker-sim: five-card hand classification and Monte Carlo sampling
//!
//! Goals:
//! - Small, well-documented model of a 52-card deck and five-card hands
//! - Classification predicates (pair, two pair, tris, straight, flush, full house, quad)
//! - Reproducible sampling when a seed is supplied
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! ## Quick start: deal and classify a hand
//! ```
//! use poker_sim::deck::Deck;
//! use poker_sim::hand::PokerHand;
//!
//! let mut deck = Deck::standard();
//! deck.shuffle_seeded(7);
//! let hand = PokerHand::deal(&mut deck).unwrap();
//! assert_eq!(deck.len(), 47);
//! let _ = (hand.is_straight(), hand.is_flush(), hand.num_match());
//! ```
//!
//! ## Estimating a probability
//! ```sh
//! POKER_SIM_TARGET=straight POKER_SIM_HITS=1000 RUST_LOG=info cargo run --release
//! ```

pub mod cards;
pub mod config;
pub mod deck;
pub mod hand;
pub mod simulation;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
