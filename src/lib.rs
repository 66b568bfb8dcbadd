//! holdem-eval: lookup-table poker hand evaluation
//!
//! Classifies 5, 6, and 7-card poker hands into one of 7,462 distinct
//! strength ranks (lower = stronger) and maps ranks onto the nine standard
//! hand categories. Cards pack rank, suit, one-hot rank bit, and a
//! rank-assigned prime into a single 32-bit word; 5-card hands are scored
//! with one lookup keyed by the product of those primes, and 6/7-card hands
//! take the best of all 5-card subsets.
//!
//! Goals:
//! - Deterministic, O(1) 5-card scoring after a one-time table build
//! - Small, well-documented public API
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! ## Quick start: score a Hold'em hand
//! ```
//! use holdem_eval::evaluator::{Category, Evaluator};
//! use holdem_eval::hand::{Board, HoleCards};
//!
//! let evaluator = Evaluator::new();
//! let hole: HoleCards = "2h 2s".parse().unwrap();
//! let board: Board = "5s Jc Ah".parse().unwrap();
//!
//! let rank = evaluator.evaluate(&hole, &board).unwrap();
//! assert_eq!(rank.raw(), 5618);
//! assert_eq!(rank.class(), Category::Pair);
//! assert_eq!(rank.class().name(), "Pair");
//! ```

pub mod cards;
pub mod deck;
pub mod evaluator;
pub mod hand;
pub mod lookup;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
