pub(crate) mod combinations;

use crate::cards::{prime_product, prime_product_from_bitrank, Card};
use crate::hand::{Board, HoleCards};
use crate::lookup::{self, RankTable};
use self::combinations::SubsetsOfFive;
use std::fmt;

/// Poker hand category from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
#[repr(u8)]
pub enum Category {
    HighCard = 0,
    Pair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

impl Category {
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// The fixed display name for this category.
    pub const fn name(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::Pair => "Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RankError {
    #[error("invalid score: {0} is outside [1, 7462]")]
    InvalidScore(u16),
}

/// A hand strength rank in `[1, 7462]`; lower is stronger.
///
/// Ordering follows the raw rank, so the numerically minimum rank over a set
/// of candidate hands is the best hand, and `a < b` means `a` beats `b`.
///
/// ```
/// use holdem_eval::evaluator::{Category, HandRank};
///
/// let rank = HandRank::new(1).unwrap();
/// assert_eq!(rank.class(), Category::StraightFlush);
/// assert!(HandRank::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HandRank(u16);

impl HandRank {
    /// Validate a raw score; anything outside `[1, 7462]` is a caller bug.
    pub fn new(raw: u16) -> Result<Self, RankError> {
        if (1..=lookup::MAX_HIGH_CARD).contains(&raw) {
            Ok(Self(raw))
        } else {
            Err(RankError::InvalidScore(raw))
        }
    }

    pub const fn raw(self) -> u16 {
        self.0
    }

    /// The hand category: the class whose boundary is the smallest one at or
    /// above this rank.
    pub fn class(self) -> Category {
        match self.0 {
            r if r <= lookup::MAX_STRAIGHT_FLUSH => Category::StraightFlush,
            r if r <= lookup::MAX_FOUR_OF_A_KIND => Category::FourOfAKind,
            r if r <= lookup::MAX_FULL_HOUSE => Category::FullHouse,
            r if r <= lookup::MAX_FLUSH => Category::Flush,
            r if r <= lookup::MAX_STRAIGHT => Category::Straight,
            r if r <= lookup::MAX_THREE_OF_A_KIND => Category::ThreeOfAKind,
            r if r <= lookup::MAX_TWO_PAIR => Category::TwoPair,
            r if r <= lookup::MAX_PAIR => Category::Pair,
            _ => Category::HighCard,
        }
    }

    /// Linear rescale of the ordinal rank into `[0, 1]`, higher = stronger:
    /// `1 - rank / 7462`.
    ///
    /// This is not an empirical win probability; the 7,462 classes are not
    /// equally likely. The exact formula is kept as documented behavior.
    pub fn percentile(self) -> f64 {
        1.0 - f64::from(self.0) / f64::from(lookup::MAX_HIGH_CARD)
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EvalError {
    #[error("unsupported hand size: {0} (expected 5, 6, or 7 cards)")]
    UnsupportedHandSize(usize),
    #[error("duplicate card: {0}")]
    DuplicateCard(Card),
}

/// Scores 5, 6, and 7-card hands against the precomputed rank table.
///
/// Evaluation is a pure function of its inputs: the table is built once per
/// process and shared read-only, so evaluators are `Copy` and calls may run
/// concurrently without locking.
///
/// ```
/// use holdem_eval::evaluator::{Category, Evaluator};
/// use holdem_eval::hand::{Board, HoleCards};
///
/// let evaluator = Evaluator::new();
/// let hole: HoleCards = "2h 2s".parse().unwrap();
/// let board: Board = "5s Jc Ah".parse().unwrap();
///
/// let rank = evaluator.evaluate(&hole, &board).unwrap();
/// assert_eq!(rank.raw(), 5618);
/// assert_eq!(rank.class(), Category::Pair);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Evaluator {
    table: &'static RankTable,
}

impl Evaluator {
    pub fn new() -> Self {
        Self {
            table: RankTable::shared(),
        }
    }

    /// Score two hole cards against a board of 0, 3, 4, or 5 community
    /// cards. The combined hand must total 5, 6, or 7 distinct cards.
    pub fn evaluate(&self, hole: &HoleCards, board: &Board) -> Result<HandRank, EvalError> {
        let mut cards = Vec::with_capacity(2 + board.len());
        cards.extend_from_slice(&hole.as_array());
        cards.extend_from_slice(board.as_slice());
        self.eval_cards(&cards)
    }

    /// Score any 5, 6, or 7 distinct cards: the single-lookup path for five,
    /// the minimum rank over all 5-card subsets for six or seven.
    ///
    /// ```
    /// use holdem_eval::cards::parse_cards;
    /// use holdem_eval::evaluator::{Category, Evaluator};
    ///
    /// let evaluator = Evaluator::new();
    /// let royal = parse_cards("Ah Kh Qh Jh Th").unwrap();
    /// let rank = evaluator.eval_cards(&royal).unwrap();
    /// assert_eq!(rank.raw(), 1);
    /// assert_eq!(rank.class(), Category::StraightFlush);
    /// ```
    pub fn eval_cards(&self, cards: &[Card]) -> Result<HandRank, EvalError> {
        if !matches!(cards.len(), 5 | 6 | 7) {
            return Err(EvalError::UnsupportedHandSize(cards.len()));
        }
        // A silently repeated card would corrupt the prime-product keys, so
        // reject duplicates before any lookup.
        for (i, &card) in cards.iter().enumerate() {
            if cards[i + 1..].contains(&card) {
                return Err(EvalError::DuplicateCard(card));
            }
        }

        let mut best = HandRank(lookup::MAX_HIGH_CARD);
        for idx in SubsetsOfFive::new(cards.len()) {
            let five = [
                cards[idx[0]],
                cards[idx[1]],
                cards[idx[2]],
                cards[idx[3]],
                cards[idx[4]],
            ];
            let rank = self.rank_five(&five);
            if rank < best {
                best = rank;
            }
        }
        Ok(best)
    }

    /// Score exactly five distinct cards with a single table lookup.
    pub fn eval_five(&self, cards: &[Card; 5]) -> Result<HandRank, EvalError> {
        self.eval_cards(cards)
    }

    /// Core O(1) scorer. Caller guarantees five distinct, valid cards, under
    /// which every key is present in the table.
    fn rank_five(&self, cards: &[Card; 5]) -> HandRank {
        let same_suit = cards.iter().fold(0xF, |acc, c| acc & c.suit_mask()) != 0;
        let raw = if same_suit {
            let mask = cards.iter().fold(0, |acc, c| acc | c.bitrank());
            self.table.flush_rank(prime_product_from_bitrank(mask))
        } else {
            self.table.plain_rank(prime_product(cards))
        };
        HandRank(raw)
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}
