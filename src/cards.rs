use std::fmt;
use std::str::FromStr;

/// Primes assigned to ranks Two..=Ace in increasing order.
///
/// The product of the primes for a 5-card rank multiset is unique per
/// multiset (unique factorization), so prime products serve as collision-free
/// lookup keys regardless of card order or suit.
pub const PRIMES: [u32; 13] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41];

/// Card ranks from Two (low) to Ace (high).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
    Ace = 14,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    pub const fn value(self) -> u8 {
        self as u8
    }

    /// The prime assigned to this rank (see [PRIMES]).
    pub const fn prime(self) -> u32 {
        PRIMES[self as usize - 2]
    }

    pub const fn to_char(self) -> char {
        match self {
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RankParseError {
    #[error("invalid rank: '{0}'")]
    InvalidRank(char),
}

impl TryFrom<char> for Rank {
    type Error = RankParseError;

    /// Accepts exactly the 13 rank tokens `23456789TJQKA`.
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '2' => Ok(Rank::Two),
            '3' => Ok(Rank::Three),
            '4' => Ok(Rank::Four),
            '5' => Ok(Rank::Five),
            '6' => Ok(Rank::Six),
            '7' => Ok(Rank::Seven),
            '8' => Ok(Rank::Eight),
            '9' => Ok(Rank::Nine),
            'T' => Ok(Rank::Ten),
            'J' => Ok(Rank::Jack),
            'Q' => Ok(Rank::Queen),
            'K' => Ok(Rank::King),
            'A' => Ok(Rank::Ace),
            _ => Err(RankParseError::InvalidRank(c)),
        }
    }
}

/// Four suits, each carried as a one-hot bit so "all N cards share a suit"
/// reduces to a nonzero AND over the suit masks. Suit order has no
/// hand-strength meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    Spades,
    Hearts,
    Diamonds,
    Clubs,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

    /// One-hot mask: spade=1, heart=2, diamond=4, club=8.
    pub const fn mask(self) -> u32 {
        match self {
            Suit::Spades => 1,
            Suit::Hearts => 2,
            Suit::Diamonds => 4,
            Suit::Clubs => 8,
        }
    }

    pub const fn to_char(self) -> char {
        match self {
            Suit::Spades => 's',
            Suit::Hearts => 'h',
            Suit::Diamonds => 'd',
            Suit::Clubs => 'c',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SuitParseError {
    #[error("invalid suit: '{0}'")]
    InvalidSuit(char),
}

impl TryFrom<char> for Suit {
    type Error = SuitParseError;

    /// Accepts exactly the lowercase suit tokens `shdc`.
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            's' => Ok(Suit::Spades),
            'h' => Ok(Suit::Hearts),
            'd' => Ok(Suit::Diamonds),
            'c' => Ok(Suit::Clubs),
            _ => Err(SuitParseError::InvalidSuit(c)),
        }
    }
}

const BITRANK_SHIFT: u32 = 16;
const SUIT_SHIFT: u32 = 12;
const RANK_SHIFT: u32 = 8;

/// A playing card packed into a single 32-bit word:
///
/// ```text
///   bits 16..28   bits 12..15   bits 8..11   bits 0..5
///   +-----------+-------------+------------+-----------+
///   |  bitrank  |    suit     |    rank    |   prime   |
///   +-----------+-------------+------------+-----------+
/// ```
///
/// `bitrank` is a 13-bit one-hot rank field (bit `rank - 2` set), `suit` the
/// one-hot suit mask, `rank` the 4-bit rank value 2..=14, and `prime` the
/// rank's prime. All four fields fall out of the word with fixed shifts.
///
/// ```
/// use holdem_eval::cards::{Card, Rank, Suit};
///
/// let card = Card::new(Rank::Ace, Suit::Spades);
/// assert_eq!(card.to_string(), "As");
/// assert_eq!(card.prime(), 41);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card(u32);

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        let r = rank as u32;
        let bitrank = 1 << (r - 2) << BITRANK_SHIFT;
        Card(bitrank | suit.mask() << SUIT_SHIFT | r << RANK_SHIFT | rank.prime())
    }

    pub fn rank(self) -> Rank {
        Rank::ALL[self.rank_value() as usize - 2]
    }

    pub fn suit(self) -> Suit {
        match self.suit_mask() {
            1 => Suit::Spades,
            2 => Suit::Hearts,
            4 => Suit::Diamonds,
            _ => Suit::Clubs,
        }
    }

    /// Rank value 2..=14.
    pub const fn rank_value(self) -> u8 {
        ((self.0 >> RANK_SHIFT) & 0xF) as u8
    }

    /// One-hot suit mask (1, 2, 4, or 8).
    pub const fn suit_mask(self) -> u32 {
        (self.0 >> SUIT_SHIFT) & 0xF
    }

    /// 13-bit one-hot rank field, bit `rank - 2` set.
    pub const fn bitrank(self) -> u32 {
        (self.0 >> BITRANK_SHIFT) & 0x1FFF
    }

    /// The prime assigned to this card's rank.
    pub const fn prime(self) -> u32 {
        self.0 & 0x3F
    }

    /// The packed 32-bit word.
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({self})")
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CardParseError {
    #[error("invalid card: '{0}'")]
    Invalid(String),
    #[error(transparent)]
    Rank(#[from] RankParseError),
    #[error(transparent)]
    Suit(#[from] SuitParseError),
}

impl FromStr for Card {
    type Err = CardParseError;

    /// Parses a 2-character description: rank token then suit token, e.g.
    /// `"As"` or `"Th"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let ((Some(r), Some(su)), None) = ((chars.next(), chars.next()), chars.next()) else {
            return Err(CardParseError::Invalid(s.to_string()));
        };
        Ok(Card::new(Rank::try_from(r)?, Suit::try_from(su)?))
    }
}

/// Parse multiple cards separated by whitespace or commas.
///
/// ```
/// use holdem_eval::cards::{parse_cards, Card, Rank, Suit};
///
/// let cards = parse_cards("As, Kd Tc").unwrap();
/// assert_eq!(cards[0], Card::new(Rank::Ace, Suit::Spades));
/// assert_eq!(cards[1], Card::new(Rank::King, Suit::Diamonds));
/// assert_eq!(cards[2], Card::new(Rank::Ten, Suit::Clubs));
/// ```
pub fn parse_cards(input: &str) -> Result<Vec<Card>, CardParseError> {
    input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .map(Card::from_str)
        .collect()
}

/// Product of the prime fields of `cards`.
///
/// Repeated ranks inflate the exponent of the corresponding prime, so the
/// product fingerprints the full rank multiset of a 5-card hand.
pub fn prime_product(cards: &[Card]) -> u32 {
    cards.iter().map(|c| c.prime()).product()
}

/// Product of the primes for each set bit of a 13-bit rank-presence mask.
///
/// Used for straight and flush keys, where all five ranks are known to be
/// distinct and suits are irrelevant.
pub fn prime_product_from_bitrank(mask: u32) -> u32 {
    (0..13u32)
        .filter(|&i| mask & (1 << i) != 0)
        .map(|i| PRIMES[i as usize])
        .product()
}
