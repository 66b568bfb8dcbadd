//! Precomputed rank tables.
//!
//! Every one of the 7,462 distinct 5-card hand equivalence classes maps a
//! prime-product key to a rank in `[1, 7462]`, lower = stronger:
//!
//! ```text
//! Straight Flush     10      ranks    1..=10
//! Four of a Kind    156      ranks   11..=166
//! Full House        156      ranks  167..=322
//! Flush            1277      ranks  323..=1599
//! Straight           10      ranks 1600..=1609
//! Three of a Kind   858      ranks 1610..=2467
//! Two Pair          858      ranks 2468..=3325
//! One Pair         2860      ranks 3326..=6185
//! High Card        1277      ranks 6186..=7462
//! ```
//!
//! Flush-eligible patterns live in one map (keyed by the prime product of a
//! 13-bit rank-presence mask), everything else in the other (keyed by the
//! prime product of the full rank multiset). The two keyspaces are disjoint
//! and together partition `[1, 7462]`.

use crate::cards::{prime_product_from_bitrank, PRIMES};
use std::collections::HashMap;
use std::sync::OnceLock;

/// Rank-class boundaries: a rank at or below the boundary belongs to that
/// class or a stronger one.
pub const MAX_STRAIGHT_FLUSH: u16 = 10;
pub const MAX_FOUR_OF_A_KIND: u16 = 166;
pub const MAX_FULL_HOUSE: u16 = 322;
pub const MAX_FLUSH: u16 = 1599;
pub const MAX_STRAIGHT: u16 = 1609;
pub const MAX_THREE_OF_A_KIND: u16 = 2467;
pub const MAX_TWO_PAIR: u16 = 3325;
pub const MAX_PAIR: u16 = 6185;
pub const MAX_HIGH_CARD: u16 = 7462;

/// Entry counts per table; construction asserts both. The flush map holds
/// the 10 straight flushes plus 1,277 plain flushes; the plain map holds
/// the remaining 6,175 equivalence classes.
pub const FLUSH_ENTRIES: usize = 1_287;
pub const PLAIN_ENTRIES: usize = 6_175;

/// The 10 straight rank-presence masks, broadway (`TJQKA`) down to the
/// wheel (`A2345`).
const STRAIGHT_MASKS: [u32; 10] = [
    0x1F00, 0xF80, 0x7C0, 0x3E0, 0x1F0, 0xF8, 0x7C, 0x3E, 0x1F, 0x100F,
];

/// Immutable prime-product -> rank mappings for all 7,462 hand classes.
///
/// Built once with [RankTable::build] (or shared process-wide via
/// [RankTable::shared]) and never mutated afterward, so it is freely
/// readable from concurrent evaluation calls.
#[derive(Debug, Clone)]
pub struct RankTable {
    flush: HashMap<u32, u16>,
    plain: HashMap<u32, u16>,
}

impl RankTable {
    /// Enumerate and rank every 5-card hand equivalence class.
    ///
    /// Pure computation over fixed combinatorics; a count mismatch is a
    /// construction bug and panics.
    pub fn build() -> Self {
        let mut table = Self {
            flush: HashMap::with_capacity(FLUSH_ENTRIES),
            plain: HashMap::with_capacity(PLAIN_ENTRIES),
        };
        table.fill_unique_five(); // straight flushes, flushes, straights, high cards
        table.fill_multiples(); // quads, boats, trips, two pair, pair
        assert_eq!(table.flush.len(), FLUSH_ENTRIES, "flush table miscounted");
        assert_eq!(table.plain.len(), PLAIN_ENTRIES, "plain table miscounted");
        table
    }

    /// Process-wide table behind a one-time-initialization guard.
    pub fn shared() -> &'static RankTable {
        static TABLE: OnceLock<RankTable> = OnceLock::new();
        TABLE.get_or_init(RankTable::build)
    }

    pub fn flush_entries(&self) -> usize {
        self.flush.len()
    }

    pub fn plain_entries(&self) -> usize {
        self.plain.len()
    }

    /// Rank for a 5-card flush, keyed by the prime product of its rank mask.
    /// Every legal key is present; a miss is a construction bug.
    pub(crate) fn flush_rank(&self, key: u32) -> u16 {
        self.flush[&key]
    }

    /// Rank for a 5-card non-flush hand, keyed by its rank-multiset prime
    /// product. Every legal key is present; a miss is a construction bug.
    pub(crate) fn plain_rank(&self, key: u32) -> u16 {
        self.plain[&key]
    }

    /// Hands made of five distinct ranks: straight flushes, plain flushes,
    /// straights, and high cards. All four groups reuse the same mask lists.
    fn fill_unique_five(&mut self) {
        // All C(13,5) = 1287 masks with exactly 5 bits set, generated in
        // increasing numeric order, minus the 10 straights. Reversed so that
        // increasing rank means decreasing hand strength.
        let mut others = Vec::with_capacity(1_277);
        let mut bits: u32 = 0b11111;
        for _ in 0..1_286 {
            bits = next_bit_permutation(bits);
            if !STRAIGHT_MASKS.contains(&bits) {
                others.push(bits);
            }
        }
        others.reverse();

        let mut rank = 1;
        for &mask in &STRAIGHT_MASKS {
            self.flush.insert(prime_product_from_bitrank(mask), rank);
            rank += 1;
        }
        let mut rank = MAX_FULL_HOUSE + 1;
        for &mask in &others {
            self.flush.insert(prime_product_from_bitrank(mask), rank);
            rank += 1;
        }

        // Same patterns without the flush: straights and high cards.
        let mut rank = MAX_FLUSH + 1;
        for &mask in &STRAIGHT_MASKS {
            self.plain.insert(prime_product_from_bitrank(mask), rank);
            rank += 1;
        }
        let mut rank = MAX_PAIR + 1;
        for &mask in &others {
            self.plain.insert(prime_product_from_bitrank(mask), rank);
            rank += 1;
        }
    }

    /// Hands with a repeated rank: four of a kind, full house, three of a
    /// kind, two pair, and one pair.
    ///
    /// Within each group the repeated rank(s) and kickers iterate in the
    /// fixed order Q, J, T, 9, 8, 7, 6, 5, 4, 3, 2, A, K. The assigned rank
    /// values encode exactly this order; a pair of twos with A, J, 5 kickers
    /// must come out at 5618.
    fn fill_multiples(&mut self) {
        // Prime indices in the order Q down to Two, then Ace, then King.
        let desc: Vec<usize> = (0..13).rev().map(|i| (i + 11) % 13).collect();

        let mut rank = MAX_STRAIGHT_FLUSH + 1;
        for &quad in &desc {
            for &kick in desc.iter().filter(|&&k| k != quad) {
                let key = PRIMES[quad].pow(4) * PRIMES[kick];
                self.plain.insert(key, rank);
                rank += 1;
            }
        }
        debug_assert_eq!(rank - 1, MAX_FOUR_OF_A_KIND);

        let mut rank = MAX_FOUR_OF_A_KIND + 1;
        for &trip in &desc {
            for &pair in desc.iter().filter(|&&p| p != trip) {
                let key = PRIMES[trip].pow(3) * PRIMES[pair].pow(2);
                self.plain.insert(key, rank);
                rank += 1;
            }
        }
        debug_assert_eq!(rank - 1, MAX_FULL_HOUSE);

        let mut rank = MAX_STRAIGHT + 1;
        for &trip in &desc {
            let kickers: Vec<usize> = desc.iter().copied().filter(|&k| k != trip).collect();
            for a in 0..kickers.len() {
                for b in a + 1..kickers.len() {
                    let key = PRIMES[trip].pow(3) * PRIMES[kickers[a]] * PRIMES[kickers[b]];
                    self.plain.insert(key, rank);
                    rank += 1;
                }
            }
        }
        debug_assert_eq!(rank - 1, MAX_THREE_OF_A_KIND);

        let mut rank = MAX_THREE_OF_A_KIND + 1;
        for a in 0..desc.len() {
            for b in a + 1..desc.len() {
                let (hi, lo) = (desc[a], desc[b]);
                for &kick in desc.iter().filter(|&&k| k != hi && k != lo) {
                    let key = PRIMES[hi].pow(2) * PRIMES[lo].pow(2) * PRIMES[kick];
                    self.plain.insert(key, rank);
                    rank += 1;
                }
            }
        }
        debug_assert_eq!(rank - 1, MAX_TWO_PAIR);

        let mut rank = MAX_TWO_PAIR + 1;
        for &pair in &desc {
            let kickers: Vec<usize> = desc.iter().copied().filter(|&k| k != pair).collect();
            for a in 0..kickers.len() {
                for b in a + 1..kickers.len() {
                    for c in b + 1..kickers.len() {
                        let key = PRIMES[pair].pow(2)
                            * PRIMES[kickers[a]]
                            * PRIMES[kickers[b]]
                            * PRIMES[kickers[c]];
                        self.plain.insert(key, rank);
                        rank += 1;
                    }
                }
            }
        }
        debug_assert_eq!(rank - 1, MAX_PAIR);
    }
}

/// Next lexicographic permutation with the same popcount.
///
/// Standard successor bit-trick; called in a bounded loop to walk all 1,287
/// five-of-thirteen bit patterns in increasing numeric order.
pub(crate) fn next_bit_permutation(v: u32) -> u32 {
    let t = v | (v - 1);
    (t + 1) | (((!t & (t + 1)) - 1) >> (v.trailing_zeros() + 1))
}
