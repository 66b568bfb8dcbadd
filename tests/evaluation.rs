//! End-to-end checks of the rank table and evaluator: exhaustive 5-card
//! enumeration, regression scores, and brute-force cross-checks of the
//! best-of-N search.

use holdem_eval::cards::{parse_cards, Card, Rank, Suit};
use holdem_eval::deck::Deck;
use holdem_eval::evaluator::{Category, EvalError, Evaluator, HandRank};
use holdem_eval::hand::{Board, HoleCards};
use holdem_eval::lookup::RankTable;
use proptest::prelude::*;
use std::collections::{HashMap, HashSet};

fn full_deck() -> Vec<Card> {
    Suit::ALL
        .iter()
        .flat_map(|&s| Rank::ALL.iter().map(move |&r| Card::new(r, s)))
        .collect()
}

/// Minimum rank over every 5-card subset, written as plain nested loops so
/// it cannot share a bug with the evaluator's subset iterator.
fn brute_force_best(evaluator: &Evaluator, cards: &[Card]) -> HandRank {
    let n = cards.len();
    let mut best: Option<HandRank> = None;
    for a in 0..n {
        for b in a + 1..n {
            for c in b + 1..n {
                for d in c + 1..n {
                    for e in d + 1..n {
                        let five = [cards[a], cards[b], cards[c], cards[d], cards[e]];
                        let rank = evaluator.eval_five(&five).unwrap();
                        if best.map_or(true, |bst| rank < bst) {
                            best = Some(rank);
                        }
                    }
                }
            }
        }
    }
    best.unwrap()
}

#[test]
fn table_split_is_1287_flush_and_6175_plain() {
    // 10 straight flushes + 1,277 flushes on one side; the 6,175 remaining
    // classes on the other, 7,462 in all
    let table = RankTable::build();
    assert_eq!(table.flush_entries(), 1_287);
    assert_eq!(table.plain_entries(), 6_175);
    assert_eq!(table.flush_entries() + table.plain_entries(), 7_462);
}

#[test]
fn exhaustive_enumeration_hits_all_7462_ranks() {
    let evaluator = Evaluator::new();
    let deck = full_deck();

    let mut ranks: HashSet<u16> = HashSet::with_capacity(7_462);
    let mut class_counts: HashMap<Category, u32> = HashMap::new();
    for a in 0..52 {
        for b in a + 1..52 {
            for c in b + 1..52 {
                for d in c + 1..52 {
                    for e in d + 1..52 {
                        let five = [deck[a], deck[b], deck[c], deck[d], deck[e]];
                        let rank = evaluator.eval_five(&five).unwrap();
                        ranks.insert(rank.raw());
                        *class_counts.entry(rank.class()).or_insert(0) += 1;
                    }
                }
            }
        }
    }

    assert_eq!(ranks.len(), 7_462);
    assert_eq!(*ranks.iter().min().unwrap(), 1);
    assert_eq!(*ranks.iter().max().unwrap(), 7_462);

    // canonical per-class hand counts over all C(52,5) = 2,598,960 hands
    assert_eq!(class_counts[&Category::StraightFlush], 40);
    assert_eq!(class_counts[&Category::FourOfAKind], 624);
    assert_eq!(class_counts[&Category::FullHouse], 3_744);
    assert_eq!(class_counts[&Category::Flush], 5_108);
    assert_eq!(class_counts[&Category::Straight], 10_200);
    assert_eq!(class_counts[&Category::ThreeOfAKind], 54_912);
    assert_eq!(class_counts[&Category::TwoPair], 123_552);
    assert_eq!(class_counts[&Category::Pair], 1_098_240);
    assert_eq!(class_counts[&Category::HighCard], 1_302_540);
}

#[test]
fn regression_pair_of_twos_scores_5618() {
    let evaluator = Evaluator::new();
    let hole: HoleCards = "2h 2s".parse().unwrap();
    let board: Board = "5s Jc Ah".parse().unwrap();
    let rank = evaluator.evaluate(&hole, &board).unwrap();
    assert_eq!(rank.raw(), 5_618);
    assert_eq!(rank.class(), Category::Pair);
}

#[test]
fn royal_flush_scores_1() {
    let evaluator = Evaluator::new();
    let cards = parse_cards("Ah Kh Qh Jh Th").unwrap();
    let rank = evaluator.eval_cards(&cards).unwrap();
    assert_eq!(rank.raw(), 1);
    assert_eq!(rank.class(), Category::StraightFlush);
}

#[test]
fn worst_hand_scores_7462() {
    let evaluator = Evaluator::new();
    let cards = parse_cards("7s 5h 4d 3c 2s").unwrap();
    let rank = evaluator.eval_cards(&cards).unwrap();
    assert_eq!(rank.raw(), 7_462);
    assert_eq!(rank.class(), Category::HighCard);
    assert_eq!(rank.percentile(), 0.0);
}

#[test]
fn four_aces_classify_as_quads() {
    let evaluator = Evaluator::new();
    let cards = parse_cards("Ah As Ac Ad Th").unwrap();
    let rank = evaluator.eval_cards(&cards).unwrap();
    assert_eq!(rank.class(), Category::FourOfAKind);
}

#[test]
fn trips_beat_two_pair_on_a_shared_board() {
    let evaluator = Evaluator::new();
    let board: Board = "Ac Ah 8d 7d Jh".parse().unwrap();
    let trips: HoleCards = "Ad 6h".parse().unwrap();
    let two_pair: HoleCards = "6c Js".parse().unwrap();

    let strong = evaluator.evaluate(&trips, &board).unwrap();
    let weak = evaluator.evaluate(&two_pair, &board).unwrap();
    assert!(strong < weak);
}

#[test]
fn six_and_seven_card_hands_match_brute_force() {
    let evaluator = Evaluator::new();
    for seed in 0..50 {
        let mut deck = Deck::standard();
        deck.shuffle_seeded(seed);
        let seven = deck.draw_n(7);

        let expected = brute_force_best(&evaluator, &seven);
        assert_eq!(evaluator.eval_cards(&seven).unwrap(), expected);

        let six = &seven[..6];
        let expected = brute_force_best(&evaluator, six);
        assert_eq!(evaluator.eval_cards(six).unwrap(), expected);
    }
}

#[test]
fn adding_board_cards_never_weakens_a_hand() {
    let evaluator = Evaluator::new();
    for seed in 100..120 {
        let mut deck = Deck::standard();
        deck.shuffle_seeded(seed);
        let seven = deck.draw_n(7);
        let five = evaluator.eval_cards(&seven[..5]).unwrap();
        let six = evaluator.eval_cards(&seven[..6]).unwrap();
        let all = evaluator.eval_cards(&seven).unwrap();
        assert!(six <= five);
        assert!(all <= six);
    }
}

#[test]
fn straights_order_by_top_card() {
    let evaluator = Evaluator::new();
    // wheel up to broadway, offsuit so no straight flush sneaks in
    let straights = [
        "Ah 2c 3d 4s 5h",
        "2h 3c 4d 5s 6h",
        "3h 4c 5d 6s 7h",
        "4h 5c 6d 7s 8h",
        "5h 6c 7d 8s 9h",
        "6h 7c 8d 9s Th",
        "7h 8c 9d Ts Jh",
        "8h 9c Td Js Qh",
        "9h Tc Jd Qs Kh",
        "Th Jc Qd Ks Ah",
    ];
    let mut prev: Option<HandRank> = None;
    for s in straights {
        let cards = parse_cards(s).unwrap();
        let rank = evaluator.eval_cards(&cards).unwrap();
        assert_eq!(rank.class(), Category::Straight, "hand: {s}");
        if let Some(p) = prev {
            assert!(rank < p, "straight {s} should beat the one below it");
        }
        prev = Some(rank);
    }
    // the ten straights span exactly ranks 1600..=1609
    assert_eq!(prev.unwrap().raw(), 1_600);
}

#[test]
fn duplicate_card_is_detected() {
    let evaluator = Evaluator::new();
    let cards = parse_cards("Ah Ah 5s Jc 2d").unwrap();
    assert!(matches!(
        evaluator.eval_cards(&cards),
        Err(EvalError::DuplicateCard(_))
    ));
}

#[test]
fn class_is_monotonic_with_the_boundary_table() {
    let boundaries = [
        (10, Category::StraightFlush),
        (166, Category::FourOfAKind),
        (322, Category::FullHouse),
        (1_599, Category::Flush),
        (1_609, Category::Straight),
        (2_467, Category::ThreeOfAKind),
        (3_325, Category::TwoPair),
        (6_185, Category::Pair),
        (7_462, Category::HighCard),
    ];
    for raw in 1..=7_462u16 {
        let rank = HandRank::new(raw).unwrap();
        let expected = boundaries
            .iter()
            .find(|&&(max, _)| raw <= max)
            .map(|&(_, class)| class)
            .unwrap();
        assert_eq!(rank.class(), expected, "rank {raw}");
    }
}

#[test]
fn percentile_endpoints_follow_the_linear_formula() {
    assert_eq!(HandRank::new(7_462).unwrap().percentile(), 0.0);
    assert_eq!(HandRank::new(1).unwrap().percentile(), 1.0 - 1.0 / 7_462.0);
}

proptest! {
    #[test]
    fn card_display_round_trips(rank_ix in 0usize..13, suit_ix in 0usize..4) {
        let card = Card::new(Rank::ALL[rank_ix], Suit::ALL[suit_ix]);
        let parsed: Card = card.to_string().parse().unwrap();
        prop_assert_eq!(parsed, card);
    }

    #[test]
    fn malformed_card_strings_never_parse(s in "[a-zA-Z0-9]{2}") {
        let rank_ok = "23456789TJQKA".contains(s.as_bytes()[0] as char);
        let suit_ok = "shdc".contains(s.as_bytes()[1] as char);
        let parsed = s.parse::<Card>();
        prop_assert_eq!(parsed.is_ok(), rank_ok && suit_ok);
    }

    #[test]
    fn random_seven_card_hands_match_brute_force(
        cards in proptest::sample::subsequence(full_deck(), 7)
    ) {
        let evaluator = Evaluator::new();
        let best = evaluator.eval_cards(&cards).unwrap();
        prop_assert_eq!(best, brute_force_best(&evaluator, &cards));
    }

    #[test]
    fn every_five_card_rank_is_in_range(
        cards in proptest::sample::subsequence(full_deck(), 5)
    ) {
        let evaluator = Evaluator::new();
        let rank = evaluator.eval_cards(&cards).unwrap();
        prop_assert!((1..=7_462).contains(&rank.raw()));
        // re-validating the raw score must agree
        prop_assert_eq!(HandRank::new(rank.raw()).unwrap(), rank);
    }
}
