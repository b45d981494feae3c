// Copyright (C) 2025 The Showdown developers
// SPDX-License-Identifier: Apache-2.0

//! Seven-card hand strength.
use std::cmp::Ordering;

use showdown_cards::{CardSet, Suit};

use super::tables;

/// The strength of a 7-card hand.
///
/// The raw value lies in `[1, 7462]` with 1 the strongest; two hands of
/// equal strength have equal values, never approximately equal ones. The
/// ordering is reversed so the stronger hand compares greater:
///
/// ```
/// # use showdown_eval::*;
/// let quads: CardSet = "9♣ 9♢ 9♡ 9♠ A♣ 2♢ 3♡".parse().unwrap();
/// let flush: CardSet = "A♠ J♠ 8♠ 5♠ 2♠ K♢ K♣".parse().unwrap();
/// assert!(HandValue::eval(quads) > HandValue::eval(flush));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandValue(u16);

impl HandValue {
    /// Evaluates a 7-card hand.
    ///
    /// The pattern must have exactly 7 bits set. This is a caller contract,
    /// not a checked precondition: the evaluator runs inside enumeration
    /// loops at millions of calls per query and performs no validation, so
    /// the result for any other cardinality is meaningless.
    pub fn eval(hand: CardSet) -> Self {
        debug_assert_eq!(hand.count(), 7, "eval requires exactly 7 cards");

        let tables = &*tables::TABLES;
        let mut octet = 0u64;
        let mut flush = tables::NO_FLUSH;

        for suit in Suit::suits() {
            let (contribution, value) = tables.suit[hand.suit_ranks(suit) as usize];
            octet += contribution;
            flush = flush.min(value);
        }

        Self(tables.octet[&octet].min(flush))
    }

    /// The raw strength in `[1, 7462]`, smaller is stronger.
    pub fn value(self) -> u16 {
        self.0
    }

    /// The hand category this strength falls in.
    pub fn rank(self) -> HandRank {
        match self.0 {
            1..=10 => HandRank::StraightFlush,
            11..=166 => HandRank::FourOfAKind,
            167..=322 => HandRank::FullHouse,
            323..=1599 => HandRank::Flush,
            1600..=1609 => HandRank::Straight,
            1610..=2467 => HandRank::ThreeOfAKind,
            2468..=3325 => HandRank::TwoPair,
            3326..=6185 => HandRank::OnePair,
            6186..=7462 => HandRank::HighCard,
            v => panic!("Invalid hand value {v}"),
        }
    }
}

impl PartialOrd for HandValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HandValue {
    fn cmp(&self, other: &Self) -> Ordering {
        // Smaller raw value is the stronger hand.
        other.0.cmp(&self.0)
    }
}

/// Hand category, weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HandRank {
    /// High card
    HighCard = 0,
    /// One pair
    OnePair,
    /// Two pair
    TwoPair,
    /// Three of a kind
    ThreeOfAKind,
    /// Straight
    Straight,
    /// Flush
    Flush,
    /// Full house
    FullHouse,
    /// Four of a kind
    FourOfAKind,
    /// Straight flush
    StraightFlush,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(s: &str) -> HandValue {
        HandValue::eval(s.parse().unwrap())
    }

    #[test]
    fn categories() {
        let cases = [
            ("A♠ K♠ Q♠ J♠ T♠ 2♡ 3♢", HandRank::StraightFlush),
            ("A♣ 2♣ 3♣ 4♣ 5♣ K♡ Q♢", HandRank::StraightFlush),
            ("A♠ A♡ A♢ A♣ K♠ 2♡ 3♢", HandRank::FourOfAKind),
            ("2♠ 2♡ 2♢ 2♣ 3♠ 4♡ 5♢", HandRank::FourOfAKind),
            ("K♠ K♡ K♢ 9♠ 9♣ A♢ 2♣", HandRank::FullHouse),
            ("A♠ J♠ 8♠ 5♠ 2♠ K♢ K♣", HandRank::Flush),
            ("6♠ 7♡ 8♢ 9♣ T♠ T♡ 2♣", HandRank::Straight),
            ("A♠ 2♡ 3♢ 4♣ 5♠ 9♡ J♣", HandRank::Straight),
            ("8♣ 8♢ 8♠ K♡ 5♢ J♠ 2♣", HandRank::ThreeOfAKind),
            ("A♠ A♡ K♠ K♡ Q♠ J♢ 9♡", HandRank::TwoPair),
            ("A♣ A♢ K♠ Q♡ 9♢ 5♠ 2♡", HandRank::OnePair),
            ("A♠ K♢ Q♡ J♣ 9♠ 5♡ 2♢", HandRank::HighCard),
        ];

        for (hand, rank) in cases {
            let value = eval(hand);
            assert_eq!(value.rank(), rank, "{hand}");
            assert!((1..=7462).contains(&value.value()), "{hand}");
        }
    }

    #[test]
    fn known_values() {
        // Royal flush and the wheel straight flush.
        assert_eq!(eval("A♠ K♠ Q♠ J♠ T♠ 2♡ 3♢").value(), 1);
        assert_eq!(eval("A♣ 2♣ 3♣ 4♣ 5♣ K♡ Q♢").value(), 10);

        // The best quads: A A A A K.
        assert_eq!(eval("A♠ A♡ A♢ A♣ K♠ 2♡ 3♢").value(), 11);

        // The best full house: A A A K K.
        assert_eq!(eval("A♠ A♡ A♢ K♣ K♠ 2♡ 3♢").value(), 167);

        // The best flush: A K Q J 9.
        assert_eq!(eval("A♠ K♠ Q♠ J♠ 9♠ 2♡ 3♢").value(), 323);

        // A ten-high straight, four below the ace-high straight at 1600.
        assert_eq!(eval("6♠ 7♡ 8♢ 9♣ T♠ T♡ 2♣").value(), 1604);
    }

    #[test]
    fn category_ordering() {
        // Each hand in the chain beats the next.
        let chain = [
            "A♠ K♠ Q♠ J♠ T♠ 2♡ 3♢", // straight flush
            "2♠ 2♡ 2♢ 2♣ 3♠ 4♡ 5♢", // four of a kind
            "2♠ 2♡ 2♢ 3♣ 3♠ 7♡ 8♢", // full house
            "2♠ 3♠ 4♠ 5♠ 7♠ K♡ A♢", // flush
            "A♠ 2♡ 3♢ 4♣ 5♠ 9♡ J♣", // straight
            "2♠ 2♡ 2♢ 4♣ 5♠ 7♡ 8♣", // three of a kind
            "2♠ 2♡ 3♢ 3♣ 5♠ 7♡ 8♣", // two pair
            "2♠ 2♡ 4♢ 5♣ 7♠ 8♡ J♣", // one pair
            "2♠ 4♡ 5♢ 7♣ 8♠ J♡ A♣", // high card
        ];

        for pair in chain.windows(2) {
            let stronger = eval(pair[0]);
            let weaker = eval(pair[1]);
            assert!(stronger > weaker, "{} vs {}", pair[0], pair[1]);
            assert!(stronger.value() < weaker.value());
        }
    }

    #[test]
    fn suit_permutation_ties() {
        // Equal strength across suits is an exact value tie.
        let a = eval("A♠ A♣ K♠ K♣ Q♠ J♢ 9♡");
        let b = eval("A♡ A♢ K♡ K♢ Q♣ J♠ 9♠");
        assert_eq!(a, b);
        assert_eq!(a.value(), b.value());
    }

    #[test]
    fn best_five_of_seven() {
        // Three pairs play the best two with the best remaining kicker, so
        // both hands are exactly A A K K Q.
        let three_pairs = eval("A♠ A♡ K♠ K♡ Q♠ Q♡ 2♣");
        let two_pairs = eval("A♢ A♣ K♢ K♣ Q♢ J♡ 3♣");
        assert_eq!(three_pairs, two_pairs);
        assert_eq!(three_pairs.rank(), HandRank::TwoPair);

        // A flush outranks a straight made from the same seven cards.
        let both = eval("2♠ 3♠ 4♠ 5♠ 7♠ 6♡ 8♢");
        assert_eq!(both.rank(), HandRank::Flush);
        assert_eq!(both.value(), 1599);

        // Two trips play the full house.
        assert_eq!(eval("A♠ A♡ A♢ K♣ K♠ K♡ 2♢").value(), 167);
    }

    #[test]
    fn wheel_uses_ace_low() {
        let wheel = eval("A♠ 2♡ 3♢ 4♣ 5♠ 9♡ J♣");
        let six_high = eval("2♠ 3♡ 4♢ 5♣ 6♠ 9♡ J♣");
        assert_eq!(wheel.value(), 1609);
        assert!(six_high > wheel);
    }
}
