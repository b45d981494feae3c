// Copyright (C) 2025 The Showdown developers
// SPDX-License-Identifier: Apache-2.0

//! Bit pattern card sets.
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{BitOr, BitOrAssign};
use std::str::FromStr;

use crate::card::{Card, ParseCardError, Suit};

/// An immutable set of cards stored as a 52-bit pattern.
///
/// Bit `i` is set iff the card with index `i` is in the set. Sets combine by
/// bitwise union and are `Copy` values; membership, union, and complement
/// are the only operations the evaluator and the equity engine need.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardSet(u64);

impl CardSet {
    const MASK: u64 = (1 << 52) - 1;

    /// The empty set.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// The raw 52-bit pattern.
    #[inline]
    pub const fn bits(self) -> u64 {
        self.0
    }

    /// Checks if the given card is in the set.
    #[inline]
    pub fn contains(self, card: Card) -> bool {
        self.0 & (1 << card.index()) != 0
    }

    /// Adds a card to the set.
    #[inline]
    pub fn insert(&mut self, card: Card) {
        self.0 |= 1 << card.index();
    }

    /// Returns this set with the given card added.
    #[inline]
    pub fn with(self, card: Card) -> Self {
        Self(self.0 | (1 << card.index()))
    }

    /// The number of cards in the set.
    #[inline]
    pub fn count(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Checks if the set is empty.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// The set of the 52 deck cards not in this set.
    pub fn complement(self) -> Self {
        Self(!self.0 & Self::MASK)
    }

    /// The 13-bit rank pattern of the cards of the given suit, deuce at
    /// bit 0, ace at bit 12.
    #[inline]
    pub fn suit_ranks(self, suit: Suit) -> u16 {
        ((self.0 >> (suit as u8 * 13)) & 0x1FFF) as u16
    }

    /// Iterates the cards in the set in index order.
    pub fn iter(self) -> impl Iterator<Item = Card> {
        Iter(self.0)
    }
}

struct Iter(u64);

impl Iterator for Iter {
    type Item = Card;

    fn next(&mut self) -> Option<Card> {
        if self.0 == 0 {
            None
        } else {
            let index = self.0.trailing_zeros() as u8;
            self.0 &= self.0 - 1;
            Some(Card::from_index(index))
        }
    }
}

impl From<Card> for CardSet {
    fn from(card: Card) -> Self {
        Self(1 << card.index())
    }
}

impl FromIterator<Card> for CardSet {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::empty(), |set, card| set.with(card))
    }
}

impl BitOr for CardSet {
    type Output = CardSet;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for CardSet {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl FromStr for CardSet {
    type Err = ParseCardError;

    /// Parses a whitespace-separated card token list, e.g. `"T♣ A♡ 9♠"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split_whitespace()
            .map(Card::from_str)
            .collect::<Result<_, _>>()
    }
}

impl fmt::Display for CardSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut sep = "";
        for card in self.iter() {
            write!(f, "{sep}{card}")?;
            sep = " ";
        }
        Ok(())
    }
}

impl fmt::Debug for CardSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CardSet({self})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Rank;

    #[test]
    fn insert_and_contains() {
        let mut set = CardSet::empty();
        assert!(set.is_empty());

        let card = Card::new(Rank::Ace, Suit::Spades);
        set.insert(card);
        assert!(set.contains(card));
        assert!(!set.contains(Card::new(Rank::Ace, Suit::Hearts)));
        assert_eq!(set.count(), 1);

        // Inserting again is a no-op.
        set.insert(card);
        assert_eq!(set.count(), 1);
    }

    #[test]
    fn union() {
        let a: CardSet = "A♠ K♠".parse().unwrap();
        let b: CardSet = "K♠ Q♡".parse().unwrap();
        let both = a | b;
        assert_eq!(both.count(), 3);
        assert!(both.contains("Q♡".parse().unwrap()));
    }

    #[test]
    fn complement() {
        let set: CardSet = "A♠ K♢ 2♣".parse().unwrap();
        let rest = set.complement();
        assert_eq!(rest.count(), 49);
        for card in set.iter() {
            assert!(!rest.contains(card));
        }
        assert_eq!((set | rest).count(), 52);
    }

    #[test]
    fn suit_ranks() {
        let set: CardSet = "2♠ A♠ T♠ 3♡ J♡ 4♢ Q♢ 5♣ K♣".parse().unwrap();
        assert_eq!(set.suit_ranks(Suit::Spades), 0b1000100000001);
        assert_eq!(set.suit_ranks(Suit::Hearts), 0b0001000000010);
        assert_eq!(set.suit_ranks(Suit::Diamonds), 0b0010000000100);
        assert_eq!(set.suit_ranks(Suit::Clubs), 0b0100000001000);
    }

    #[test]
    fn iter_in_index_order() {
        let set: CardSet = "K♣ 2♠ J♡".parse().unwrap();
        let cards = set.iter().collect::<Vec<_>>();
        assert_eq!(cards.len(), 3);
        assert_eq!(cards[0].to_string(), "2♠");
        assert_eq!(cards[1].to_string(), "J♡");
        assert_eq!(cards[2].to_string(), "K♣");
    }

    #[test]
    fn parse_and_display() {
        let set: CardSet = "T♣ A♥ 9♠".parse().unwrap();
        assert_eq!(set.to_string(), "9♠ A♡ T♣");

        assert!("T♣ AX".parse::<CardSet>().is_err());
    }
}
