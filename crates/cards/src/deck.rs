// Copyright (C) 2025 The Showdown developers
// SPDX-License-Identifier: Apache-2.0

//! Deck of remaining cards and exhaustive combination enumeration.
use rand::prelude::*;

use crate::card::{Card, Rank, Suit};
use crate::set::CardSet;

/// Creates the table of nck(n, k) for n <= 52 and k <= 7.
const fn make_nck() -> [[u32; 8]; 53] {
    let mut t = [[0u32; 8]; 53];
    let mut n = 0;

    while n <= 52 {
        // base case nck(n, 0) = 1
        t[n][0] = 1;

        if n > 0 {
            let mut k = 1;
            while k <= 7 {
                // nck(n, k) = nck(n-1, k-1) + nck(n-1, k)
                t[n][k] = t[n - 1][k - 1] + t[n - 1][k];
                k += 1;
            }
        }

        n += 1;
    }

    t
}

const NCKS: [[u32; 8]; 53] = make_nck();

/// Returns the binomial coefficient for n choose k.
#[inline]
fn nck(n: usize, k: usize) -> usize {
    assert!(n <= 52, "n={n} must be 0 <= n <= 52");
    assert!(k <= 7, "k={k} must be 0 <= k <= 7");
    NCKS[n][k] as usize
}

/// Uses the combinatorial number system to convert n to a
/// k-combination (see Theorem L pg. 260 Knuth 4a).
fn nth_ksubset(mut n: usize, k: usize) -> [usize; 7] {
    assert!(k <= 7);

    let mut out = [0; 7];
    for k in (0..k).rev() {
        let mut c = k;
        while nck(c, k + 1) <= n {
            c += 1;
        }

        c -= 1;
        out[k] = c;

        n -= nck(c, k + 1);
    }

    out
}

/// A deck of cards.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in a full deck.
    pub const SIZE: usize = 52;

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.cards.shuffle(rng);
        deck
    }

    /// Creates the deck of the cards not in `used`, in index order.
    pub fn without(used: CardSet) -> Self {
        Self {
            cards: used.complement().iter().collect(),
        }
    }

    /// Deals a card from the deck.
    pub fn deal(&mut self) -> Card {
        self.cards.pop().unwrap()
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// Removes a card from the deck.
    pub fn remove(&mut self, card: Card) {
        self.cards.retain(|c| c != &card);
    }

    /// The number of distinct k-card combinations in this deck.
    ///
    /// Panics if k > 7.
    pub fn combinations(&self, k: usize) -> usize {
        nck(self.cards.len(), k)
    }

    /// Calls the `f` closure for every k-card combination.
    ///
    /// Combinations are visited in combinatorial-number-system order, each
    /// exactly once. For `k = 0` the closure is called once with an empty
    /// slice. Panics if k > 7.
    pub fn for_each_combination<F>(&self, k: usize, f: F)
    where
        F: FnMut(&[Card]),
    {
        self.for_each_combination_slice(k, 0, self.combinations(k).max(1), f);
    }

    /// Calls the `f` closure for `count` k-card combinations starting from
    /// the combination with index `nth`.
    ///
    /// The combination space is totally ordered, so slices with adjacent
    /// `[nth, nth + count)` windows partition it with no overlap and no gap.
    /// Enumeration stops at the end of the space; a `count` of zero visits
    /// nothing. Panics if k > 7.
    pub fn for_each_combination_slice<F>(&self, k: usize, nth: usize, count: usize, mut f: F)
    where
        F: FnMut(&[Card]),
    {
        assert!(k <= 7, "k={k} must be 0 <= k <= 7");

        if count == 0 {
            return;
        }

        if k == 0 {
            // The single completion of an already complete draw.
            if nth == 0 {
                f(&[]);
            }
            return;
        }

        let n = self.cards.len();
        let total = nck(n, k);
        if nth >= total {
            return;
        }

        // Algorithm L from TAOCP 4a, seeded at the nth combination.
        let mut c = vec![0usize; k + 3];
        let ks = nth_ksubset(nth, k);
        for i in 0..k {
            c[i + 1] = ks[i];
        }
        c[k + 1] = n;

        let mut h = vec![self.cards[0]; k];
        let mut remaining = count.min(total - nth);

        loop {
            for (slot, &pos) in h.iter_mut().zip(&c[1..=k]) {
                *slot = self.cards[pos];
            }
            f(&h);

            remaining -= 1;
            if remaining == 0 {
                break;
            }

            let mut j = 1;
            while c[j] + 1 == c[j + 1] {
                c[j] = j - 1;
                j += 1;
            }

            if j > k {
                break;
            }

            c[j] += 1;
        }
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .collect::<Vec<_>>();
        Self { cards }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}
