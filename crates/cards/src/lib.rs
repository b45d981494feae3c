// Copyright (C) 2025 The Showdown developers
// SPDX-License-Identifier: Apache-2.0

//! Showdown card types.
//!
//! This crate defines the card primitives shared by the evaluator and the
//! equity engine: a [Card] with a fixed 0..52 bit index, a [CardSet] bitset
//! over those indices, and a [Deck] of remaining cards with exhaustive
//! k-combination enumeration.
//!
//! Cards parse from two-character tokens using either suit glyph alphabet:
//!
//! ```
//! # use showdown_cards::Card;
//! let a: Card = "A♠".parse().unwrap();
//! let b: Card = "A♤".parse().unwrap();
//! assert_eq!(a, b);
//! ```
//!
//! A [CardSet] parses from a whitespace-separated token list:
//!
//! ```
//! # use showdown_cards::CardSet;
//! let board: CardSet = "T♣ A♡ 9♠".parse().unwrap();
//! assert_eq!(board.count(), 3);
//! ```
//!
//! To enumerate board completions build the deck of free cards and walk its
//! k-combinations, all of them or a contiguous slice of the combination
//! space:
//!
//! ```
//! # use showdown_cards::{CardSet, Deck};
//! let used: CardSet = "A♠ K♠ Q♡ Q♢".parse().unwrap();
//! let deck = Deck::without(used);
//! let mut count = 0;
//! deck.for_each_combination(2, |cards| {
//!     assert_eq!(cards.len(), 2);
//!     count += 1;
//! });
//! assert_eq!(count, deck.combinations(2));
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod card;
mod deck;
mod set;

pub use card::{Card, ParseCardError, Rank, Suit};
pub use deck::Deck;
pub use set::CardSet;
