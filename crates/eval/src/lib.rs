// Copyright (C) 2025 The Showdown developers
// SPDX-License-Identifier: Apache-2.0

//! Showdown hand evaluator and equity engine.
//!
//! The evaluator maps any 7-card [CardSet] to a total-ordered strength with
//! 7462 distinct values. The equity engine enumerates every completion of a
//! partial board and scores win/tie outcomes to produce exact showdown
//! equities, sequentially or across all available cores.
//!
//! To compare hands evaluate their 7-card patterns:
//!
//! ```
//! # use showdown_eval::*;
//! let trips: CardSet = "8♣ 8♢ 8♠ K♡ 5♢ J♠ 2♣".parse().unwrap();
//! let pair: CardSet = "A♣ A♢ K♠ Q♡ 9♢ 5♠ 2♡".parse().unwrap();
//! let v1 = HandValue::eval(trips);
//! let v2 = HandValue::eval(pair);
//! assert!(v1 > v2);
//! assert_eq!(v1.rank(), HandRank::ThreeOfAKind);
//! ```
//!
//! To compute equities give the active holdings, any mucked holdings, and
//! the board:
//!
//! ```
//! # use showdown_eval::*;
//! let eq = equity(&["A♠ A♣", "K♠ K♣"], &[], "A♡ K♢ 2♠ 3♣ 4♡").unwrap();
//! assert_eq!(eq, vec![1.0, 0.0]);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod equity;
pub mod eval;

pub use equity::{EquityError, equity, equity_parallel};
pub use eval::{HandRank, HandValue};

// Reexport cards types.
pub use showdown_cards::{Card, CardSet, Deck, ParseCardError, Rank, Suit};
