// Copyright (C) 2025 The Showdown developers
// SPDX-License-Identifier: Apache-2.0

//! Exhaustive showdown equity.
//!
//! Given the active holdings, any mucked holdings, and the visible board,
//! the engine enumerates every completion of the board from the remaining
//! deck, evaluates every holding against every completion, and splits one
//! point per completion equally among the strongest holdings. The result is
//! exact, not sampled.
//!
//! Inputs are validated once at this boundary; the enumeration itself runs
//! unchecked.
use log::debug;
use std::thread;

use showdown_cards::{Card, CardSet, Deck, ParseCardError};

use crate::eval::HandValue;

/// Error validating an equity request.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EquityError {
    /// A card token failed to parse.
    #[error(transparent)]
    Parse(#[from] ParseCardError),
    /// Fewer than two active holdings.
    #[error("need at least 2 active holdings, got {0}")]
    TooFewHoldings(usize),
    /// A holding without exactly two cards.
    #[error("holding {0:?} must have exactly 2 cards, got {1}")]
    HoldingSize(String, usize),
    /// A board that is not 0, 3, 4, or 5 cards.
    #[error("board must have 0, 3, 4, or 5 cards, got {0}")]
    BoardSize(usize),
    /// A card that occurs twice across the inputs.
    #[error("duplicate card {0}")]
    DuplicateCard(Card),
    /// A deck too small to complete the board.
    #[error("only {available} cards left in the deck, need {needed}")]
    NotEnoughCards {
        /// Cards remaining after removing holdings, mucks, and board.
        available: usize,
        /// Cards still to deal to complete the board.
        needed: usize,
    },
}

/// Computes the exact showdown equity of each active holding.
///
/// Holdings are two-card strings like `"A♠ K♢"`, the board a
/// whitespace-separated string of 0, 3, 4, or 5 cards. Mucked holdings are
/// excluded from the remaining deck but win nothing. The returned vector is
/// positionally aligned with `active` and sums to 1.0.
///
/// ```
/// # use showdown_eval::equity;
/// let eq = equity(&["2♠ 3♠", "2♡ 3♡"], &[], "A♢ A♣ K♢ K♣ Q♢").unwrap();
/// assert_eq!(eq, vec![0.5, 0.5]);
/// ```
pub fn equity(active: &[&str], mucked: &[&str], board: &str) -> Result<Vec<f64>, EquityError> {
    let spot = Spot::parse(active, mucked, board)?;
    let total = spot.combinations();
    debug!(
        "equity: {} holdings, {} cards to deal, {total} boards",
        spot.holdings.len(),
        spot.to_deal
    );

    let sums = spot.score_slice(0, total);
    Ok(normalize(sums, total))
}

/// Computes the same equities as [equity] across all available cores.
///
/// The combination space is split into contiguous near-equal slices, one
/// isolated worker per slice; each worker returns its own accumulator and
/// the partial sums are added element-wise before normalizing, so the output
/// matches the sequential path.
pub fn equity_parallel(
    active: &[&str],
    mucked: &[&str],
    board: &str,
) -> Result<Vec<f64>, EquityError> {
    let spot = Spot::parse(active, mucked, board)?;
    let total = spot.combinations();

    let tasks = thread::available_parallelism()
        .map(usize::from)
        .unwrap_or(1)
        .min(total);
    debug!(
        "equity_parallel: {} holdings, {} cards to deal, {total} boards, {tasks} tasks",
        spot.holdings.len(),
        spot.to_deal
    );

    let sums = thread::scope(|s| {
        let spot = &spot;
        let workers = (0..tasks)
            .map(|i| {
                let start = i * total / tasks;
                let end = (i + 1) * total / tasks;
                s.spawn(move || spot.score_slice(start, end - start))
            })
            .collect::<Vec<_>>();

        let mut sums = vec![0.0; spot.holdings.len()];
        for worker in workers {
            for (sum, partial) in sums.iter_mut().zip(worker.join().unwrap()) {
                *sum += partial;
            }
        }
        sums
    });

    Ok(normalize(sums, total))
}

/// A validated equity request: per-holding patterns with the board already
/// merged in, and the deck of cards still unseen.
struct Spot {
    holdings: Vec<CardSet>,
    deck: Deck,
    to_deal: usize,
}

impl Spot {
    fn parse(active: &[&str], mucked: &[&str], board: &str) -> Result<Spot, EquityError> {
        if active.len() < 2 {
            return Err(EquityError::TooFewHoldings(active.len()));
        }

        let mut used = CardSet::empty();

        let board_cards = claim_cards(board, &mut used)?;
        let board_count = board_cards.count();
        if !matches!(board_count, 0 | 3 | 4 | 5) {
            return Err(EquityError::BoardSize(board_count));
        }

        let mut holdings = Vec::with_capacity(active.len());
        for holding in active {
            let cards = claim_cards(holding, &mut used)?;
            if cards.count() != 2 {
                return Err(EquityError::HoldingSize(holding.to_string(), cards.count()));
            }
            holdings.push(cards | board_cards);
        }

        for holding in mucked {
            let cards = claim_cards(holding, &mut used)?;
            if cards.count() != 2 {
                return Err(EquityError::HoldingSize(holding.to_string(), cards.count()));
            }
        }

        let deck = Deck::without(used);
        let to_deal = 5 - board_count;
        if deck.count() < to_deal {
            return Err(EquityError::NotEnoughCards {
                available: deck.count(),
                needed: to_deal,
            });
        }

        Ok(Spot {
            holdings,
            deck,
            to_deal,
        })
    }

    fn combinations(&self) -> usize {
        self.deck.combinations(self.to_deal)
    }

    /// Scores `count` board completions starting at the `nth`, splitting
    /// one point per completion equally among the strongest holdings.
    fn score_slice(&self, nth: usize, count: usize) -> Vec<f64> {
        let mut sums = vec![0.0; self.holdings.len()];
        let mut values = vec![0u16; self.holdings.len()];

        self.deck
            .for_each_combination_slice(self.to_deal, nth, count, |cards| {
                let future = cards.iter().copied().collect::<CardSet>();

                let mut best = u16::MAX;
                for (value, holding) in values.iter_mut().zip(&self.holdings) {
                    *value = HandValue::eval(*holding | future).value();
                    best = best.min(*value);
                }

                let winners = values.iter().filter(|&&v| v == best).count();
                let share = 1.0 / winners as f64;
                for (sum, &value) in sums.iter_mut().zip(&values) {
                    if value == best {
                        *sum += share;
                    }
                }
            });

        sums
    }
}

/// Parses a whitespace-separated card list, claiming every card from the
/// shared pool so a card used twice anywhere across the inputs is rejected.
fn claim_cards(s: &str, used: &mut CardSet) -> Result<CardSet, EquityError> {
    let mut cards = CardSet::empty();
    for token in s.split_whitespace() {
        let card = token.parse::<Card>()?;
        if used.contains(card) {
            return Err(EquityError::DuplicateCard(card));
        }
        used.insert(card);
        cards.insert(card);
    }
    Ok(cards)
}

fn normalize(sums: Vec<f64>, total: usize) -> Vec<f64> {
    sums.into_iter().map(|sum| sum / total as f64).collect()
}
