// Copyright (C) 2025 The Showdown developers
// SPDX-License-Identifier: Apache-2.0

//! Card, rank, and suit definitions.
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A playing card identified by its fixed bit index.
///
/// Each of the 52 cards has a globally unique index in `0..52` computed as
/// `suit * 13 + rank`, so cards of one suit occupy a contiguous 13-bit block
/// with the deuce at offset 0 and the ace at offset 12:
///
/// ```text
///        ♣      |      ♢      |      ♡      |      ♠
///  AKQJT98765432_AKQJT98765432_AKQJT98765432_AKQJT98765432
///  bit 51 ... 39 bit 38 ... 26 bit 25 ... 13 bit 12 ...  0
/// ```
///
/// The index assignment is a bijection fixed for the lifetime of the
/// process; both suit glyph alphabets resolve to the same index.
#[derive(Clone, Copy, Eq, PartialEq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Card(u8);

impl Card {
    /// Create a card given a rank and a suit.
    pub fn new(rank: Rank, suit: Suit) -> Card {
        Self(suit as u8 * 13 + rank as u8)
    }

    /// This card's bit index in `0..52`.
    #[inline]
    pub fn index(self) -> u8 {
        self.0
    }

    pub(crate) fn from_index(index: u8) -> Card {
        debug_assert!(index < 52);
        Self(index)
    }

    /// Returns the card rank.
    pub fn rank(self) -> Rank {
        match self.0 % 13 {
            0 => Rank::Deuce,
            1 => Rank::Trey,
            2 => Rank::Four,
            3 => Rank::Five,
            4 => Rank::Six,
            5 => Rank::Seven,
            6 => Rank::Eight,
            7 => Rank::Nine,
            8 => Rank::Ten,
            9 => Rank::Jack,
            10 => Rank::Queen,
            11 => Rank::King,
            _ => Rank::Ace,
        }
    }

    /// Returns the card suit.
    pub fn suit(self) -> Suit {
        match self.0 / 13 {
            0 => Suit::Spades,
            1 => Suit::Hearts,
            2 => Suit::Diamonds,
            3 => Suit::Clubs,
            _ => panic!("Invalid card index {}", self.0),
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank(), self.suit())
    }
}

/// Error parsing a card token.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseCardError {
    /// The token is not a rank character followed by a suit glyph.
    #[error("card token must be <rank><suit>, got {0:?}")]
    Token(String),
    /// The rank character is not one of `2..9 T J Q K A`.
    #[error("unknown rank {0:?}")]
    Rank(char),
    /// The suit character is not a glyph from either alphabet.
    #[error("unknown suit {0:?}")]
    Suit(char),
}

impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(r), Some(u), None) => {
                let rank = Rank::try_from(r)?;
                let suit = Suit::try_from(u)?;
                Ok(Card::new(rank, suit))
            }
            _ => Err(ParseCardError::Token(s.to_string())),
        }
    }
}

/// Card rank, deuce low, ace high.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Deuce
    Deuce = 0,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    /// Returns all ranks from deuce to ace.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
        .into_iter()
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            Rank::Deuce => '2',
            Rank::Trey => '3',
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
        };

        write!(f, "{rank}")
    }
}

impl TryFrom<char> for Rank {
    type Error = ParseCardError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '2' => Ok(Rank::Deuce),
            '3' => Ok(Rank::Trey),
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
            _ => Err(ParseCardError::Rank(c)),
        }
    }
}

/// Card suit.
///
/// Two glyph alphabets denote the suits, `♠ ♡ ♢ ♣` and `♤ ♥ ♦ ♧`; they are
/// pure aliases and parse to the same suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Spades suit.
    Spades = 0,
    /// Hearts suit.
    Hearts,
    /// Diamonds suit.
    Diamonds,
    /// Clubs suit.
    Clubs,
}

impl Suit {
    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs].into_iter()
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Spades => '♠',
            Suit::Hearts => '♡',
            Suit::Diamonds => '♢',
            Suit::Clubs => '♣',
        };

        write!(f, "{suit}")
    }
}

impl TryFrom<char> for Suit {
    type Error = ParseCardError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '♠' | '♤' => Ok(Suit::Spades),
            '♡' | '♥' => Ok(Suit::Hearts),
            '♢' | '♦' => Ok(Suit::Diamonds),
            '♣' | '♧' => Ok(Suit::Clubs),
            _ => Err(ParseCardError::Suit(c)),
        }
    }
}
