//! Card ranks.
//!
//! Ranks are listed in descending order (A first) because that is the order
//! of the 13×13 grid and of every "+" expansion in range notation.

use std::fmt;

/// Rank characters in grid order (A first, 2 last).
pub const RANK_CHARS: [char; 13] = [
    'A', 'K', 'Q', 'J', 'T', '9', '8', '7', '6', '5', '4', '3', '2',
];

/// A card rank. The discriminant is the rank's value (A=14 … 2=2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Rank {
    /// Deuce.
    Two = 2,
    /// Trey.
    Three = 3,
    /// Four.
    Four = 4,
    /// Five.
    Five = 5,
    /// Six.
    Six = 6,
    /// Seven.
    Seven = 7,
    /// Eight.
    Eight = 8,
    /// Nine.
    Nine = 9,
    /// Ten.
    Ten = 10,
    /// Jack.
    Jack = 11,
    /// Queen.
    Queen = 12,
    /// King.
    King = 13,
    /// Ace.
    Ace = 14,
}

/// All ranks in grid order (A first).
pub const RANKS: [Rank; 13] = [
    Rank::Ace,
    Rank::King,
    Rank::Queen,
    Rank::Jack,
    Rank::Ten,
    Rank::Nine,
    Rank::Eight,
    Rank::Seven,
    Rank::Six,
    Rank::Five,
    Rank::Four,
    Rank::Three,
    Rank::Two,
];

impl Rank {
    /// Integer value used for ordering and scoring (A=14 … 2=2).
    #[inline]
    pub fn value(self) -> u8 {
        self as u8
    }

    /// Position in the descending 13-slot ordering (A=0 … 2=12).
    #[inline]
    pub fn index(self) -> usize {
        (14 - self.value()) as usize
    }

    /// Rank at a grid index, or `None` past the deuce.
    #[inline]
    pub fn from_index(index: usize) -> Option<Self> {
        RANKS.get(index).copied()
    }

    /// Parse a rank character, case-insensitive.
    pub fn from_char(c: char) -> Option<Self> {
        let upper = c.to_ascii_uppercase();
        RANK_CHARS
            .iter()
            .position(|&rc| rc == upper)
            .and_then(Self::from_index)
    }

    /// Display character ('A', 'K', ..., '2').
    pub fn to_char(self) -> char {
        RANK_CHARS[self.index()]
    }

    /// Ten or better.
    #[inline]
    pub fn is_broadway(self) -> bool {
        self.value() >= 10
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
