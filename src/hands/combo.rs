//! Starting-hand classes ("combos").
//!
//! There are 169 strategically distinct preflop hands:
//! - 13 pairs (AA, KK, ..., 22)
//! - 78 suited hands (AKs, AQs, ..., 32s)
//! - 78 offsuit hands (AKo, AQo, ..., 32o)

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::rank::Rank;

/// Number of distinct starting-hand classes.
pub const NUM_COMBOS: usize = 169;

/// Side length of the hand grid.
pub const GRID_SIZE: usize = 13;

/// Shape of a starting hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// Two cards of the same rank.
    Pair,
    /// Two ranks, same suit.
    Suited,
    /// Two ranks, different suits.
    Offsuit,
}

/// A canonical starting-hand class such as "AA", "AKs" or "T9o".
///
/// `high` is never lower than `low`; they are equal only for pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Combo {
    high: Rank,
    low: Rank,
    shape: Shape,
}

impl Combo {
    /// A pocket pair.
    pub fn pair(rank: Rank) -> Self {
        Self {
            high: rank,
            low: rank,
            shape: Shape::Pair,
        }
    }

    /// A suited non-pair. Ranks are reordered so the higher one comes first.
    /// Equal ranks give the pair.
    pub fn suited(a: Rank, b: Rank) -> Self {
        Self::non_pair(a, b, Shape::Suited)
    }

    /// An offsuit non-pair. Ranks are reordered so the higher one comes first.
    /// Equal ranks give the pair.
    pub fn offsuit(a: Rank, b: Rank) -> Self {
        Self::non_pair(a, b, Shape::Offsuit)
    }

    fn non_pair(a: Rank, b: Rank, shape: Shape) -> Self {
        if a == b {
            return Self::pair(a);
        }
        let (high, low) = if a > b { (a, b) } else { (b, a) };
        Self { high, low, shape }
    }

    /// Hand at a grid cell, or `None` outside the 13×13 grid. Pairs sit on
    /// the diagonal, suited hands above it (row < col) and offsuit hands
    /// below it (row > col).
    pub fn from_grid(row: usize, col: usize) -> Option<Self> {
        let high = Rank::from_index(row.min(col))?;
        let low = Rank::from_index(row.max(col))?;
        Some(if row == col {
            Self::pair(high)
        } else if row < col {
            Self::suited(high, low)
        } else {
            Self::offsuit(high, low)
        })
    }

    /// Grid cell `(row, col)` of this hand.
    pub fn grid_position(&self) -> (usize, usize) {
        let hi = self.high.index();
        let lo = self.low.index();
        match self.shape {
            Shape::Pair => (hi, hi),
            Shape::Suited => (hi, lo),
            Shape::Offsuit => (lo, hi),
        }
    }

    /// All 169 hands in grid order (row-major, AA first, 22 last).
    pub fn all() -> impl Iterator<Item = Combo> {
        (0..GRID_SIZE)
            .flat_map(|row| (0..GRID_SIZE).filter_map(move |col| Combo::from_grid(row, col)))
    }

    /// Higher rank.
    #[inline]
    pub fn high(&self) -> Rank {
        self.high
    }

    /// Lower rank (equal to `high` for pairs).
    #[inline]
    pub fn low(&self) -> Rank {
        self.low
    }

    /// Hand shape.
    #[inline]
    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Check if this is a pocket pair.
    #[inline]
    pub fn is_pair(&self) -> bool {
        self.shape == Shape::Pair
    }

    /// Check if this is a suited non-pair.
    #[inline]
    pub fn is_suited(&self) -> bool {
        self.shape == Shape::Suited
    }

    /// Number of concrete two-card combinations in this class.
    pub fn weight(&self) -> u32 {
        match self.shape {
            Shape::Pair => 6, // C(4,2)
            Shape::Suited => 4,
            Shape::Offsuit => 12,
        }
    }
}

impl fmt::Display for Combo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.shape {
            Shape::Pair => write!(f, "{}{}", self.high, self.low),
            Shape::Suited => write!(f, "{}{}s", self.high, self.low),
            Shape::Offsuit => write!(f, "{}{}o", self.high, self.low),
        }
    }
}

/// Error returned when a string is not a canonical hand label.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid hand label: {0:?}")]
pub struct ComboParseError(pub String);

impl FromStr for Combo {
    type Err = ComboParseError;

    /// Parse a single hand label: "QQ", "AKs", "t9o". Rank order is not
    /// enforced ("KAs" gives AKs); a non-pair must carry a suffix.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ComboParseError(s.to_string());
        let chars: Vec<char> = s.trim().chars().collect();

        let (r1, r2) = match chars.as_slice() {
            [a, b] | [a, b, _] => (
                Rank::from_char(*a).ok_or_else(err)?,
                Rank::from_char(*b).ok_or_else(err)?,
            ),
            _ => return Err(err()),
        };

        match (chars.get(2).map(|c| c.to_ascii_lowercase()), r1 == r2) {
            (None, true) => Ok(Combo::pair(r1)),
            (Some('s'), false) => Ok(Combo::suited(r1, r2)),
            (Some('o'), false) => Ok(Combo::offsuit(r1, r2)),
            _ => Err(err()),
        }
    }
}

impl Serialize for Combo {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Combo {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        label.parse().map_err(serde::de::Error::custom)
    }
}
