//! Hand ranges.
//!
//! A [`Range`] is an ordered list of unique starting-hand classes, usually
//! built from human-entered notation.
//!
//! ## Modules
//!
//! - `parse`: range notation to combos
//! - `group`: combos back to compact notation for display
//! - `preset`: the built-in opponent ranges

mod group;
mod parse;
mod preset;

pub use group::group_combos;
pub use preset::{Preset, UnknownPreset};

use crate::hands::Combo;

/// An ordered set of starting-hand classes.
///
/// Order is the order in which combos were first added; no combo appears
/// twice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Range {
    combos: Vec<Combo>,
}

impl Range {
    /// Create an empty range.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a range from combos, dropping repeats after the first.
    pub fn from_combos<I: IntoIterator<Item = Combo>>(combos: I) -> Self {
        let mut seen = rustc_hash::FxHashSet::default();
        Self {
            combos: combos.into_iter().filter(|c| seen.insert(*c)).collect(),
        }
    }

    /// Number of hand classes in the range.
    pub fn len(&self) -> usize {
        self.combos.len()
    }

    /// Check if the range holds no hands.
    pub fn is_empty(&self) -> bool {
        self.combos.is_empty()
    }

    /// Check if a hand class is in the range.
    pub fn contains(&self, combo: &Combo) -> bool {
        self.combos.contains(combo)
    }

    /// Iterate over hand classes in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Combo> {
        self.combos.iter()
    }

    /// Hand classes as a slice.
    pub fn combos(&self) -> &[Combo] {
        &self.combos
    }

    /// Total number of concrete two-card combinations.
    pub fn num_combos(&self) -> u32 {
        self.combos.iter().map(Combo::weight).sum()
    }

    /// Labels such as "AKs" in insertion order.
    pub fn labels(&self) -> Vec<String> {
        self.combos.iter().map(Combo::to_string).collect()
    }

    /// Compact notation for display. Lossy, see [`group_combos`].
    pub fn to_notation(&self) -> String {
        group_combos(&self.combos)
    }
}

impl<'a> IntoIterator for &'a Range {
    type Item = &'a Combo;
    type IntoIter = std::slice::Iter<'a, Combo>;

    fn into_iter(self) -> Self::IntoIter {
        self.combos.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        let range = Range::empty();
        assert!(range.is_empty());
        assert_eq!(range.len(), 0);
        assert_eq!(range.num_combos(), 0);
        assert_eq!(range.to_notation(), "");
    }

    #[test]
    fn test_num_combos() {
        assert_eq!(Range::parse("AA").num_combos(), 6);
        assert_eq!(Range::parse("AKs").num_combos(), 4);
        assert_eq!(Range::parse("AKo").num_combos(), 12);
        assert_eq!(Range::parse("AK").num_combos(), 16);
        assert_eq!(Range::parse("TT+").num_combos(), 30);
    }

    #[test]
    fn test_from_combos_dedups() {
        let aa: Combo = "AA".parse().unwrap();
        let kk: Combo = "KK".parse().unwrap();
        let range = Range::from_combos([kk, aa, kk]);
        assert_eq!(range.combos(), &[kk, aa]);
    }

    #[test]
    fn test_all_hands_count() {
        let all = Range::from_combos(Combo::all());
        assert_eq!(all.len(), 169);
        assert_eq!(all.num_combos(), 1326);
    }
}
