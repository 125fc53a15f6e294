//! Approximate equity of a hand against an opponent range.
//!
//! Head-to-head values are derived from the single-hand strength score, then
//! averaged over the opponent's range weighted by how many concrete two-card
//! combinations each class represents.

use crate::hands::{round2, single_hand_equity, Combo};
use crate::range::Range;

/// Approximate equity of `hero` against a single `villain` hand, in [20, 80].
pub fn head_to_head_approx(hero: Combo, villain: Combo) -> f64 {
    let diff = single_hand_equity(hero) - single_hand_equity(villain);
    (50.0 + diff * 1.2).clamp(20.0, 80.0)
}

/// Combo-weighted average equity of `hero` against `range`, rounded to two
/// decimals.
///
/// An empty range means "no information" and returns the single-hand score
/// unchanged.
pub fn weighted_equity_vs_range(hero: Combo, range: &Range) -> f64 {
    let (sum, total_weight) = range.iter().fold((0.0, 0u32), |(sum, weight), villain| {
        let w = villain.weight();
        (sum + head_to_head_approx(hero, *villain) * w as f64, weight + w)
    });

    if total_weight == 0 {
        return single_hand_equity(hero);
    }
    round2(sum / total_weight as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::range::Preset;

    fn combo(label: &str) -> Combo {
        label.parse().unwrap()
    }

    #[test]
    fn test_head_to_head_symmetry() {
        let ak = combo("AKo");
        let qj = combo("QJs");
        let a = head_to_head_approx(ak, qj);
        let b = head_to_head_approx(qj, ak);
        assert!((a + b - 100.0).abs() < 1e-9);
        assert_eq!(head_to_head_approx(ak, ak), 50.0);
    }

    #[test]
    fn test_head_to_head_clamped() {
        let aa = combo("AA");
        let trash = combo("32o");
        assert_eq!(head_to_head_approx(aa, trash), 80.0);
        assert_eq!(head_to_head_approx(trash, aa), 20.0);
    }

    #[test]
    fn test_empty_range_falls_back_exactly() {
        let empty = Range::empty();
        for hero in Combo::all() {
            assert_eq!(weighted_equity_vs_range(hero, &empty), single_hand_equity(hero));
        }
    }

    #[test]
    fn test_single_hand_range() {
        let hero = combo("AKo");
        let range = Range::parse("QJs");
        let expected = round2(head_to_head_approx(hero, combo("QJs")));
        assert_eq!(weighted_equity_vs_range(hero, &range), expected);
    }

    #[test]
    fn test_weighting_by_combos() {
        // Offsuit hands carry three times the weight of suited ones.
        let hero = combo("KQo");
        let aks = combo("AKs");
        let ako = combo("AKo");
        let range = Range::from_combos([aks, ako]);

        let expected =
            (head_to_head_approx(hero, aks) * 4.0 + head_to_head_approx(hero, ako) * 12.0) / 16.0;
        assert_eq!(weighted_equity_vs_range(hero, &range), round2(expected));
    }

    #[test]
    fn test_tighter_range_lowers_equity() {
        let hero = combo("AKo");
        let vs_tight = weighted_equity_vs_range(hero, &Preset::Tight.range());
        let vs_random = weighted_equity_vs_range(hero, &Preset::Random.range());
        assert!(vs_tight <= vs_random);

        let vs_loose = weighted_equity_vs_range(hero, &Preset::Loose.range());
        assert!(vs_tight <= vs_loose);
    }
}
