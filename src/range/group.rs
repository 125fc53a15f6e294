//! Compact display notation for a list of combos.
//!
//! This is a display convenience and not an inverse of the parser. In
//! particular the pair group is always written as "<lowest pair>+" without
//! checking that the pairs in between are present, so `{55, TT}` groups to
//! "55+". Parsing the output of [`group_combos`] may give a larger range.

use crate::hands::{Combo, Rank, Shape};

/// Non-ace hands that are always written out when present.
const NAMED_HANDS: [&str; 4] = ["KQo", "KQs", "QJs", "JTs"];

/// At most this many leftover hands are listed individually.
const MAX_SINGLES: usize = 20;

/// Group combos into notation such as `"66+, ATo+, A2s+, KQs, K9s"`.
///
/// Fragments, in order:
/// 1. the lowest pair followed by "+"
/// 2. the lowest-kicker Ax offsuit hand followed by "+"
/// 3. the lowest-kicker Ax suited hand followed by "+"
/// 4. any of KQo, KQs, QJs, JTs that are present
/// 5. up to 20 remaining non-pair, non-ace hands in input order
pub fn group_combos(combos: &[Combo]) -> String {
    let mut fragments = Vec::new();

    if let Some(lowest) = combos.iter().filter(|c| c.is_pair()).min_by_key(|c| c.high()) {
        fragments.push(format!("{lowest}+"));
    }

    // Anchored on the weakest kicker so "AJo+" covers AJo, AQo and AKo.
    for shape in [Shape::Offsuit, Shape::Suited] {
        let lowest = combos
            .iter()
            .filter(|c| c.high() == Rank::Ace && c.shape() == shape)
            .min_by_key(|c| c.low());
        if let Some(lowest) = lowest {
            fragments.push(format!("{lowest}+"));
        }
    }

    let named: Vec<Combo> = NAMED_HANDS
        .iter()
        .filter_map(|label| label.parse::<Combo>().ok())
        .filter(|c| combos.contains(c))
        .collect();
    fragments.extend(named.iter().map(Combo::to_string));

    fragments.extend(
        combos
            .iter()
            .filter(|c| !c.is_pair() && c.high() != Rank::Ace && !named.contains(c))
            .take(MAX_SINGLES)
            .map(Combo::to_string),
    );

    fragments.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::range::Range;

    fn group(notation: &str) -> String {
        Range::parse(notation).to_notation()
    }

    #[test]
    fn test_pairs_group() {
        assert_eq!(group("66+"), "66+");
        assert!(group("66+").contains("66+"));
        assert_eq!(group("QQ, 88"), "88+");
    }

    #[test]
    fn test_non_contiguous_pairs_compress() {
        // Known approximation: gaps between pairs are not checked.
        assert_eq!(group("55, TT"), "55+");
    }

    #[test]
    fn test_ace_groups() {
        assert_eq!(group("ATo+"), "ATo+");
        assert_eq!(group("AQs, A5s, AKs"), "A5s+");
        assert_eq!(group("AJo+, A9s+"), "AJo+, A9s+");
    }

    #[test]
    fn test_ace_group_uses_weakest_kicker() {
        assert_eq!(group("AKo, AQo, AJo"), "AJo+");
        assert_eq!(group("AJo, AKo"), "AJo+");
    }

    #[test]
    fn test_standard_preset_groups() {
        assert_eq!(
            group("66+, ATs+, KJs+, QJs, AJo+, KQo"),
            "66+, AJo+, ATs+, KQo, KQs, QJs, KJs"
        );
    }

    #[test]
    fn test_named_hands_not_repeated() {
        let text = group("JTs, KQo, T9s");
        assert_eq!(text, "KQo, JTs, T9s");
    }

    #[test]
    fn test_singles_capped() {
        // 78 suited hands minus the 12 Ax suited
        let all_suited = Range::from_combos(Combo::all().filter(|c| c.is_suited()));
        let text = all_suited.to_notation();
        let fragments: Vec<&str> = text.split(", ").collect();
        // A2s+, three named suited hands, 20 singles
        assert_eq!(fragments.len(), 1 + 3 + MAX_SINGLES);
        assert_eq!(fragments[0], "A2s+");
    }

    #[test]
    fn test_empty() {
        assert_eq!(group_combos(&[]), "");
    }
}
