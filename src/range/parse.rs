//! Range notation parsing.
//!
//! Supports: "AA", "66+", "AKs", "AKo", "AK" (both suited and offsuit),
//! "ATs+", "ATo+" and "AT+" (offsuit). Tokens are comma-separated and
//! case-insensitive.

use rustc_hash::FxHashSet;

use crate::hands::{Combo, Rank};

use super::Range;

impl Range {
    /// Parse a range from notation such as `"66+, ATs+, KJs, AQo+"`.
    ///
    /// Combos are kept in the order they are first produced; duplicates are
    /// dropped. Malformed tokens are skipped without error.
    pub fn parse(notation: &str) -> Self {
        let mut seen = FxHashSet::default();
        let mut combos = Vec::new();

        for token in notation.split(',') {
            for combo in parse_token(token) {
                if seen.insert(combo) {
                    combos.push(combo);
                }
            }
        }

        Self { combos }
    }
}

/// Suffix of a non-pair token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Suffix {
    Suited,
    Offsuit,
    Both,
}

/// Expand one token into combos. Returns an empty list for blank or
/// malformed tokens.
fn parse_token(token: &str) -> Vec<Combo> {
    let token = token.trim();
    if token.is_empty() {
        return Vec::new();
    }

    let (body, plus) = match token.strip_suffix('+') {
        Some(body) => (body, true),
        None => (token, false),
    };

    let chars: Vec<char> = body.chars().collect();
    let (core, suffix) = match chars.as_slice() {
        [a, b] => ([*a, *b], Suffix::Both),
        [a, b, s] => match s.to_ascii_lowercase() {
            's' => ([*a, *b], Suffix::Suited),
            'o' => ([*a, *b], Suffix::Offsuit),
            _ => return skip(token),
        },
        _ => return skip(token),
    };

    let (Some(anchor), Some(kicker)) = (Rank::from_char(core[0]), Rank::from_char(core[1])) else {
        return skip(token);
    };

    if anchor == kicker {
        if suffix != Suffix::Both {
            return skip(token);
        }
        return if plus {
            pairs_from(anchor)
        } else {
            vec![Combo::pair(anchor)]
        };
    }

    if plus {
        // Bare "AT+" means offsuit.
        let suited = suffix == Suffix::Suited;
        return kickers_up_to(anchor, kicker)
            .map(|k| if suited { Combo::suited(anchor, k) } else { Combo::offsuit(anchor, k) })
            .collect();
    }

    match suffix {
        Suffix::Suited => vec![Combo::suited(anchor, kicker)],
        Suffix::Offsuit => vec![Combo::offsuit(anchor, kicker)],
        Suffix::Both => vec![Combo::suited(anchor, kicker), Combo::offsuit(anchor, kicker)],
    }
}

/// Every pair from `rank` up to aces, lowest first.
fn pairs_from(rank: Rank) -> Vec<Combo> {
    (0..=rank.index())
        .rev()
        .filter_map(Rank::from_index)
        .map(Combo::pair)
        .collect()
}

/// Kickers from `kicker` (inclusive) up to `anchor` (exclusive), weakest
/// first. Empty when the kicker outranks the anchor.
fn kickers_up_to(anchor: Rank, kicker: Rank) -> impl Iterator<Item = Rank> {
    ((anchor.index() + 1)..=kicker.index())
        .rev()
        .filter_map(Rank::from_index)
}

fn skip(token: &str) -> Vec<Combo> {
    log::debug!("skipping malformed range token {:?}", token);
    Vec::new()
}
