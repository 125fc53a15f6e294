//! Heuristic preflop hand strength.
//!
//! A closed-form score per starting hand, expressed as a percentage. It is a
//! ranking heuristic and not a real equity calculation: the coefficients below
//! are fixed and every other equity figure in the crate is derived from them.

use super::combo::{Combo, Shape};
use super::rank::Rank;

const PAIR_FLOOR: f64 = 50.0;
const EQUITY_FLOOR: f64 = 35.0;
const EQUITY_CEIL: f64 = 86.0;

/// Round to two decimal places.
#[inline]
pub fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Single-hand preflop equity score in [35, 86] (pairs in [50, 86]).
pub fn single_hand_equity(combo: Combo) -> f64 {
    let high = combo.high();
    let low = combo.low();

    if combo.is_pair() {
        return (45.0 + high.value() as f64 * 2.9).clamp(PAIR_FLOOR, EQUITY_CEIL);
    }

    let suited = combo.shape() == Shape::Suited;
    let h = high.value() as f64;
    let l = low.value() as f64;
    let gap = low.index() - high.index();

    let base = if suited { 30.0 } else { 28.0 };
    let mut eq = base + h * 1.6 + l * 0.7;

    match gap {
        1 => eq += 1.6,
        2 => eq += 0.8,
        _ => {}
    }
    if suited {
        eq += 2.2;
    }
    if high.is_broadway() && low.is_broadway() {
        eq += 1.0;
    }
    // Suited wheel ace
    if suited && high == Rank::Ace && low == Rank::Five {
        eq += 1.2;
    }

    round2(eq).clamp(EQUITY_FLOOR, EQUITY_CEIL)
}
