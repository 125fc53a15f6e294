//! Starting-hand model.
//!
//! This module provides the building blocks every other module works with:
//!
//! - `rank`: card ranks in grid order (A first) with their scoring values
//! - `combo`: the 169 starting-hand classes and the 13×13 grid layout
//! - `strength`: the heuristic single-hand preflop equity score

pub mod combo;
pub mod rank;
pub mod strength;

pub use combo::{Combo, ComboParseError, Shape, GRID_SIZE, NUM_COMBOS};
pub use rank::{Rank, RANKS, RANK_CHARS};
pub use strength::{round2, single_hand_equity};
