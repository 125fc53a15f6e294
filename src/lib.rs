//! # PKO Advisor
//!
//! Bounty conversion and a heuristic preflop range advisor for progressive
//! knockout (PKO) tournaments.
//!
//! ## Features
//!
//! - **Bounty value**: converts an opponent's bounty into big blinds and the
//!   equity needed to call
//! - **Range notation**: parses "66+, ATs+, KJs, AQo+" into hand classes and
//!   compresses hand lists back into notation
//! - **Equity estimate**: combo-weighted heuristic equity of a hand against
//!   an opponent range
//! - **Range advisory**: every hand that reaches a target equity, as a 13×13
//!   grid and as range text
//!
//! ## Quick Start
//!
//! ```
//! use pko_advisor::advisory::AdvisorySession;
//! use pko_advisor::bounty::BountyInputs;
//! use pko_advisor::range::Preset;
//!
//! // 1. Work out the equity needed to call
//! let result = BountyInputs::default().calculate().unwrap();
//!
//! // 2. Pick an opponent range
//! let session = AdvisorySession::with_preset(Preset::Tight);
//!
//! // 3. Find the hands that meet the target
//! let report = session.render(result.required_equity_percent());
//! println!("{}", report.text);
//! ```
//!
//! ## Modules
//!
//! - [`hands`]: ranks, the 169 hand classes and the strength heuristic
//! - [`range`]: range notation parsing, grouping and presets
//! - [`equity`]: hand vs range equity estimate
//! - [`advisory`]: opponent range state and grid/text rendering
//! - [`bounty`]: bounty conversion
//! - [`config`]: JSON-loadable settings
//!
//! ## Architecture
//!
//! ```text
//!   ┌──────────┐    ┌────────────────┐
//!   │  config  │───▶│     bounty     │── required equity ──┐
//!   └──────────┘    └────────────────┘                     │
//!        │                                                 ▼
//!        │          ┌────────────────────────────────────────────┐
//!        └─────────▶│ advisory: AdvisorySession → AdvisoryReport │
//!                   └────────────────────────────────────────────┘
//!                          │                      │
//!                          ▼                      ▼
//!                   ┌────────────┐         ┌─────────────┐
//!                   │   equity   │         │    range    │
//!                   └────────────┘         │ parse/group │
//!                          │               └─────────────┘
//!                          ▼                      │
//!                   ┌─────────────────────────────┘
//!                   ▼
//!              ┌──────────┐
//!              │  hands   │
//!              └──────────┘
//! ```

#![warn(missing_docs)]

pub mod advisory;
pub mod bounty;
pub mod config;
pub mod equity;
pub mod hands;
pub mod range;

// Re-export commonly used types at crate root for convenience
pub use advisory::{AdvisoryReport, AdvisorySession, RangeMatrix};
pub use bounty::{BountyError, BountyInputs, BountyResult};
pub use config::{CalculatorConfig, ConfigError};
pub use equity::{head_to_head_approx, weighted_equity_vs_range};
pub use hands::{single_hand_equity, Combo, Rank};
pub use range::{group_combos, Preset, Range};
