//! PKO bounty conversion.
//!
//! Converts an opponent's bounty into big blinds and derives the equity
//! needed to call once that bounty is counted as part of the pot.
//!
//! The conversion uses the rule of thumb that one starting bounty is worth
//! about a quarter of the starting stack:
//!
//! ```text
//! bounty_bb = (opponent_bounty / starting_bounty) * (starting_stack * 0.25 / current_bb)
//! required  = call / (pot + bounty_bb + call)
//! ```

use serde::{Deserialize, Serialize};

use crate::hands::round2;

/// Share of the starting stack that one starting bounty is worth.
pub const BOUNTY_STACK_SHARE: f64 = 0.25;

/// Inputs to the bounty calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BountyInputs {
    /// Starting stack in chips.
    pub starting_stack: f64,
    /// Starting bounty in currency.
    pub starting_bounty: f64,
    /// Current big blind in chips.
    pub current_bb: f64,
    /// Opponent's current bounty in currency. May be zero.
    pub opponent_bounty: f64,
    /// Pot before the call, in big blinds.
    pub pot_bb: f64,
    /// Amount to call, in big blinds.
    pub call_bb: f64,
}

/// Result of the bounty calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BountyResult {
    /// Opponent bounty as a multiple of the starting bounty.
    pub bounty_multiplier: f64,
    /// Value of one starting bounty in big blinds.
    pub one_bounty_bb: f64,
    /// Value of the opponent's bounty in big blinds.
    pub bounty_value_bb: f64,
    /// Equity needed to call, in [0, 1].
    pub required_equity: f64,
}

/// Invalid calculator input.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BountyError {
    /// Input is NaN or infinite.
    #[error("{0} must be a valid number")]
    NotANumber(&'static str),
    /// Input is below zero.
    #[error("{0} cannot be negative (got {1})")]
    Negative(&'static str, f64),
    /// Input is zero where a positive value is needed.
    #[error("{0} must be greater than 0")]
    Zero(&'static str),
}

impl Default for BountyInputs {
    fn default() -> Self {
        Self {
            starting_stack: 10_000.0,
            starting_bounty: 25.0,
            current_bb: 100.0,
            opponent_bounty: 50.0,
            pot_bb: 10.0,
            call_bb: 5.0,
        }
    }
}

impl BountyInputs {
    /// Check every field. Only the opponent bounty may be zero.
    pub fn validate(&self) -> Result<(), BountyError> {
        let fields = [
            ("starting stack", self.starting_stack, false),
            ("starting bounty", self.starting_bounty, false),
            ("current big blind", self.current_bb, false),
            ("opponent bounty", self.opponent_bounty, true),
            ("pot size", self.pot_bb, false),
            ("call size", self.call_bb, false),
        ];

        for (name, value, zero_ok) in fields {
            if !value.is_finite() {
                return Err(BountyError::NotANumber(name));
            }
            if value < 0.0 {
                return Err(BountyError::Negative(name, value));
            }
            if value == 0.0 && !zero_ok {
                return Err(BountyError::Zero(name));
            }
        }
        Ok(())
    }

    /// Validate and compute.
    pub fn calculate(&self) -> Result<BountyResult, BountyError> {
        self.validate()?;

        let bounty_multiplier = self.opponent_bounty / self.starting_bounty;
        let one_bounty_bb = self.starting_stack * BOUNTY_STACK_SHARE / self.current_bb;
        let bounty_value_bb = bounty_multiplier * one_bounty_bb;

        let denominator = self.pot_bb + bounty_value_bb + self.call_bb;
        let required_equity = if denominator > 0.0 {
            self.call_bb / denominator
        } else {
            0.0
        };

        Ok(BountyResult {
            bounty_multiplier,
            one_bounty_bb,
            bounty_value_bb,
            required_equity,
        })
    }

    /// Bounty formula with the inputs substituted.
    pub fn bounty_formula(&self, result: &BountyResult) -> String {
        format!(
            "({} ÷ {}) × (({} × {}) ÷ {}) = {:.2} BB",
            self.opponent_bounty,
            self.starting_bounty,
            self.starting_stack,
            BOUNTY_STACK_SHARE,
            self.current_bb,
            result.bounty_value_bb
        )
    }

    /// Equity formula with the inputs substituted.
    pub fn equity_formula(&self, result: &BountyResult) -> String {
        format!(
            "{} ÷ ({} + {:.2} + {}) = {}",
            self.call_bb,
            self.pot_bb,
            result.bounty_value_bb,
            self.call_bb,
            result.required_equity_text()
        )
    }
}

impl BountyResult {
    /// Required equity as a percentage rounded to two decimals. This is the
    /// value fed to the range advisory as its target.
    pub fn required_equity_percent(&self) -> f64 {
        round2(self.required_equity * 100.0)
    }

    /// Required equity formatted like "28.57%".
    pub fn required_equity_text(&self) -> String {
        format!("{:.2}%", self.required_equity * 100.0)
    }
}
