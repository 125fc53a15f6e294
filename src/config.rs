//! Calculator configuration.
//!
//! Settings can be built in code or loaded from a JSON file. Every field has
//! a default, so a config file only needs the values it changes:
//!
//! ```json
//! {
//!   "spot": { "opponent_bounty": 100, "pot_bb": 4.5, "call_bb": 3 },
//!   "advisory": { "preset": "loose" }
//! }
//! ```

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::advisory::{clamp_threshold, AdvisorySession};
use crate::bounty::{BountyError, BountyInputs};
use crate::range::Preset;

/// Tournament structure.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TournamentConfig {
    /// Starting stack in chips.
    pub starting_stack: f64,
    /// Starting bounty in currency.
    pub starting_bounty: f64,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self {
            starting_stack: 10_000.0,
            starting_bounty: 25.0,
        }
    }
}

/// The current hand.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpotConfig {
    /// Current big blind in chips.
    pub current_bb: f64,
    /// Opponent's bounty in currency.
    pub opponent_bounty: f64,
    /// Pot before the call, in big blinds.
    pub pot_bb: f64,
    /// Amount to call, in big blinds.
    pub call_bb: f64,
}

impl Default for SpotConfig {
    fn default() -> Self {
        Self {
            current_bb: 100.0,
            opponent_bounty: 50.0,
            pot_bb: 10.0,
            call_bb: 5.0,
        }
    }
}

/// Range advisory settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvisoryConfig {
    /// Opponent preset.
    pub preset: Preset,
    /// Custom opponent range notation. Overrides `preset` when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_range: Option<String>,
    /// Target equity in percent, clamped to [0, 100] on load. When unset,
    /// the required equity from the bounty calculation is used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold: Option<f64>,
}

/// Complete calculator configuration.
///
/// # Example
/// ```
/// use pko_advisor::config::CalculatorConfig;
/// use pko_advisor::range::Preset;
///
/// let config = CalculatorConfig::default().with_preset(Preset::Tight);
/// let result = config.bounty_inputs().calculate().unwrap();
/// assert_eq!(result.bounty_value_bb, 50.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Tournament structure.
    pub tournament: TournamentConfig,
    /// Current hand.
    pub spot: SpotConfig,
    /// Range advisory.
    pub advisory: AdvisoryConfig,
}

/// Errors loading or validating a configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Could not read the file.
    #[error("failed to read config: {0}")]
    Io(#[from] io::Error),
    /// File is not valid JSON for this schema.
    #[error("failed to parse config: {0}")]
    Json(#[from] serde_json::Error),
    /// A calculator input is out of range.
    #[error("invalid config: {0}")]
    Invalid(#[from] BountyError),
}

impl CalculatorConfig {
    /// Create a configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from a JSON file and validate.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path.as_ref())?;
        let config = Self::from_json_str(&text)?;
        log::debug!("loaded config from {}", path.as_ref().display());
        Ok(config)
    }

    /// Parse from a JSON string and validate. The threshold is clamped.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let mut config: Self = serde_json::from_str(json)?;
        config.advisory.threshold = config.advisory.threshold.map(clamp_threshold);
        config.validate()?;
        Ok(config)
    }

    /// Serialize as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Builder method: set the opponent preset and clear any custom range.
    pub fn with_preset(mut self, preset: Preset) -> Self {
        self.advisory.preset = preset;
        self.advisory.custom_range = None;
        self
    }

    /// Builder method: set a custom opponent range.
    pub fn with_custom_range(mut self, notation: impl Into<String>) -> Self {
        self.advisory.custom_range = Some(notation.into());
        self
    }

    /// Builder method: set a fixed target equity, clamped to [0, 100].
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.advisory.threshold = Some(clamp_threshold(threshold));
        self
    }

    /// Validate the bounty inputs.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.bounty_inputs().validate()?;
        Ok(())
    }

    /// Bounty calculator inputs.
    pub fn bounty_inputs(&self) -> BountyInputs {
        BountyInputs {
            starting_stack: self.tournament.starting_stack,
            starting_bounty: self.tournament.starting_bounty,
            current_bb: self.spot.current_bb,
            opponent_bounty: self.spot.opponent_bounty,
            pot_bb: self.spot.pot_bb,
            call_bb: self.spot.call_bb,
        }
    }

    /// Advisory session with the configured opponent range applied.
    pub fn session(&self) -> AdvisorySession {
        let mut session = AdvisorySession::with_preset(self.advisory.preset);
        if let Some(notation) = &self.advisory.custom_range {
            session.apply_range(notation);
        }
        session
    }
}
