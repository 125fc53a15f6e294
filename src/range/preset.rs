//! Built-in opponent ranges.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::Range;

/// A named opponent range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// A typical opening range.
    #[default]
    Standard,
    /// Premium hands only.
    Tight,
    /// A wide opening range.
    Loose,
    /// A 15bb push range.
    Push15,
    /// No range: equities fall back to single-hand strength.
    Random,
}

impl Preset {
    /// All presets in menu order.
    pub fn all() -> &'static [Preset] {
        &[
            Preset::Standard,
            Preset::Tight,
            Preset::Loose,
            Preset::Push15,
            Preset::Random,
        ]
    }

    /// Key used in configs and on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Preset::Standard => "standard",
            Preset::Tight => "tight",
            Preset::Loose => "loose",
            Preset::Push15 => "push15",
            Preset::Random => "random",
        }
    }

    /// Range notation for this preset.
    pub fn notation(&self) -> &'static str {
        match self {
            Preset::Standard => "66+, ATs+, KJs+, QJs, AJo+, KQo",
            Preset::Tight => "77+, AJs+, KQs, AQo+",
            Preset::Loose => "55+, A9s+, KTs+, QTs+, JTs, ATo+, KJo+, QJo",
            Preset::Push15 => "22+, A2s+, K9s+, Q9s+, J9s+, T9s, A2o+, KTo+, QTo+, JTo",
            Preset::Random => "",
        }
    }

    /// Parsed range for this preset.
    pub fn range(&self) -> Range {
        Range::parse(self.notation())
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Error for a preset name that is not one of the built-in keys.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown preset {0:?} (expected standard, tight, loose, push15 or random)")]
pub struct UnknownPreset(pub String);

impl FromStr for Preset {
    type Err = UnknownPreset;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        Preset::all()
            .iter()
            .copied()
            .find(|p| p.name() == key)
            .ok_or_else(|| UnknownPreset(s.to_string()))
    }
}
