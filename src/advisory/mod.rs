//! Range advisory.
//!
//! An [`AdvisorySession`] holds the current opponent range and answers the
//! question "which hands reach a target equity against it?". Results come
//! back as an [`AdvisoryReport`]: a 13×13 selection grid plus compact range
//! text.
//!
//! The opponent range follows the lifecycle of the calculator form it was
//! designed for: loading a preset replaces the notation and drops the parsed
//! range, which is rebuilt on the next query; applying a range parses it
//! immediately.

mod output;

pub use output::{AdvisoryReport, MatrixCell, RangeMatrix, ReportError};

use std::borrow::Cow;

use crate::equity::weighted_equity_vs_range;
use crate::hands::Combo;
use crate::range::{group_combos, Preset, Range};

/// Clamp a target equity to [0, 100]. NaN becomes 0.
pub fn clamp_threshold(threshold: f64) -> f64 {
    if threshold.is_nan() {
        0.0
    } else {
        threshold.clamp(0.0, 100.0)
    }
}

/// Parse user-entered target equity. Non-numeric input becomes 0, which
/// selects every hand.
pub fn parse_threshold(input: &str) -> f64 {
    clamp_threshold(input.trim().trim_end_matches('%').trim().parse().unwrap_or(0.0))
}

/// Opponent range state plus the queries that read it.
#[derive(Debug, Clone)]
pub struct AdvisorySession {
    /// Current range notation, as entered or loaded from a preset.
    notation: String,
    /// Parsed range; `None` until the notation is applied.
    applied: Option<Range>,
}

impl AdvisorySession {
    /// Create a session with the standard preset applied.
    pub fn new() -> Self {
        Self::with_preset(Preset::Standard)
    }

    /// Create a session with `preset` applied.
    pub fn with_preset(preset: Preset) -> Self {
        let mut session = Self {
            notation: String::new(),
            applied: None,
        };
        session.load_preset(preset);
        session.apply();
        session
    }

    /// Replace the notation with a preset's. The parsed range is dropped and
    /// rebuilt lazily.
    pub fn load_preset(&mut self, preset: Preset) {
        log::debug!("loading opponent preset {}", preset);
        self.notation = preset.notation().to_string();
        self.applied = None;
    }

    /// Load a preset by name, falling back to the standard preset for
    /// unknown names.
    pub fn load_preset_named(&mut self, name: &str) -> Preset {
        let preset = name.parse::<Preset>().unwrap_or_else(|e| {
            log::warn!("{}; using standard", e);
            Preset::Standard
        });
        self.load_preset(preset);
        preset
    }

    /// Set and parse a custom opponent range.
    pub fn apply_range(&mut self, notation: &str) -> &Range {
        self.notation = notation.to_string();
        self.apply()
    }

    /// Parse the current notation and keep the result.
    pub fn apply(&mut self) -> &Range {
        let range = Range::parse(&self.notation);
        log::debug!(
            "applied opponent range {:?}: {} classes, {} combos",
            self.notation,
            range.len(),
            range.num_combos()
        );
        self.applied.insert(range)
    }

    /// Current range notation.
    pub fn notation(&self) -> &str {
        &self.notation
    }

    /// The opponent range used by queries. Parses the notation on the fly if
    /// it has not been applied since the last preset load.
    pub fn opponent_range(&self) -> Cow<'_, Range> {
        match &self.applied {
            Some(range) => Cow::Borrowed(range),
            None => Cow::Owned(Range::parse(&self.notation)),
        }
    }

    /// Weighted equity of `hero` against the current opponent range.
    pub fn equity_vs_selected(&self, hero: Combo) -> f64 {
        weighted_equity_vs_range(hero, &self.opponent_range())
    }

    /// Equity of every hand on the grid against the current range.
    pub fn equities(&self) -> Vec<(Combo, f64)> {
        let range = self.opponent_range();
        Combo::all()
            .map(|combo| (combo, weighted_equity_vs_range(combo, &range)))
            .collect()
    }

    /// Build the selection grid for a target equity.
    pub fn render_matrix(&self, threshold: f64) -> RangeMatrix {
        RangeMatrix::from_equities(&self.equities(), clamp_threshold(threshold))
    }

    /// Build the compact range text for a target equity.
    pub fn render_text(&self, threshold: f64) -> String {
        group_combos(&selected_by_equity(&self.equities(), clamp_threshold(threshold)))
    }

    /// Build both views for a target equity.
    pub fn render(&self, threshold: f64) -> AdvisoryReport {
        let threshold = clamp_threshold(threshold);
        let equities = self.equities();
        let selected = selected_by_equity(&equities, threshold);

        AdvisoryReport {
            opponent_range: self.notation.clone(),
            threshold,
            text: group_combos(&selected),
            selected,
            matrix: RangeMatrix::from_equities(&equities, threshold),
        }
    }
}

impl Default for AdvisorySession {
    fn default() -> Self {
        Self::new()
    }
}

/// Hands at or above `threshold`, strongest first. Ties keep grid order.
fn selected_by_equity(equities: &[(Combo, f64)], threshold: f64) -> Vec<Combo> {
    let mut selected: Vec<(Combo, f64)> = equities
        .iter()
        .copied()
        .filter(|(_, eq)| *eq >= threshold)
        .collect();
    selected.sort_by(|a, b| b.1.total_cmp(&a.1));
    selected.into_iter().map(|(combo, _)| combo).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hands::{single_hand_equity, NUM_COMBOS};

    fn combo(label: &str) -> Combo {
        label.parse().unwrap()
    }

    #[test]
    fn test_new_session_uses_standard() {
        let session = AdvisorySession::new();
        assert_eq!(session.notation(), Preset::Standard.notation());
        assert_eq!(session.opponent_range().len(), 20);
    }

    #[test]
    fn test_threshold_boundaries() {
        let session = AdvisorySession::new();
        assert_eq!(session.render(0.0).selected.len(), NUM_COMBOS);
        assert_eq!(session.render(100.0).selected.len(), 0);
        assert_eq!(session.render_matrix(0.0).selected_count(), NUM_COMBOS);
        assert_eq!(session.render_matrix(100.0).selected_count(), 0);
        assert_eq!(session.render_text(100.0), "");
    }

    #[test]
    fn test_threshold_clamping() {
        assert_eq!(clamp_threshold(-5.0), 0.0);
        assert_eq!(clamp_threshold(150.0), 100.0);
        assert_eq!(clamp_threshold(f64::NAN), 0.0);
        assert_eq!(parse_threshold("abc"), 0.0);
        assert_eq!(parse_threshold(""), 0.0);
        assert_eq!(parse_threshold(" 42.5 "), 42.5);
        assert_eq!(parse_threshold("33.33%"), 33.33);
        assert_eq!(parse_threshold("250"), 100.0);

        let session = AdvisorySession::new();
        assert_eq!(session.render(-10.0).threshold, 0.0);
        assert_eq!(session.render(-10.0).selected.len(), NUM_COMBOS);
    }

    #[test]
    fn test_random_preset_uses_single_hand_equity() {
        let session = AdvisorySession::with_preset(Preset::Random);
        assert!(session.opponent_range().is_empty());
        for combo in Combo::all() {
            assert_eq!(session.equity_vs_selected(combo), single_hand_equity(combo));
        }

        let report = session.render(50.0);
        assert_eq!(report.matrix.cells().count(), NUM_COMBOS);
    }

    #[test]
    fn test_preset_effect_on_equity() {
        let mut session = AdvisorySession::new();
        session.load_preset(Preset::Tight);
        session.apply();
        let vs_tight = session.equity_vs_selected(combo("AKo"));

        session.load_preset(Preset::Random);
        session.apply();
        let vs_random = session.equity_vs_selected(combo("AKo"));

        assert!(vs_tight <= vs_random);
    }

    #[test]
    fn test_loaded_preset_is_parsed_lazily() {
        let mut session = AdvisorySession::new();
        session.load_preset(Preset::Tight);
        assert!(session.applied.is_none());
        assert_eq!(session.opponent_range().len(), 14);
        assert!(matches!(session.opponent_range(), Cow::Owned(_)));

        session.apply();
        assert!(matches!(session.opponent_range(), Cow::Borrowed(_)));
    }

    #[test]
    fn test_unknown_preset_name_falls_back() {
        let mut session = AdvisorySession::with_preset(Preset::Tight);
        assert_eq!(session.load_preset_named("maniac"), Preset::Standard);
        assert_eq!(session.notation(), Preset::Standard.notation());
        assert_eq!(session.load_preset_named("LOOSE"), Preset::Loose);
    }

    #[test]
    fn test_apply_custom_range() {
        let mut session = AdvisorySession::new();
        let range = session.apply_range("AA, KK, junk");
        assert_eq!(range.len(), 2);
        assert_eq!(session.notation(), "AA, KK, junk");

        // Against only AA/KK, aces are the one hand above 50%.
        let report = session.render(50.0);
        assert_eq!(report.selected, vec![combo("AA")]);
        assert_eq!(report.text, "AA+");
    }

    #[test]
    fn test_text_and_matrix_agree() {
        let session = AdvisorySession::new();
        let report = session.render(45.0);

        let in_matrix: Vec<Combo> = report
            .matrix
            .cells()
            .filter(|cell| cell.selected)
            .map(|cell| cell.hand)
            .collect();
        assert_eq!(in_matrix.len(), report.selected.len());
        for combo in &report.selected {
            assert!(in_matrix.contains(combo));
        }
        assert_eq!(report.text, session.render_text(45.0));
    }

    #[test]
    fn test_selected_sorted_descending() {
        let session = AdvisorySession::new();
        let report = session.render(40.0);
        let equities: Vec<f64> = report
            .selected
            .iter()
            .map(|c| session.equity_vs_selected(*c))
            .collect();
        assert!(equities.windows(2).all(|w| w[0] >= w[1]));
        assert_eq!(report.selected.first(), Some(&combo("AA")));
    }
}
