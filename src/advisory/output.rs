//! Output formatting for advisory results.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::hands::{Combo, GRID_SIZE, RANK_CHARS};

/// One cell of the 13×13 grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatrixCell {
    /// Hand at this cell.
    pub hand: Combo,
    /// Weighted equity against the opponent range.
    pub equity: f64,
    /// Whether the equity meets the threshold.
    pub selected: bool,
}

/// Selection grid. Row and column follow rank order (A first); pairs sit on
/// the diagonal, suited hands above it and offsuit hands below it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeMatrix {
    /// Rows of cells, `grid[row][col]`.
    pub grid: Vec<Vec<MatrixCell>>,
}

impl RangeMatrix {
    /// Lay out per-hand equities on the grid and mark cells at or above
    /// `threshold`.
    pub fn from_equities(equities: &[(Combo, f64)], threshold: f64) -> Self {
        let cells: Vec<MatrixCell> = Combo::all()
            .map(|hand| MatrixCell {
                hand,
                equity: 0.0,
                selected: false,
            })
            .collect();
        let mut grid: Vec<Vec<MatrixCell>> =
            cells.chunks(GRID_SIZE).map(|row| row.to_vec()).collect();

        for &(hand, equity) in equities {
            let (row, col) = hand.grid_position();
            grid[row][col] = MatrixCell {
                hand,
                equity,
                selected: equity >= threshold,
            };
        }

        Self { grid }
    }

    /// Cell at `(row, col)`.
    pub fn cell(&self, row: usize, col: usize) -> &MatrixCell {
        &self.grid[row][col]
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &MatrixCell> + '_ {
        self.grid.iter().flatten()
    }

    /// Number of selected cells.
    pub fn selected_count(&self) -> usize {
        self.cells().filter(|c| c.selected).count()
    }

    /// Share of all two-card combinations that are selected, in [0, 1].
    pub fn selected_combo_fraction(&self) -> f64 {
        let selected: u32 = self
            .cells()
            .filter(|c| c.selected)
            .map(|c| c.hand.weight())
            .sum();
        selected as f64 / 1326.0
    }

    /// Print as a text grid. Selected hands are highlighted.
    pub fn print_grid(&self) {
        print!("{}", self.render_grid(true));
    }

    /// Text grid with one hand label per cell. Unselected cells show "-".
    /// With `color`, selected cells get an ANSI green background.
    pub fn render_grid(&self, color: bool) -> String {
        let mut out = String::from("    ");
        for c in RANK_CHARS {
            out.push_str(&format!("{:>5}", c));
        }
        out.push('\n');

        for (row, cells) in self.grid.iter().enumerate() {
            out.push_str(&format!("{:>2}  ", RANK_CHARS[row]));
            for cell in cells {
                if !cell.selected {
                    out.push_str(&format!("{:>4} ", "-"));
                } else if color {
                    out.push_str(&format!("\x1b[42m{:>4}\x1b[0m ", cell.hand.to_string()));
                } else {
                    out.push_str(&format!("{:>4} ", cell.hand.to_string()));
                }
            }
            out.push('\n');
        }
        out
    }
}

/// Complete advisory result for one threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvisoryReport {
    /// Opponent range notation the report was computed against.
    pub opponent_range: String,
    /// Target equity after clamping.
    pub threshold: f64,
    /// Selected hands, strongest first.
    pub selected: Vec<Combo>,
    /// Selected hands in compact notation.
    pub text: String,
    /// Selection grid.
    pub matrix: RangeMatrix,
}

/// Errors writing a report to disk.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// Could not create or write the file.
    #[error("failed to write report: {0}")]
    Io(#[from] io::Error),
    /// Could not serialize the report.
    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

impl AdvisoryReport {
    /// Save as pretty-printed JSON.
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<(), ReportError> {
        let json = serde_json::to_string_pretty(self)?;
        let mut file = File::create(path.as_ref())?;
        file.write_all(json.as_bytes())?;
        log::info!("saved advisory report to {}", path.as_ref().display());
        Ok(())
    }

    /// Print a summary followed by the grid.
    pub fn print_summary(&self) {
        println!("\n========================================");
        let opponent = if self.opponent_range.is_empty() {
            "(any hand)"
        } else {
            self.opponent_range.as_str()
        };
        println!("  Opponent range: {}", opponent);
        println!(
            "  Target equity: {:.2}% | Hands: {}/169 | Combos: {:.1}%",
            self.threshold,
            self.selected.len(),
            self.matrix.selected_combo_fraction() * 100.0
        );
        println!("========================================\n");
        self.matrix.print_grid();
        let text = if self.text.is_empty() { "-" } else { self.text.as_str() };
        println!("\nRange: {}", text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisory::AdvisorySession;
    use crate::range::Preset;

    #[test]
    fn test_matrix_layout() {
        let session = AdvisorySession::with_preset(Preset::Random);
        let matrix = session.render_matrix(60.0);

        assert_eq!(matrix.grid.len(), 13);
        assert!(matrix.grid.iter().all(|row| row.len() == 13));
        assert_eq!(matrix.cell(0, 0).hand.to_string(), "AA");
        assert_eq!(matrix.cell(0, 1).hand.to_string(), "AKs");
        assert_eq!(matrix.cell(1, 0).hand.to_string(), "AKo");
        assert!(matrix.cell(0, 0).selected);
        assert!(!matrix.cell(12, 11).selected);
    }

    #[test]
    fn test_combo_fraction_bounds() {
        let session = AdvisorySession::new();
        assert_eq!(session.render_matrix(0.0).selected_combo_fraction(), 1.0);
        assert_eq!(session.render_matrix(100.0).selected_combo_fraction(), 0.0);
    }

    #[test]
    fn test_render_grid_plain() {
        let session = AdvisorySession::with_preset(Preset::Random);
        let text = session.render_matrix(85.0).render_grid(false);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 14);
        assert!(lines[1].contains("AA"));
        assert!(!lines[2].contains("KK"));
    }

    #[test]
    fn test_report_json_roundtrip() {
        let session = AdvisorySession::new();
        let report = session.render(55.0);

        let path = std::env::temp_dir().join(format!("pko_report_{}.json", std::process::id()));
        report.save_json(&path).unwrap();
        let json = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).ok();

        let back: AdvisoryReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back.selected, report.selected);
        assert_eq!(back.text, report.text);
        assert_eq!(back.opponent_range, report.opponent_range);
        assert_eq!(back.matrix.selected_count(), report.matrix.selected_count());
        assert!(json.contains("\"AA\""));
    }
}
