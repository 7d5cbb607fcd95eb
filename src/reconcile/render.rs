//! Text and JSON renderings of a reconciliation.

use serde::Serialize;

use super::Reconciliation;
use crate::model::CoverageEntry;

impl CoverageEntry {
    /// Tab-separated report row: `file  line  covered  True|False`.
    pub fn report_line(&self) -> String {
        format!(
            "{}\t{}\tcovered\t{}",
            self.file_name,
            self.line_number,
            if self.covered { "True" } else { "False" }
        )
    }
}

impl Reconciliation {
    /// Full report artifact: one newline-terminated row per entry.
    pub fn render_report(&self) -> String {
        let mut out = String::new();
        for entry in &self.entries {
            out.push_str(&entry.report_line());
            out.push('\n');
        }
        out
    }

    /// Counts and percentage for the summary line.
    pub fn summary(&self) -> Summary {
        let percentage = self.percentage() * 100.0;
        Summary {
            covered: self.covered_count,
            coverable: self.coverable_count,
            percentage: (!percentage.is_nan()).then_some(percentage),
        }
    }
}

/// Run summary.
///
/// `percentage` is scaled to 0..=100 and is `None` when no new line is
/// coverable; it serializes to JSON `null` in that case.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub covered: usize,
    pub coverable: usize,
    pub percentage: Option<f64>,
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Coverage summary: {} / {} = {}%",
            self.covered,
            self.coverable,
            self.percentage.unwrap_or(f64::NAN)
        )
    }
}
