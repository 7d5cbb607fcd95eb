//! Reconciliation of new lines against line coverage.
//!
//! A new line counts toward diff coverage only if the coverage report knows
//! about it: lines the coverage tool never instrumented (blank lines,
//! comments, declarations) leave both the numerator and the denominator.

mod render;


use crate::model::{CoverageEntry, CoverageMap, NewLineSet};

pub use render::Summary;

/// Outcome of reconciling a diff with a coverage report.
#[derive(Debug, Clone, PartialEq)]
pub struct Reconciliation {
    /// One row per coverable new line, in diff order.
    pub entries: Vec<CoverageEntry>,
    /// Coverable new lines that were executed.
    pub covered_count: usize,
    /// New lines the coverage report instruments.
    pub coverable_count: usize,
}

impl Reconciliation {
    /// Fraction of coverable new lines that are covered.
    ///
    /// NaN when no new line is coverable.
    pub fn percentage(&self) -> f64 {
        self.covered_count as f64 / self.coverable_count as f64
    }
}

/// Intersect the new lines with the coverage report and tally the result.
pub fn reconcile(new_lines: &NewLineSet, coverage: &CoverageMap) -> Reconciliation {
    let entries: Vec<CoverageEntry> = new_lines
        .iter()
        .filter(|key| coverage.contains_key(*key))
        .map(|key| CoverageEntry {
            file_name: key.file_name.clone(),
            line_number: key.line_number,
            covered: coverage.get(key).copied().unwrap_or(false),
        })
        .collect();

    let covered_count = entries.iter().filter(|entry| entry.covered).count();
    let coverable_count = entries.len();

    tracing::debug!(
        new = new_lines.len(),
        coverable = coverable_count,
        covered = covered_count,
        "reconciled new lines with coverage"
    );

    Reconciliation {
        entries,
        covered_count,
        coverable_count,
    }
}
