//! A complete diffcov run: read inputs, measure, write the report.
//!
//! All I/O for a run happens here. The parsers and the reconciler only
//! ever see in-memory text.

use crate::cli::Cli;
use crate::config::Config;
use crate::coverage::extract_coverage;
use crate::diff::extract_new_lines;
use crate::error::{DiffCovError, Result};
use crate::fs::atomic_write;
use crate::paths::collapse_dot_segments;
use crate::reconcile::{Reconciliation, Summary, reconcile};
use std::io::Write;
use std::path::Path;

/// Raw inputs of a run, fully read into memory.
#[derive(Debug)]
pub struct Inputs {
    pub diff_text: String,
    pub coverage_document: String,
    /// Absolute path of the coverage document with `..` resolved, used to
    /// relativize the paths it records.
    pub coverage_path: String,
}

impl Inputs {
    /// Read both inputs. Either one missing or unreadable is an invalid
    /// invocation, reported before any parsing starts.
    pub fn read(diff: &Path, coverage: &Path) -> Result<Self> {
        let diff_text = read_input(diff, "diff")?;
        let coverage_document = read_input(coverage, "coverage report")?;

        let coverage_path = std::path::absolute(coverage).map_err(|e| {
            DiffCovError::InvalidInvocation(format!(
                "cannot resolve coverage report path '{}': {}",
                coverage.display(),
                e
            ))
        })?;

        Ok(Self {
            diff_text,
            coverage_document,
            coverage_path: collapse_dot_segments(&coverage_path)
                .to_string_lossy()
                .into_owned(),
        })
    }
}

fn read_input(path: &Path, what: &str) -> Result<String> {
    if !path.is_file() {
        return Err(DiffCovError::InvalidInvocation(format!(
            "{} '{}' does not exist or is not a file",
            what,
            path.display()
        )));
    }

    std::fs::read_to_string(path).map_err(|e| {
        DiffCovError::InvalidInvocation(format!(
            "failed to read {} '{}': {}",
            what,
            path.display(),
            e
        ))
    })
}

/// Parse both inputs and reconcile them.
pub fn measure(inputs: &Inputs, config: &Config) -> Result<Reconciliation> {
    let new_lines = extract_new_lines(&inputs.diff_text, &config.source_extension)?;
    let coverage = extract_coverage(&inputs.coverage_document, &inputs.coverage_path)?;

    tracing::info!(
        new_lines = new_lines.len(),
        instrumented_lines = coverage.len(),
        "parsed inputs"
    );

    Ok(reconcile(&new_lines, &coverage))
}

/// Run diffcov for the parsed command line, printing to `out`.
///
/// Report rows (unless disabled) and the summary go to `out`; the report
/// artifact is written only after both inputs parsed cleanly. A threshold
/// failure is returned after the report and summary have been emitted.
pub fn execute<W: Write>(cli: &Cli, config: &Config, out: &mut W) -> Result<Summary> {
    let inputs = Inputs::read(&cli.diff, &cli.coverage)?;
    let reconciliation = measure(&inputs, config)?;

    let report = reconciliation.render_report();
    if config.echo_report {
        out.write_all(report.as_bytes()).map_err(stdout_error)?;
    }

    atomic_write(&cli.report, &report)?;
    tracing::info!(
        path = %cli.report.display(),
        rows = reconciliation.entries.len(),
        "wrote coverage report"
    );

    let summary = reconciliation.summary();
    if cli.json {
        let json = serde_json::to_string(&summary).map_err(|e| {
            DiffCovError::ReportWrite(format!("failed to serialize summary: {}", e))
        })?;
        writeln!(out, "{}", json).map_err(stdout_error)?;
    } else {
        writeln!(out, "{}", summary).map_err(stdout_error)?;
    }

    check_threshold(&summary, config.fail_under)?;
    Ok(summary)
}

/// Fail when coverage is below `fail_under`. A run with no coverable new
/// lines has nothing to fall short on and always passes.
pub fn check_threshold(summary: &Summary, fail_under: Option<f64>) -> Result<()> {
    match (summary.percentage, fail_under) {
        (Some(actual), Some(required)) if actual < required => {
            Err(DiffCovError::ThresholdNotMet { actual, required })
        }
        _ => Ok(()),
    }
}

fn stdout_error(e: std::io::Error) -> DiffCovError {
    DiffCovError::ReportWrite(format!("failed to write to output: {}", e))
}
