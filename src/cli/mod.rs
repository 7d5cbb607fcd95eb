//! CLI argument parsing for diffcov.
//!
//! Uses clap derive macros for declarative argument definitions. The run
//! itself lives in the `run` module.

use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Diffcov: measure how much of a change's new lines are covered by tests.
///
/// Reads a unified diff (e.g. `git diff -U0 main`) and a line coverage
/// report, writes a tab-separated per-line report for every new line the
/// coverage tool instruments, and prints a summary.
#[derive(Parser, Debug)]
#[command(name = "diffcov")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Unified diff to measure.
    pub diff: PathBuf,

    /// Line coverage report (XML, one element per file with per-line children).
    pub coverage: PathBuf,

    /// Where to write the per-line report. Overwritten if it exists.
    pub report: PathBuf,

    /// Source file extension to measure (e.g. "cs", "rs"). Overrides the config file.
    #[arg(short, long)]
    pub extension: Option<String>,

    /// YAML config file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Fail with exit code 2 when diff coverage is below this percentage.
    #[arg(long, value_name = "PERCENT")]
    pub fail_under: Option<f64>,

    /// Print the summary as JSON.
    #[arg(long)]
    pub json: bool,

    /// Do not echo report rows to stdout.
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// Default log filter for the requested verbosity.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_debug_assert() {
        // Verifies the CLI arguments configuration is valid
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_positional_inputs() {
        let cli =
            Cli::try_parse_from(["diffcov", "change.diff", "coverage.xml", "out.txt"]).unwrap();

        assert_eq!(cli.diff, PathBuf::from("change.diff"));
        assert_eq!(cli.coverage, PathBuf::from("coverage.xml"));
        assert_eq!(cli.report, PathBuf::from("out.txt"));
        assert_eq!(cli.extension, None);
        assert_eq!(cli.config, None);
        assert_eq!(cli.fail_under, None);
        assert!(!cli.json);
        assert!(!cli.quiet);
        assert_eq!(cli.log_level(), "warn");
    }

    #[test]
    fn missing_inputs_are_rejected() {
        assert!(Cli::try_parse_from(["diffcov"]).is_err());
        assert!(Cli::try_parse_from(["diffcov", "change.diff"]).is_err());
        assert!(Cli::try_parse_from(["diffcov", "change.diff", "coverage.xml"]).is_err());
    }

    #[test]
    fn parse_all_options() {
        let cli = Cli::try_parse_from([
            "diffcov",
            "change.diff",
            "coverage.xml",
            "out.txt",
            "--extension",
            "rs",
            "--config",
            "diffcov.yaml",
            "--fail-under",
            "75.5",
            "--json",
            "-q",
            "-vv",
        ])
        .unwrap();

        assert_eq!(cli.extension.as_deref(), Some("rs"));
        assert_eq!(cli.config, Some(PathBuf::from("diffcov.yaml")));
        assert_eq!(cli.fail_under, Some(75.5));
        assert!(cli.json);
        assert!(cli.quiet);
        assert_eq!(cli.log_level(), "debug");
    }

    #[test]
    fn fail_under_must_be_numeric() {
        assert!(
            Cli::try_parse_from(["diffcov", "a", "b", "c", "--fail-under", "most"]).is_err()
        );
    }
}
