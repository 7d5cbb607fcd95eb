//! Diffcov: diff coverage for a change.
//!
//! Given a unified diff and a line coverage report, diffcov works out which
//! of the lines the change introduces are instrumented, which of those were
//! executed by the tests, and writes a per-line report.
//!
//! The pipeline is three pure stages plus the I/O around them:
//! - [`diff::extract_new_lines`] reads new-side line numbers from hunk headers
//! - [`coverage::extract_coverage`] reads the covered flag of every instrumented line
//! - [`reconcile::reconcile`] intersects the two and tallies the result
//!
//! [`run::execute`] reads the inputs, drives the stages and writes the report.

pub mod cli;
pub mod config;
pub mod coverage;
pub mod diff;
pub mod error;
pub mod exit_codes;
pub mod fs;
pub mod model;
pub mod paths;
pub mod reconcile;
pub mod run;

#[cfg(test)]
mod test_support;
