//! Config struct definition and default implementation.

use serde::Deserialize;

// Default value functions for serde
pub(crate) fn default_source_extension() -> String {
    "cs".to_string()
}
pub(crate) fn default_true() -> bool {
    true
}

/// Configuration for a diffcov run.
///
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Extension of the source files whose new lines are measured, without
    /// a leading dot (default: "cs").
    #[serde(default = "default_source_extension")]
    pub source_extension: String,

    /// Whether report rows are also printed to stdout as they are rendered.
    #[serde(default = "default_true")]
    pub echo_report: bool,

    /// Minimum diff coverage percentage (0-100). When set, a run below it fails.
    #[serde(default)]
    pub fail_under: Option<f64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_extension: default_source_extension(),
            echo_report: true,
            fail_under: None,
        }
    }
}
