//! Configuration model for diffcov.
//!
//! This module defines the Config struct that represents an optional YAML
//! config file (passed with `--config`). It supports forward-compatible YAML
//! parsing (unknown fields are ignored), sensible defaults for optional
//! fields, and validation of config values. Command-line flags override
//! whatever the file sets.

mod model;
mod operations;


// Re-export public API
pub use model::Config;
