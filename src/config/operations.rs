//! Config loading, validation, and CLI overrides.

use super::model::Config;
use crate::cli::Cli;
use crate::error::{DiffCovError, Result};
use std::path::Path;

impl Config {
    /// Load config from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(DiffCovError::InvalidInvocation)` - Read error, parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            DiffCovError::InvalidInvocation(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml).map_err(|e| {
            DiffCovError::InvalidInvocation(format!("failed to parse config YAML: {}", e))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Build the effective config for a run: the `--config` file (or the
    /// defaults) with command-line flags applied on top.
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let mut config = match &cli.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };

        if let Some(extension) = &cli.extension {
            config.source_extension = extension.trim_start_matches('.').to_string();
        }
        if cli.quiet {
            config.echo_report = false;
        }
        if cli.fail_under.is_some() {
            config.fail_under = cli.fail_under;
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `source_extension` must be non-empty and have no leading dot
    /// - `fail_under`, when set, must be within 0..=100
    pub fn validate(&self) -> Result<()> {
        if self.source_extension.is_empty() {
            return Err(DiffCovError::InvalidInvocation(
                "config validation failed: source_extension must be non-empty".to_string(),
            ));
        }
        if self.source_extension.starts_with('.') {
            return Err(DiffCovError::InvalidInvocation(format!(
                "config validation failed: source_extension must not have a leading dot (found '{}'). Use '{}' instead.",
                self.source_extension,
                self.source_extension.trim_start_matches('.')
            )));
        }

        if let Some(threshold) = self.fail_under
            && !(0.0..=100.0).contains(&threshold)
        {
            return Err(DiffCovError::InvalidInvocation(format!(
                "config validation failed: fail_under must be between 0 and 100 (found {})",
                threshold
            )));
        }

        Ok(())
    }
}
