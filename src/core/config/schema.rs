//! core::config::schema
//!
//! Configuration file schema.
//!
//! # Repo Config
//!
//! Located at `.verstamp.toml` in the repository root, or at
//! `$VERSTAMP_CONFIG` when that variable names an existing file.
//!
//! # Validation
//!
//! Values are validated after parsing: empty strings are rejected so a
//! typo never silently produces `package ` or an unnamed output file.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::ConfigError;
use crate::render::OutputFormat;

/// Repository configuration.
///
/// # Example
///
/// ```toml
/// output = "internal/version/version.go"
/// package = "version"
/// format = "go"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct RepoConfig {
    /// Output file, relative to the config file's directory.
    pub output: Option<PathBuf>,

    /// Package clause for Go output.
    pub package: Option<String>,

    /// Output format.
    pub format: Option<OutputFormat>,
}

impl RepoConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(output) = &self.output {
            if output.as_os_str().is_empty() {
                return Err(ConfigError::InvalidValue(
                    "output cannot be empty".to_string(),
                ));
            }
        }

        if let Some(package) = &self.package {
            if package.is_empty() {
                return Err(ConfigError::InvalidValue(
                    "package cannot be empty".to_string(),
                ));
            }
        }

        Ok(())
    }
}
