//! core::config
//!
//! Configuration schema, loading, and resolution.
//!
//! # Precedence
//!
//! Settings are resolved in this order (later overrides earlier):
//! 1. Default values (`./version.go`, package `main`, Go output)
//! 2. Repo config file
//! 3. CLI flags
//!
//! When no format is set anywhere, it is inferred from the output file's
//! extension, falling back to Go.
//!
//! # Repo Config Locations
//!
//! Searched in order:
//! 1. `$VERSTAMP_CONFIG` if set and the file exists
//! 2. `<repo root>/.verstamp.toml`
//!
//! # Example
//!
//! ```no_run
//! use verstamp::core::config::{Config, Overrides};
//! use std::path::Path;
//!
//! let loaded = Config::load(Path::new("/path/to/repo")).unwrap();
//! let settings = loaded.config.resolve(&Overrides::default(), Path::new("."));
//! println!("writing {}", settings.output.display());
//! ```

pub mod schema;

pub use schema::RepoConfig;

use std::fs;
use std::path::{Component, Path, PathBuf};

use thiserror::Error;

use crate::render::OutputFormat;

/// Repo config file name.
pub const CONFIG_FILE_NAME: &str = ".verstamp.toml";

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "VERSTAMP_CONFIG";

/// Default output path.
pub const DEFAULT_OUTPUT: &str = "./version.go";

/// Default Go package.
pub const DEFAULT_PACKAGE: &str = "main";

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// Result of loading configuration.
#[derive(Debug)]
pub struct ConfigLoadResult {
    /// The loaded configuration.
    pub config: Config,
    /// Path of the file that was loaded, if any.
    pub path: Option<PathBuf>,
}

/// Values given on the command line. `None` means "not given".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub output: Option<PathBuf>,
    pub package: Option<String>,
    pub format: Option<OutputFormat>,
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Output file path, or `-` for stdout.
    pub output: PathBuf,
    /// Go package clause.
    pub package: String,
    /// Output format.
    pub format: OutputFormat,
}

impl Settings {
    /// Whether output goes to stdout instead of a file.
    pub fn to_stdout(&self) -> bool {
        self.output.as_os_str() == "-"
    }
}

/// Loaded configuration file contents plus where they came from.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Repo configuration (if a file was found)
    pub repo: Option<RepoConfig>,
    /// Directory that relative paths in the file are resolved against
    base_dir: Option<PathBuf>,
}

impl Config {
    /// Load configuration for the repository rooted at `repo_root`.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be read, parsed,
    /// or validated. A missing file is not an error.
    pub fn load(repo_root: &Path) -> Result<ConfigLoadResult, ConfigError> {
        let explicit = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
        Self::load_from(repo_root, explicit.as_deref())
    }

    /// Load configuration, consulting `explicit` before the repo root.
    pub fn load_from(
        repo_root: &Path,
        explicit: Option<&Path>,
    ) -> Result<ConfigLoadResult, ConfigError> {
        let candidate = explicit
            .filter(|p| p.exists())
            .map(Path::to_path_buf)
            .or_else(|| {
                let path = repo_root.join(CONFIG_FILE_NAME);
                path.exists().then_some(path)
            });

        let Some(path) = candidate else {
            return Ok(ConfigLoadResult {
                config: Config::default(),
                path: None,
            });
        };

        let repo = Self::read_repo_config(&path)?;
        repo.validate()?;
        tracing::debug!(path = %path.display(), "loaded config file");

        Ok(ConfigLoadResult {
            config: Config {
                repo: Some(repo),
                base_dir: path.parent().map(Path::to_path_buf),
            },
            path: Some(path),
        })
    }

    /// Read and parse a repo config file.
    fn read_repo_config(path: &Path) -> Result<RepoConfig, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Apply CLI overrides on top of the file and the defaults.
    ///
    /// Relative CLI paths are resolved against `cwd`; relative file paths
    /// against the config file's directory.
    pub fn resolve(&self, overrides: &Overrides, cwd: &Path) -> Settings {
        let file = self.repo.clone().unwrap_or_default();

        let output = match (&overrides.output, &file.output) {
            (Some(cli), _) => absolutize(cli, cwd),
            (None, Some(from_file)) => {
                absolutize(from_file, self.base_dir.as_deref().unwrap_or(cwd))
            }
            (None, None) => absolutize(Path::new(DEFAULT_OUTPUT), cwd),
        };

        let package = overrides
            .package
            .clone()
            .or(file.package)
            .unwrap_or_else(|| DEFAULT_PACKAGE.to_string());

        let format = overrides
            .format
            .or(file.format)
            .or_else(|| OutputFormat::from_path(&output))
            .unwrap_or_default();

        Settings {
            output,
            package,
            format,
        }
    }
}

/// Join relative paths onto `base`, leaving `-` and absolute paths alone.
/// Leading `./` components are dropped so messages show `/work/version.go`.
fn absolutize(path: &Path, base: &Path) -> PathBuf {
    if path.as_os_str() == "-" || path.is_absolute() {
        return path.to_path_buf();
    }
    let relative: PathBuf = path
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect();
    base.join(relative)
}
