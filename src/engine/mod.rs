//! engine
//!
//! Orchestrates one run: Locate -> Configure -> Extract -> Render -> Write.
//!
//! # Lifecycle
//!
//! ```text
//! Locate -> Configure -> Extract -> Render -> Write
//! ```
//!
//! 1. **Locate**: find the nearest repository above the working directory
//! 2. **Configure**: load the repo config file and apply CLI overrides
//! 3. **Extract**: query the VCS for head metadata
//! 4. **Render**: format the metadata for the target language
//! 5. **Write**: atomically replace the output file
//!
//! # Failure Model
//!
//! Steps 1, 2, 4 and 5 fail the whole run. Step 3 never fails: a query
//! that cannot be answered leaves its field at the default. Nothing is
//! written unless every fatal step succeeded, so a failed run leaves any
//! previous output file untouched.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

use crate::core::config::{Config, ConfigError, Overrides, Settings};
use crate::core::types::CommitMetadata;
use crate::render::{self, RenderError};
use crate::vcs::{self, CommandRunner, Repository, SystemRunner};

/// Execution context for a run.
///
/// Contains global settings derived from CLI flags.
#[derive(Debug, Clone, Default)]
pub struct Context {
    /// Working directory override.
    pub cwd: Option<PathBuf>,
    /// Debug logging enabled.
    pub debug: bool,
    /// Quiet mode (minimal output).
    pub quiet: bool,
}

impl Context {
    /// The directory the repository search starts from.
    ///
    /// # Errors
    ///
    /// Returns `GenerateError::CurrentDir` if the process working directory
    /// cannot be determined.
    pub fn start_dir(&self) -> Result<PathBuf, GenerateError> {
        match &self.cwd {
            Some(dir) if dir.is_absolute() => Ok(dir.clone()),
            Some(dir) => Ok(std::env::current_dir()
                .map_err(GenerateError::CurrentDir)?
                .join(dir)),
            None => std::env::current_dir().map_err(GenerateError::CurrentDir),
        }
    }
}

/// Errors that abort a run.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The working directory is unavailable.
    #[error("cannot determine working directory: {0}")]
    CurrentDir(#[source] std::io::Error),

    /// No marker in the start directory or any ancestor.
    #[error("no repository found in {} or any parent directory", start.display())]
    NoRepository {
        /// Where the search started.
        start: PathBuf,
    },

    /// Config file problem.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Rendering failed.
    #[error(transparent)]
    Render(#[from] RenderError),

    /// The output's parent directory could not be created.
    #[error("failed to create directory '{}': {source}", path.display())]
    CreateDir {
        /// Directory being created.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },

    /// The output could not be written.
    #[error("failed to write '{}': {source}", path.display())]
    Write {
        /// File being written.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },
}

/// What a successful run produced.
#[derive(Debug, Clone)]
pub struct Outcome {
    /// The repository that was queried.
    pub repository: Repository,
    /// Settings after config and CLI resolution.
    pub settings: Settings,
    /// The extracted metadata.
    pub metadata: CommitMetadata,
    /// The rendered file contents.
    pub contents: String,
}

/// Run the full lifecycle against real VCS binaries.
pub fn generate(ctx: &Context, overrides: &Overrides) -> Result<Outcome, GenerateError> {
    let start = ctx.start_dir()?;
    let runner = SystemRunner::new(&start);
    generate_with(&start, overrides, &runner)
}

/// Run the full lifecycle from `start`, issuing queries through `runner`.
pub fn generate_with(
    start: &Path,
    overrides: &Overrides,
    runner: &dyn CommandRunner,
) -> Result<Outcome, GenerateError> {
    // 1. Locate
    let repository = vcs::locate(start).ok_or_else(|| GenerateError::NoRepository {
        start: start.to_path_buf(),
    })?;
    info!(kind = %repository.kind, root = %repository.root.display(), "repository");

    // 2. Configure
    let loaded = Config::load(&repository.root)?;
    let settings = loaded.config.resolve(overrides, start);
    debug!(
        output = %settings.output.display(),
        package = %settings.package,
        format = %settings.format,
        "resolved settings"
    );

    // 3. Extract
    let metadata = vcs::extract(repository.kind, runner);

    // 4. Render
    let contents = render::render(settings.format, &settings.package, &metadata)?;

    // 5. Write
    if settings.to_stdout() {
        write_stdout(&contents).map_err(|e| GenerateError::Write {
            path: settings.output.clone(),
            source: e,
        })?;
    } else {
        write_atomic(&settings.output, &contents)?;
        info!(path = %settings.output.display(), "wrote version file");
    }

    Ok(Outcome {
        repository,
        settings,
        metadata,
        contents,
    })
}

fn write_stdout(contents: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(contents.as_bytes())?;
    stdout.flush()
}

/// Replace `path` with `contents` via a temp file and rename.
///
/// Missing parent directories are created first.
pub fn write_atomic(path: &Path, contents: &str) -> Result<(), GenerateError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| GenerateError::CreateDir {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    let mut temp_name = path.as_os_str().to_owned();
    temp_name.push(".tmp");
    let temp_path = PathBuf::from(temp_name);

    let result = write_temp(&temp_path, contents)
        .map_err(|e| GenerateError::Write {
            path: temp_path.clone(),
            source: e,
        })
        .and_then(|()| {
            fs::rename(&temp_path, path).map_err(|e| GenerateError::Write {
                path: path.to_path_buf(),
                source: e,
            })
        });

    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }
    result
}

fn write_temp(temp_path: &Path, contents: &str) -> std::io::Result<()> {
    let mut file = fs::File::create(temp_path)?;
    file.write_all(contents.as_bytes())?;
    file.sync_all()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::OutputFormat;
    use crate::vcs::{git, ScriptedRunner};
    use tempfile::TempDir;

    mod context {
        use super::*;

        #[test]
        fn default_context() {
            let ctx = Context::default();
            assert!(ctx.cwd.is_none());
            assert!(!ctx.debug);
            assert!(!ctx.quiet);
        }

        #[test]
        fn absolute_cwd_is_used_as_is() {
            let ctx = Context {
                cwd: Some(PathBuf::from("/some/where")),
                ..Default::default()
            };
            assert_eq!(ctx.start_dir().unwrap(), PathBuf::from("/some/where"));
        }

        #[test]
        fn relative_cwd_joins_process_dir() {
            let ctx = Context {
                cwd: Some(PathBuf::from("sub")),
                ..Default::default()
            };
            let expected = std::env::current_dir().unwrap().join("sub");
            assert_eq!(ctx.start_dir().unwrap(), expected);
        }
    }

    mod write {
        use super::*;

        #[test]
        fn creates_parent_directories() {
            let tmp = TempDir::new().unwrap();
            let path = tmp.path().join("a/b/version.go");
            write_atomic(&path, "package main\n").unwrap();
            assert_eq!(fs::read_to_string(&path).unwrap(), "package main\n");
        }

        #[test]
        fn replaces_existing_file_and_leaves_no_temp() {
            let tmp = TempDir::new().unwrap();
            let path = tmp.path().join("version.go");
            fs::write(&path, "old").unwrap();
            write_atomic(&path, "new").unwrap();
            assert_eq!(fs::read_to_string(&path).unwrap(), "new");
            assert!(!tmp.path().join("version.go.tmp").exists());
        }

        #[test]
        fn failed_rename_removes_temp() {
            let tmp = TempDir::new().unwrap();
            // A non-empty directory at the target makes the rename fail.
            let path = tmp.path().join("version.go");
            fs::create_dir_all(path.join("occupied")).unwrap();

            let err = write_atomic(&path, "package main\n").unwrap_err();
            assert!(matches!(err, GenerateError::Write { .. }));
            assert!(!tmp.path().join("version.go.tmp").exists());
            assert!(path.is_dir());
        }

        #[test]
        fn parent_is_a_file() {
            let tmp = TempDir::new().unwrap();
            fs::write(tmp.path().join("blocker"), "").unwrap();
            let err = write_atomic(&tmp.path().join("blocker/version.go"), "x").unwrap_err();
            assert!(matches!(err, GenerateError::CreateDir { .. }));
        }
    }

    mod lifecycle {
        use super::*;

        fn git_tree() -> TempDir {
            let tmp = TempDir::new().unwrap();
            fs::create_dir_all(tmp.path().join(".git")).unwrap();
            fs::create_dir_all(tmp.path().join("cmd/tool")).unwrap();
            tmp
        }

        fn runner() -> ScriptedRunner {
            ScriptedRunner::new()
                .with(git::SHORT_HASH, "1a2b3c4")
                .with(git::LONG_HASH, "1a2b3c4d5e")
                .with(git::NEAREST_TAG, "v0.3.0")
                .with(git::COMMIT_DATE, "1700000000")
        }

        #[test]
        fn writes_go_file_from_nested_start() {
            let tmp = git_tree();
            let start = tmp.path().join("cmd/tool");
            let overrides = Overrides {
                output: Some(PathBuf::from("gen/version.go")),
                package: Some("tool".into()),
                format: None,
            };

            let outcome = generate_with(&start, &overrides, &runner()).unwrap();
            assert_eq!(outcome.repository.root, tmp.path());
            assert_eq!(outcome.settings.format, OutputFormat::Go);
            assert_eq!(outcome.metadata.tag, "v0.3.0");
            assert!(!outcome.metadata.tag_is_exact);

            let written = fs::read_to_string(start.join("gen/version.go")).unwrap();
            assert_eq!(written, outcome.contents);
            assert!(written.contains("package tool\n"));
            assert!(written.contains("var CommitDate = time.Unix(1700000000, 0)\n"));
        }

        #[test]
        fn repeated_runs_are_byte_identical() {
            let tmp = git_tree();
            let overrides = Overrides {
                output: Some(PathBuf::from("version.json")),
                ..Default::default()
            };
            generate_with(tmp.path(), &overrides, &runner()).unwrap();
            let first = fs::read(tmp.path().join("version.json")).unwrap();
            generate_with(tmp.path(), &overrides, &runner()).unwrap();
            let second = fs::read(tmp.path().join("version.json")).unwrap();
            assert_eq!(first, second);
        }

        #[test]
        fn repo_config_is_honored() {
            let tmp = git_tree();
            fs::write(
                tmp.path().join(".verstamp.toml"),
                "output = \"build/version.rs\"\n",
            )
            .unwrap();

            let outcome =
                generate_with(&tmp.path().join("cmd"), &Overrides::default(), &runner()).unwrap();
            assert_eq!(outcome.settings.format, OutputFormat::Rust);
            let written = fs::read_to_string(tmp.path().join("build/version.rs")).unwrap();
            assert!(written.contains("pub const COMMIT_TAG: &str = \"v0.3.0\";"));
        }

        #[test]
        fn render_failure_writes_nothing() {
            let tmp = git_tree();
            let overrides = Overrides {
                output: Some(PathBuf::from("version.go")),
                package: Some("not-valid".into()),
                format: None,
            };
            let err = generate_with(tmp.path(), &overrides, &runner()).unwrap_err();
            assert!(matches!(err, GenerateError::Render(_)));
            assert!(!tmp.path().join("version.go").exists());
        }
    }
}
