//! vcs::runner
//!
//! External command execution for VCS queries.
//!
//! # Failure Absorption
//!
//! [`CommandRunner::run`] never fails. A missing binary, a non-zero exit
//! status, or an empty command line all produce the empty string. This is
//! the single place where query failures are swallowed; every field of the
//! metadata record then falls back to its default.
//!
//! # Command Lines
//!
//! A command line is split on the literal space character only. There is
//! no quoting: an argument containing a space cannot be expressed, and two
//! consecutive spaces pass an empty argument to the program.
//!
//! # Example
//!
//! ```
//! use verstamp::vcs::{CommandRunner, ScriptedRunner};
//!
//! let runner = ScriptedRunner::new().with("git rev-parse HEAD", "abc123");
//! assert_eq!(runner.run("git rev-parse HEAD"), "abc123");
//! assert_eq!(runner.run("git describe --tags"), "");
//! ```

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::debug;

/// Characters trimmed from both ends of captured output.
const TRIM_CHARS: &[char] = &[' ', '\t', '\n', '\r'];

/// Executes a VCS query and returns its trimmed standard output.
pub trait CommandRunner {
    /// Run `command_line`, returning trimmed stdout or `""` on any failure.
    fn run(&self, command_line: &str) -> String;
}

/// Split a command line into program and arguments on `' '`.
///
/// Returns `None` when the program name is empty.
pub fn split_command_line(command_line: &str) -> Option<(&str, Vec<&str>)> {
    let mut parts = command_line.split(' ');
    let program = parts.next().filter(|p| !p.is_empty())?;
    Some((program, parts.collect()))
}

/// Trim captured output the way every query expects.
pub fn trim_output(raw: &str) -> &str {
    raw.trim_matches(TRIM_CHARS)
}

/// Runs commands as real subprocesses.
///
/// Commands execute synchronously with no timeout; a hung VCS binary
/// hangs the caller.
#[derive(Debug, Clone)]
pub struct SystemRunner {
    dir: PathBuf,
}

impl SystemRunner {
    /// Create a runner that executes commands in `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Working directory for spawned commands.
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, command_line: &str) -> String {
        let Some((program, args)) = split_command_line(command_line) else {
            debug!(command = command_line, "empty command line");
            return String::new();
        };

        debug!(command = command_line, dir = %self.dir.display(), "running query");

        let output = match Command::new(program)
            .args(&args)
            .current_dir(&self.dir)
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
        {
            Ok(output) => output,
            Err(err) => {
                debug!(command = command_line, error = %err, "query could not be started");
                return String::new();
            }
        };

        if !output.status.success() {
            debug!(
                command = command_line,
                code = output.status.code().unwrap_or(-1),
                "query exited unsuccessfully"
            );
            return String::new();
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        trim_output(&stdout).to_string()
    }
}

/// Returns canned outputs keyed by exact command line.
///
/// Unknown command lines behave like a failed query and return `""`.
/// Every call is recorded so tests can assert which queries were issued.
#[derive(Debug, Default)]
pub struct ScriptedRunner {
    responses: HashMap<String, String>,
    calls: RefCell<Vec<String>>,
}

impl ScriptedRunner {
    /// Create a runner with no scripted responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the raw output for a command line.
    ///
    /// The output is trimmed on return, like real subprocess output.
    pub fn with(mut self, command_line: &str, output: &str) -> Self {
        self.responses
            .insert(command_line.to_string(), output.to_string());
        self
    }

    /// Command lines run so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(&self, command_line: &str) -> String {
        self.calls.borrow_mut().push(command_line.to_string());
        self.responses
            .get(command_line)
            .map(|raw| trim_output(raw).to_string())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod split {
        use super::*;

        #[test]
        fn program_and_args() {
            let (program, args) = split_command_line("git rev-parse --short HEAD").unwrap();
            assert_eq!(program, "git");
            assert_eq!(args, vec!["rev-parse", "--short", "HEAD"]);
        }

        #[test]
        fn double_space_yields_empty_argument() {
            let (_, args) = split_command_line("hg  log").unwrap();
            assert_eq!(args, vec!["", "log"]);
        }

        #[test]
        fn no_quoting_support() {
            let (_, args) = split_command_line("echo \"a b\"").unwrap();
            assert_eq!(args, vec!["\"a", "b\""]);
        }

        #[test]
        fn empty_program_is_rejected() {
            assert!(split_command_line("").is_none());
            assert!(split_command_line(" git").is_none());
        }
    }

    mod trim {
        use super::*;

        #[test]
        fn strips_whitespace_and_newlines() {
            assert_eq!(trim_output(" \tabc\r\n"), "abc");
        }

        #[test]
        fn keeps_interior_whitespace() {
            assert_eq!(trim_output("v1  12\n"), "v1  12");
        }
    }

    mod system {
        use super::*;

        #[test]
        fn missing_binary_yields_empty() {
            let runner = SystemRunner::new(std::env::temp_dir());
            assert_eq!(runner.run("verstamp-definitely-not-a-binary --flag"), "");
        }

        #[test]
        fn empty_command_yields_empty() {
            let runner = SystemRunner::new(std::env::temp_dir());
            assert_eq!(runner.run(""), "");
        }

        #[cfg(unix)]
        #[test]
        fn captures_trimmed_stdout() {
            let runner = SystemRunner::new(std::env::temp_dir());
            assert_eq!(runner.run("echo hello"), "hello");
        }

        #[cfg(unix)]
        #[test]
        fn nonzero_exit_yields_empty() {
            let runner = SystemRunner::new(std::env::temp_dir());
            assert_eq!(runner.run("false"), "");
        }
    }

    mod scripted {
        use super::*;

        #[test]
        fn returns_trimmed_canned_output() {
            let runner = ScriptedRunner::new().with("git rev-parse HEAD", "abc\n");
            assert_eq!(runner.run("git rev-parse HEAD"), "abc");
        }

        #[test]
        fn unknown_command_yields_empty() {
            let runner = ScriptedRunner::new();
            assert_eq!(runner.run("bzr tags"), "");
        }

        #[test]
        fn records_calls_in_order() {
            let runner = ScriptedRunner::new();
            runner.run("a");
            runner.run("b");
            assert_eq!(runner.calls(), vec!["a".to_string(), "b".to_string()]);
        }
    }
}
