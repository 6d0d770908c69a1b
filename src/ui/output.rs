//! ui::output
//!
//! User-facing messages.
//!
//! # Design
//!
//! Output respects the quiet flag. Diagnostics go through `tracing`
//! instead; this module only prints what the user asked for.

use std::fmt::Display;

use crate::core::types::CommitMetadata;
use crate::engine::Outcome;

/// Output verbosity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// Quiet mode - minimal output
    Quiet,
    /// Normal mode - standard output
    Normal,
    /// Debug mode - verbose output
    Debug,
}

impl Verbosity {
    /// Create verbosity from flags.
    pub fn from_flags(quiet: bool, debug: bool) -> Self {
        if quiet {
            Verbosity::Quiet
        } else if debug {
            Verbosity::Debug
        } else {
            Verbosity::Normal
        }
    }
}

/// Print an error message (always shown).
pub fn error(message: impl Display) {
    eprintln!("error: {}", message);
}

/// Print a success message (respects quiet mode).
///
/// Goes to stderr so it never mixes with a file written to stdout.
pub fn success(message: impl Display, verbosity: Verbosity) {
    if verbosity != Verbosity::Quiet {
        eprintln!("{}", message);
    }
}

/// One-line summary of a head, e.g. `git v1.2.0 (exact)`.
pub fn format_head(meta: &CommitMetadata) -> String {
    let mut line = format!("{} {}", meta.kind, meta.label());
    if let Some(rev) = meta.revision_number {
        line.push_str(&format!(" r{}", rev));
    }
    if meta.tag_is_exact {
        line.push_str(" (exact)");
    }
    line
}

/// Summary printed after a successful run.
///
/// In debug mode the full hash, commit date, format and repository root
/// follow on indented lines.
pub fn format_outcome(outcome: &Outcome, verbosity: Verbosity) -> String {
    let target = if outcome.settings.to_stdout() {
        "stdout".to_string()
    } else {
        outcome.settings.output.display().to_string()
    };
    let mut text = format!("wrote {} ({})", target, format_head(&outcome.metadata));
    if verbosity == Verbosity::Debug {
        let meta = &outcome.metadata;
        text.push_str(&format!("\n  hash:   {}", meta.hash));
        text.push_str(&format!("\n  date:   {}", meta.commit_date.to_rfc3339()));
        text.push_str(&format!("\n  format: {}", outcome.settings.format));
        text.push_str(&format!(
            "\n  root:   {}",
            outcome.repository.root.display()
        ));
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::RepositoryKind;

    #[test]
    fn verbosity_from_flags() {
        assert_eq!(Verbosity::from_flags(true, true), Verbosity::Quiet);
        assert_eq!(Verbosity::from_flags(false, true), Verbosity::Debug);
        assert_eq!(Verbosity::from_flags(false, false), Verbosity::Normal);
    }

    #[test]
    fn head_summary_git() {
        let mut meta = CommitMetadata::empty(RepositoryKind::Git);
        meta.short_hash = "1a2b3c4".into();
        assert_eq!(format_head(&meta), "git 1a2b3c4");
        meta.tag = "v1.0".into();
        meta.tag_is_exact = true;
        assert_eq!(format_head(&meta), "git v1.0 (exact)");
    }

    mod outcome {
        use super::*;
        use crate::core::config::Settings;
        use crate::render::OutputFormat;
        use crate::vcs::Repository;
        use std::path::PathBuf;

        fn outcome() -> Outcome {
            let mut metadata = CommitMetadata::empty(RepositoryKind::Git);
            metadata.short_hash = "1a2b3c4".into();
            metadata.hash = "1a2b3c4d5e".into();
            Outcome {
                repository: Repository {
                    kind: RepositoryKind::Git,
                    root: PathBuf::from("/work"),
                },
                settings: Settings {
                    output: PathBuf::from("/work/version.go"),
                    package: "main".into(),
                    format: OutputFormat::Go,
                },
                metadata,
                contents: String::new(),
            }
        }

        #[test]
        fn normal_is_one_line() {
            let text = format_outcome(&outcome(), Verbosity::Normal);
            assert_eq!(text, "wrote /work/version.go (git 1a2b3c4)");
        }

        #[test]
        fn debug_adds_details() {
            let text = format_outcome(&outcome(), Verbosity::Debug);
            let lines: Vec<&str> = text.lines().collect();
            assert_eq!(lines[0], "wrote /work/version.go (git 1a2b3c4)");
            assert_eq!(lines[1], "  hash:   1a2b3c4d5e");
            assert_eq!(lines[2], "  date:   1970-01-01T00:00:00+00:00");
            assert_eq!(lines[3], "  format: go");
            assert_eq!(lines[4], "  root:   /work");
        }
    }

    #[test]
    fn head_summary_hg() {
        let mut meta = CommitMetadata::empty(RepositoryKind::Mercurial);
        meta.tag = "1.4".into();
        meta.revision_number = Some(118);
        assert_eq!(format_head(&meta), "hg 1.4 r118");
    }
}
