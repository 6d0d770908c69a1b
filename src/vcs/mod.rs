//! vcs
//!
//! Repository detection and head metadata extraction.
//!
//! # Architecture
//!
//! - [`locate`] walks up from a starting directory to the nearest marker
//! - [`extract`] selects the backend for a [`RepositoryKind`] and runs its
//!   queries through a [`CommandRunner`]
//!
//! Every backend talks to the outside world only through
//! [`CommandRunner::run`]. Query failures never surface as errors: the
//! affected field keeps its default and the other fields are unaffected.
//!
//! # Example
//!
//! ```no_run
//! use verstamp::vcs::{extract, locate, SystemRunner};
//! use std::path::Path;
//!
//! let repo = locate(Path::new(".")).expect("no repository");
//! let meta = extract(repo.kind, &SystemRunner::new(&repo.root));
//! println!("{} {}", meta.kind, meta.label());
//! ```

pub mod bzr;
pub mod git;
pub mod hg;
mod locate;
pub mod parse;
mod runner;

pub use locate::{kind_at, locate, Repository};
pub use runner::{split_command_line, trim_output, CommandRunner, ScriptedRunner, SystemRunner};

use crate::core::types::{CommitMetadata, RepositoryKind};

/// Run the backend for `kind` and return its normalized metadata.
pub fn extract(kind: RepositoryKind, runner: &dyn CommandRunner) -> CommitMetadata {
    let meta = match kind {
        RepositoryKind::Git => git::extract(runner),
        RepositoryKind::Bazaar => bzr::extract(runner),
        RepositoryKind::Mercurial => hg::extract(runner),
    };
    tracing::debug!(
        kind = %meta.kind,
        hash = %meta.hash,
        tag = %meta.tag,
        exact = meta.tag_is_exact,
        "extracted head metadata"
    );
    meta
}
