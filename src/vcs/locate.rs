//! vcs::locate
//!
//! Repository discovery by walking up the directory tree.
//!
//! At each level the markers are checked in [`RepositoryKind::ALL`] order
//! (`.git`, then `.bzr`, then `.hg`) and the first one present wins. A
//! marker may be a directory or a file, so linked git worktrees and
//! submodules are found too. The walk stops at the filesystem root.
//!
//! Only existence checks are performed; nothing is opened or read.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::core::types::RepositoryKind;

/// A located repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    /// Which VCS owns the tree.
    pub kind: RepositoryKind,
    /// Directory containing the marker.
    pub root: PathBuf,
}

/// Find the nearest enclosing repository of `start`.
///
/// A relative `start` is resolved against the process working directory
/// first, so the walk always reaches the filesystem root. Returns `None`
/// when no marker exists in `start` or any ancestor.
///
/// # Example
///
/// ```no_run
/// use verstamp::vcs::locate;
/// use std::path::Path;
///
/// if let Some(repo) = locate(Path::new("/src/project/sub")) {
///     println!("{} repository at {}", repo.kind, repo.root.display());
/// }
/// ```
pub fn locate(start: &Path) -> Option<Repository> {
    let start = std::path::absolute(start).unwrap_or_else(|_| start.to_path_buf());
    let mut dir = start.as_path();
    loop {
        if let Some(kind) = kind_at(dir) {
            debug!(kind = %kind, root = %dir.display(), "located repository");
            return Some(Repository {
                kind,
                root: dir.to_path_buf(),
            });
        }

        match dir.parent() {
            Some(parent) if parent != dir => dir = parent,
            _ => {
                debug!(start = %start.display(), "no repository marker up to filesystem root");
                return None;
            }
        }
    }
}

/// The repository kind whose marker is present directly in `dir`.
pub fn kind_at(dir: &Path) -> Option<RepositoryKind> {
    RepositoryKind::ALL
        .into_iter()
        .find(|kind| dir.join(kind.marker()).exists())
}
