//! core::types
//!
//! Strong types for core domain concepts.
//!
//! # Types
//!
//! - [`RepositoryKind`] - Which version-control system owns the tree
//! - [`CommitMetadata`] - Normalized head metadata, independent of backend
//!
//! # Defaults
//!
//! Every field of [`CommitMetadata`] has an empty value (empty string,
//! zero revision, Unix epoch, `false`). Extraction starts from
//! [`CommitMetadata::empty`] and only overwrites a field when its query
//! produced something usable.
//!
//! # Examples
//!
//! ```
//! use verstamp::core::types::{CommitMetadata, RepositoryKind};
//!
//! let meta = CommitMetadata::empty(RepositoryKind::Mercurial);
//! assert_eq!(meta.revision_number, Some(0));
//! assert_eq!(meta.commit_date.timestamp(), 0);
//! assert!(!meta.tag_is_exact);
//! ```

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A supported version-control system.
///
/// Variants are listed in the order the locator checks their markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepositoryKind {
    /// Git, marked by `.git`.
    Git,
    /// Bazaar, marked by `.bzr`.
    #[serde(rename = "bzr")]
    Bazaar,
    /// Mercurial, marked by `.hg`.
    #[serde(rename = "hg")]
    Mercurial,
}

impl RepositoryKind {
    /// All kinds, in marker check order.
    pub const ALL: [RepositoryKind; 3] = [
        RepositoryKind::Git,
        RepositoryKind::Bazaar,
        RepositoryKind::Mercurial,
    ];

    /// Name of the marker entry found at a repository root.
    pub fn marker(self) -> &'static str {
        match self {
            RepositoryKind::Git => ".git",
            RepositoryKind::Bazaar => ".bzr",
            RepositoryKind::Mercurial => ".hg",
        }
    }

    /// Short name, identical to the executable that serves the repository.
    pub fn name(self) -> &'static str {
        match self {
            RepositoryKind::Git => "git",
            RepositoryKind::Bazaar => "bzr",
            RepositoryKind::Mercurial => "hg",
        }
    }

    /// Whether this backend reports a numeric revision counter.
    pub fn has_revision_number(self) -> bool {
        !matches!(self, RepositoryKind::Git)
    }
}

impl fmt::Display for RepositoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Head metadata normalized across backends.
///
/// Field meaning per backend:
///
/// | field             | git               | bzr           | hg            |
/// |-------------------|-------------------|---------------|---------------|
/// | `short_hash`      | abbreviated hash  | empty         | empty         |
/// | `hash`            | full hash         | revision id   | node          |
/// | `revision_number` | `None`            | revno         | rev           |
///
/// The value is built once per run and then handed to rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommitMetadata {
    /// Backend that produced this record.
    #[serde(rename = "vcs")]
    pub kind: RepositoryKind,

    /// Abbreviated commit hash (git only).
    #[serde(skip_serializing_if = "String::is_empty")]
    pub short_hash: String,

    /// Full commit hash, revision id, or node.
    pub hash: String,

    /// Monotonic revision counter (bzr and hg only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revision_number: Option<i64>,

    /// Nearest or latest tag; empty when there is none.
    pub tag: String,

    /// Head is exactly the tagged commit.
    pub tag_is_exact: bool,

    /// Commit time of head.
    pub commit_date: DateTime<Utc>,

    /// Commit time of head as epoch seconds.
    pub commit_date_unix: i64,
}

impl CommitMetadata {
    /// The all-defaults record for a backend.
    pub fn empty(kind: RepositoryKind) -> Self {
        Self {
            kind,
            short_hash: String::new(),
            hash: String::new(),
            revision_number: kind.has_revision_number().then_some(0),
            tag: String::new(),
            tag_is_exact: false,
            commit_date: DateTime::<Utc>::UNIX_EPOCH,
            commit_date_unix: 0,
        }
    }

    /// Set the commit date, keeping the epoch-seconds mirror in sync.
    pub fn set_commit_date(&mut self, date: DateTime<Utc>) {
        self.commit_date_unix = date.timestamp();
        self.commit_date = date;
    }

    /// A short human label for the head: the tag if any, else a hash.
    pub fn label(&self) -> &str {
        if !self.tag.is_empty() {
            &self.tag
        } else if !self.short_hash.is_empty() {
            &self.short_hash
        } else {
            &self.hash
        }
    }
}
