//! vcs::git
//!
//! Git backend. Five independent queries against `HEAD`.
//!
//! `tag_is_exact` compares the nearest reachable tag with the tag that
//! points exactly at `HEAD`. `describe --exact-match` fails (and yields an
//! empty string) when `HEAD` is not tagged, so a descendant of a tag is
//! never exact.

use crate::core::types::{CommitMetadata, RepositoryKind};
use crate::vcs::parse::parse_epoch_int;
use crate::vcs::runner::CommandRunner;

/// Abbreviated hash of `HEAD`.
pub const SHORT_HASH: &str = "git rev-parse --short HEAD";
/// Full hash of `HEAD`.
pub const LONG_HASH: &str = "git rev-parse HEAD";
/// Nearest reachable tag, without distance suffix.
pub const NEAREST_TAG: &str = "git describe --abbrev=0 --tags";
/// Tag pointing exactly at `HEAD`, if any.
pub const EXACT_TAG: &str = "git describe --tags --exact-match";
/// Committer timestamp of `HEAD` in epoch seconds.
pub const COMMIT_DATE: &str = "git show -s --format=%ct";

/// Query a git repository.
pub fn extract(runner: &dyn CommandRunner) -> CommitMetadata {
    let mut meta = CommitMetadata::empty(RepositoryKind::Git);

    meta.short_hash = runner.run(SHORT_HASH);
    meta.hash = runner.run(LONG_HASH);
    meta.tag = runner.run(NEAREST_TAG);
    let exact = runner.run(EXACT_TAG);
    meta.tag_is_exact = tag_is_exact(&meta.tag, &exact);
    meta.set_commit_date(parse_epoch_int(&runner.run(COMMIT_DATE)));

    meta
}

/// Both queries found the same, non-empty tag.
pub fn tag_is_exact(nearest: &str, exact: &str) -> bool {
    !nearest.is_empty() && nearest == exact
}
