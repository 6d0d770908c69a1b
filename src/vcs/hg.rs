//! vcs::hg
//!
//! Mercurial backend. All queries template `hg heads .`, the heads of the
//! working directory's branch.
//!
//! Exactness is not recomputed from tag names. Mercurial reports the
//! distance to the latest tag directly, and tagging commits `.hgtags` as a
//! child of the tagged revision, so a head sitting on that tag commit has
//! distance `1`.

use crate::core::types::{CommitMetadata, RepositoryKind};
use crate::vcs::parse::{parse_epoch_float, parse_int};
use crate::vcs::runner::CommandRunner;

/// Commit date as fractional epoch seconds.
pub const COMMIT_DATE: &str = "hg heads . -T {date}";
/// Latest tag reachable from the head.
pub const LATEST_TAG: &str = "hg heads . -T {latesttag}";
/// Local revision number.
pub const REV: &str = "hg heads . -T {rev}";
/// Full changeset hash.
pub const NODE: &str = "hg heads . -T {node}";
/// Number of commits between the head and the latest tag.
pub const LATEST_TAG_DISTANCE: &str = "hg heads . -T {latesttagdistance}";

/// Query a mercurial repository.
pub fn extract(runner: &dyn CommandRunner) -> CommitMetadata {
    let mut meta = CommitMetadata::empty(RepositoryKind::Mercurial);

    meta.set_commit_date(parse_epoch_float(&runner.run(COMMIT_DATE)));
    meta.tag = runner.run(LATEST_TAG);
    meta.revision_number = Some(parse_int(&runner.run(REV)));
    meta.hash = runner.run(NODE);
    meta.tag_is_exact = runner.run(LATEST_TAG_DISTANCE) == "1";

    meta
}
