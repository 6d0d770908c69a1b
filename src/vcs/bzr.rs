//! vcs::bzr
//!
//! Bazaar backend.
//!
//! Revision data comes from `bzr version-info` custom templates. The tag
//! list from `bzr tags --sort=time` has one `<name> <revno>` line per tag;
//! only the first line is consulted. Tag names may contain spaces, so the
//! revno is the last whitespace-separated token and the name is everything
//! before it.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::types::{CommitMetadata, RepositoryKind};
use crate::vcs::parse::{parse_bzr_date, parse_int};
use crate::vcs::runner::CommandRunner;

/// Commit date with UTC offset.
pub const COMMIT_DATE: &str = "bzr version-info --custom --template {date}";
/// Revision number of the branch tip.
pub const REVNO: &str = "bzr version-info --custom --template {revno}";
/// Globally unique revision id of the branch tip.
pub const REVISION_ID: &str = "bzr version-info --custom --template {revision_id}";
/// Tags with the revno each points at.
pub const TAGS: &str = "bzr tags --sort=time";

/// `<tag name><whitespace><revno>`; the lazy name group leaves the column
/// padding out of the tag.
static TAG_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.*?)\s+(\S+)$").unwrap_or_else(|_| unreachable!()));

/// Query a bazaar branch.
pub fn extract(runner: &dyn CommandRunner) -> CommitMetadata {
    let mut meta = CommitMetadata::empty(RepositoryKind::Bazaar);

    meta.set_commit_date(parse_bzr_date(&runner.run(COMMIT_DATE)));
    let revno = runner.run(REVNO);
    meta.revision_number = Some(parse_int(&revno));
    meta.hash = runner.run(REVISION_ID);

    if let Some((tag, tag_revno)) = first_tag(&runner.run(TAGS)) {
        meta.tag_is_exact = tag_revno == revno;
        meta.tag = tag.to_string();
    }

    meta
}

/// Split the first line of a tag listing into `(name, revno)`.
///
/// ```
/// use verstamp::vcs::bzr::first_tag;
///
/// assert_eq!(first_tag("release 1.0   42\nold 7"), Some(("release 1.0", "42")));
/// assert_eq!(first_tag(""), None);
/// ```
pub fn first_tag(listing: &str) -> Option<(&str, &str)> {
    let line = listing.split('\n').next().unwrap_or_default();
    let line = line.strip_suffix('\r').unwrap_or(line);
    let caps = TAG_LINE.captures(line)?;
    let name = caps.get(1)?.as_str();
    if name.is_empty() {
        return None;
    }
    let revno = caps.get(2)?.as_str();
    Some((name, revno))
}
