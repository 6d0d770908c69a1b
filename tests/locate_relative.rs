//! Locating from a relative start directory.
//!
//! Kept in its own test binary because it changes the process working
//! directory.

use std::path::Path;

use assert_fs::prelude::*;
use assert_fs::TempDir;

use verstamp::core::types::RepositoryKind;
use verstamp::vcs::locate;

#[test]
fn dot_walks_above_the_working_directory() {
    let tmp = TempDir::new().unwrap();
    tmp.child("a/.git").create_dir_all().unwrap();
    tmp.child("a/b").create_dir_all().unwrap();

    let previous = std::env::current_dir().unwrap();
    std::env::set_current_dir(tmp.child("a/b").path()).unwrap();
    let found = locate(Path::new("."));
    std::env::set_current_dir(previous).unwrap();

    let repo = found.unwrap();
    assert_eq!(repo.kind, RepositoryKind::Git);
    assert_eq!(
        repo.root.canonicalize().unwrap(),
        tmp.child("a").path().canonicalize().unwrap()
    );
}
