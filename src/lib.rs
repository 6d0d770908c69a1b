//! verstamp - Version constants from the enclosing repository
//!
//! verstamp finds the git, bazaar, or mercurial repository that encloses
//! the working directory, asks the VCS about its head (hash, tag, date,
//! whether the head is exactly the tagged commit), and writes that
//! metadata as constants into a source file for the build to consume.
//!
//! # Architecture
//!
//! - [`cli`] - Command-line interface layer (parses args, delegates to engine)
//! - [`engine`] - Runs Locate -> Configure -> Extract -> Render -> Write
//! - [`core`] - Domain types and configuration
//! - [`vcs`] - Repository location and per-backend metadata extraction
//! - [`render`] - Go, Rust, and JSON output
//! - [`ui`] - Output and logging
//!
//! # Invariants
//!
//! 1. A failing VCS query degrades one field to its default; it never
//!    aborts the run
//! 2. Only "no working directory", "no repository", config, render, and
//!    write problems are fatal
//! 3. Output is a pure function of the repository state, so repeated runs
//!    are byte-identical

pub mod cli;
pub mod core;
pub mod engine;
pub mod render;
pub mod ui;
pub mod vcs;
