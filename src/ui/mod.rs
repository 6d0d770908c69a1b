//! ui
//!
//! User interaction utilities.
//!
//! # Modules
//!
//! - [`output`] - Output formatting and display
//! - [`logging`] - Diagnostic log setup
//!
//! # Design
//!
//! All terminal output goes through this module so `--quiet` and
//! `--debug` behave the same everywhere.

pub mod logging;
pub mod output;
