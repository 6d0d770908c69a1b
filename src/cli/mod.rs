//! cli
//!
//! Command-line interface layer for verstamp.
//!
//! # Architecture
//!
//! The CLI layer is thin. It parses arguments via clap, sets up logging,
//! and hands off to [`crate::engine`] for the actual run.

pub mod args;

pub use args::Cli;

use anyhow::Result;

use crate::engine;
use crate::ui::{logging, output};

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();
    logging::init(cli.debug);

    let ctx = engine::Context {
        cwd: cli.cwd.clone(),
        debug: cli.debug,
        quiet: cli.quiet,
    };
    let verbosity = output::Verbosity::from_flags(ctx.quiet, ctx.debug);

    let outcome = engine::generate(&ctx, &cli.overrides())?;
    output::success(output::format_outcome(&outcome, verbosity), verbosity);
    Ok(())
}
