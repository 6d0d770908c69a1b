//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Flags
//!
//! - `-o` / `--output <path>`: File to generate (`-` for stdout)
//! - `--pkg <name>`: Go package clause
//! - `--format <go|rust|json>`: Output format
//! - `--cwd <path>`: Run as if in that directory
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Minimal output

use std::path::PathBuf;

use clap::Parser;

use crate::core::config::Overrides;
use crate::render::OutputFormat;

/// verstamp - Generate version constants from the enclosing git, bazaar, or mercurial repository
#[derive(Parser, Debug)]
#[command(name = "verstamp")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "\
EXAMPLES:
    # Write ./version.go in package main
    verstamp

    # Generate into a subpackage
    verstamp -o internal/version/version.go --pkg version

    # Rust constants for include!()
    verstamp -o src/version.rs

    # Print JSON metadata
    verstamp -o - --format json

DEFAULTS:
    Values not given on the command line are read from .verstamp.toml in
    the repository root (keys: output, package, format).")]
pub struct Cli {
    /// The output file to generate [default: ./version.go]
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// The package of the output file [default: main]
    #[arg(long = "pkg", value_name = "NAME")]
    pub package: Option<String>,

    /// Output format [default: inferred from the output extension, else go]
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Run as if verstamp was started in this directory
    #[arg(long)]
    pub cwd: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }

    /// Flags that override config file values.
    pub fn overrides(&self) -> Overrides {
        Overrides {
            output: self.output.clone(),
            package: self.package.clone(),
            format: self.format,
        }
    }
}
