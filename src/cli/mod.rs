//! cli
//!
//! Command-line interface layer for Scaffold.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Delegate to command handlers
//! - Does NOT run pipeline stages directly
//!
//! # Architecture
//!
//! The CLI layer is thin. It parses arguments via clap and dispatches to
//! handlers that drive the [`crate::pipeline`]. Configuration is loaded
//! once here and passed down; nothing below this layer reads the
//! environment.

pub mod args;
pub mod commands;

pub use args::{Cli, Command};

use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();
    init_tracing(cli.debug);
    commands::dispatch(cli.command, cli.quiet)
}

/// Install the tracing subscriber.
///
/// `RUST_LOG` takes precedence; otherwise `--debug` selects debug-level
/// output and normal runs stay at warnings so `--quiet` output remains
/// machine-readable.
fn init_tracing(debug: bool) {
    let default = if debug { "scaffold=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .init();
}
