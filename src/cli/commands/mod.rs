//! cli::commands
//!
//! Command handlers. Each handler is a synchronous function that owns a
//! tokio runtime for any async work, keeping `main` and argument parsing
//! free of async plumbing.

mod create;
mod name_cmd;
mod run_cmd;

use anyhow::Result;

use super::args::Command;

/// Dispatch a parsed command to its handler.
pub fn dispatch(command: Command, quiet: bool) -> Result<()> {
    match command {
        Command::Create {
            description,
            snippet,
            name,
        } => create::create(&description, snippet.as_deref(), name.as_deref(), quiet),
        Command::Run {
            snippet,
            language,
            version,
        } => run_cmd::run(&snippet, language.as_deref(), version.as_deref()),
        Command::Name {
            description,
            explicit,
        } => name_cmd::name(&description, explicit.as_deref()),
    }
}
