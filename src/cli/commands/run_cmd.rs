//! cli::commands::run_cmd
//!
//! Execute a snippet against the remote execution service.

use std::path::Path;

use anyhow::{Context, Result};

use crate::core::config::Config;
use crate::exec::piston::PistonRunner;
use crate::exec::{CodeRunner, SourceFile};

/// Run the run command.
///
/// This is a synchronous wrapper that uses tokio to run the async implementation.
pub fn run(snippet: &Path, language: Option<&str>, version: Option<&str>) -> Result<()> {
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(run_async(snippet, language, version))
}

/// Async implementation of run.
async fn run_async(snippet: &Path, language: Option<&str>, version: Option<&str>) -> Result<()> {
    let config = Config::load()?;

    let content = std::fs::read_to_string(snippet)
        .with_context(|| format!("failed to read snippet file '{}'", snippet.display()))?;

    let file_name = snippet
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("main.py");

    let runner = PistonRunner::new(config.exec_api_base());
    let output = runner
        .run(
            language.unwrap_or(config.exec_language()),
            version.unwrap_or(config.exec_version()),
            &[SourceFile::new(file_name, content)],
        )
        .await?;

    println!("{}", output.render());
    Ok(())
}
