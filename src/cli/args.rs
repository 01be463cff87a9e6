//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Minimal output

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Scaffold - synthesize and publish project repositories
#[derive(Parser, Debug)]
#[command(name = "scaffold")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Synthesize a project repository and publish it
    #[command(
        name = "create",
        long_about = "Synthesize a project repository and publish it.\n\n\
            Sends the snippet and description to the configured generative-text \
            service, materializes the returned project files, creates a matching \
            repository under your hosting account (resolving name collisions), \
            and pushes the result.",
        after_help = "\
EXAMPLES:
    # Generate and publish from a description
    scaffold create --description \"repo name: todo-app, a simple todo list\"

    # Include a snippet from a file
    scaffold create --description \"A sorting visualizer\" --snippet sort.py

    # Pick the repository name yourself
    scaffold create --description \"...\" --name my-project"
    )]
    Create {
        /// Natural-language description of the project
        #[arg(long)]
        description: String,

        /// File containing the code snippet to embed
        #[arg(long, value_name = "FILE")]
        snippet: Option<PathBuf>,

        /// Explicit repository name (sanitized before use)
        #[arg(long)]
        name: Option<String>,
    },

    /// Execute a snippet against the remote execution service
    #[command(name = "run")]
    Run {
        /// File containing the snippet to execute
        #[arg(value_name = "FILE")]
        snippet: PathBuf,

        /// Language to execute as (default from config)
        #[arg(long)]
        language: Option<String>,

        /// Language version (default from config)
        #[arg(long)]
        version: Option<String>,
    },

    /// Resolve the repository name a description would produce
    #[command(name = "name")]
    Name {
        /// Natural-language description of the project
        description: String,

        /// Explicit repository name (sanitized before use)
        #[arg(long)]
        explicit: Option<String>,
    },
}
