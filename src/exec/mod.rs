//! exec
//!
//! Abstraction for remote code-execution services.
//!
//! # Architecture
//!
//! The `CodeRunner` trait defines the interface for executing a snippet
//! remotely: source files plus a language/version in, captured
//! stdout/stderr out.
//!
//! # Modules
//!
//! - [`piston`]: Piston-compatible implementation
//! - [`mock`]: Mock implementation for deterministic testing
//!
//! A response without a usable `run` section is a typed error, never empty
//! output; silently returning empty strings would be indistinguishable
//! from a program that printed nothing.

pub mod mock;
pub mod piston;

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

/// Errors from code-execution operations.
#[derive(Debug, Clone, Error)]
pub enum ExecError {
    /// API returned an error.
    #[error("API error: {status} - {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Error message from the API
        message: String,
    },

    /// Network or connection error.
    #[error("network error: {0}")]
    NetworkError(String),

    /// The response carried no `run` section.
    #[error("execution service returned no run result")]
    MalformedResponse,
}

/// A source file submitted for execution.
#[derive(Debug, Clone, Serialize)]
pub struct SourceFile {
    pub name: String,
    pub content: String,
}

impl SourceFile {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

/// Captured output of a remote execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionOutput {
    pub stdout: String,
    pub stderr: String,
}

impl ExecutionOutput {
    /// Render the output the way the caller-facing surface presents it:
    /// a combined STDOUT/STDERR block when stderr is non-empty, the plain
    /// stdout otherwise, and a fixed notice when both are empty.
    pub fn render(&self) -> String {
        if !self.stderr.is_empty() {
            format!("STDOUT:\n{}\n\nSTDERR:\n{}", self.stdout, self.stderr)
        } else if self.stdout.is_empty() {
            "Code executed successfully (no output)".to_string()
        } else {
            self.stdout.clone()
        }
    }
}

/// The CodeRunner trait for remote execution services.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` to allow use across async tasks.
#[async_trait]
pub trait CodeRunner: Send + Sync {
    /// Get the runner backend name (e.g., "piston", "mock").
    fn name(&self) -> &'static str;

    /// Execute `files` under the given language and version.
    ///
    /// # Errors
    ///
    /// - `ApiError` / `NetworkError` for service failures
    /// - `MalformedResponse` if the response lacks a `run` section
    async fn run(
        &self,
        language: &str,
        version: &str,
        files: &[SourceFile],
    ) -> Result<ExecutionOutput, ExecError>;
}
