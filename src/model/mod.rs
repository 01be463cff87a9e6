//! model
//!
//! Abstraction for generative-text services.
//!
//! # Architecture
//!
//! The `TextModel` trait defines the interface for requesting completions.
//! The pipeline never talks to a concrete service directly; it builds a
//! structure prompt via [`structure_prompt`] and sends it through the trait.
//!
//! # Modules
//!
//! - `traits`: Core `TextModel` trait and error types
//! - [`openai`]: OpenAI-compatible chat-completions implementation
//! - [`mock`]: Mock implementation for deterministic testing
//!
//! # Boundary risk
//!
//! The service is instructed to return strict JSON, but nothing enforces
//! it. The raw completion is returned as-is (trimmed); decoding and its
//! failure mode live in [`crate::core::manifest`], where the error is
//! explicit rather than masked here.

pub mod mock;
pub mod openai;
mod prompt;
mod traits;

pub use prompt::structure_prompt;
pub use traits::*;

/// Request the project structure for a snippet and description.
///
/// Builds the structure prompt, sends it through the model with the given
/// response-length ceiling, and returns the raw completion text trimmed of
/// leading and trailing whitespace. Service errors propagate untouched.
pub async fn request_structure(
    model: &dyn TextModel,
    code_snippet: &str,
    description: &str,
    max_tokens: u32,
) -> Result<String, ModelError> {
    let prompt = structure_prompt(code_snippet, description);
    tracing::debug!(model = model.name(), max_tokens, "requesting project structure");
    let completion = model.complete(&prompt, max_tokens).await?;
    Ok(completion.trim().to_string())
}
