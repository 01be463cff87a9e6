//! model::traits
//!
//! TextModel trait definition for generative-text services.
//!
//! # Design
//!
//! The `TextModel` trait is async because completions involve network I/O.
//! All methods return `Result` to handle API errors gracefully.

use async_trait::async_trait;
use thiserror::Error;

/// Errors from generative-text operations.
#[derive(Debug, Clone, Error)]
pub enum ModelError {
    /// Authentication is required but not available.
    #[error("authentication required")]
    AuthRequired,

    /// Authentication failed (invalid key, expired, insufficient quota).
    #[error("authentication failed: {0}")]
    AuthFailed(String),

    /// Rate limit exceeded.
    #[error("rate limited")]
    RateLimited,

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

    /// The service responded without a usable completion.
    #[error("empty completion")]
    EmptyCompletion,
}

/// The TextModel trait for generative-text services.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` to allow use across async tasks.
///
/// # Example
///
/// ```
/// use scaffold::model::{TextModel, ModelError};
/// use scaffold::model::mock::MockModel;
///
/// # tokio_test::block_on(async {
/// let model = MockModel::returning("{\"files\":[]}");
/// let text = model.complete("describe a project", 256).await.unwrap();
/// assert_eq!(text, "{\"files\":[]}");
/// # });
/// ```
#[async_trait]
pub trait TextModel: Send + Sync {
    /// Get the model backend name (e.g., "openai", "mock").
    fn name(&self) -> &'static str;

    /// Request a single completion for `prompt`.
    ///
    /// # Arguments
    ///
    /// * `prompt` - The full prompt text
    /// * `max_tokens` - Response-length ceiling
    ///
    /// # Returns
    ///
    /// The raw text of the first completion.
    ///
    /// # Errors
    ///
    /// - `AuthRequired` / `AuthFailed` for credential problems
    /// - `RateLimited` when the service throttles the caller
    /// - `EmptyCompletion` if the service returns no usable text
    async fn complete(&self, prompt: &str, max_tokens: u32) -> Result<String, ModelError>;
}
