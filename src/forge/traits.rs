//! forge::traits
//!
//! Forge trait definition for interacting with remote hosting services.
//!
//! # Design
//!
//! The `Forge` trait is async because forge operations involve network I/O.
//! All methods return `Result` to handle API errors gracefully. Forge
//! failures abort the pipeline; nothing retries behind the caller's back.

use async_trait::async_trait;
use thiserror::Error;

use crate::core::types::RepoName;

/// Errors from forge operations.
///
/// These error types map to common failure modes when interacting
/// with remote hosting services like GitHub.
#[derive(Debug, Clone, Error)]
pub enum ForgeError {
    /// Authentication is required but not available.
    #[error("authentication required")]
    AuthRequired,

    /// Authentication failed (invalid token, expired, insufficient permissions).
    #[error("authentication failed: {0}")]
    AuthFailed(String),

    /// The requested resource was not found.
    #[error("not found: {0}")]
    NotFound(String),

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
}

/// The authenticated account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    /// Account login (user or organization name)
    pub login: String,
}

/// Request to create a repository.
#[derive(Debug, Clone)]
pub struct CreateRepoRequest {
    /// Repository name
    pub name: RepoName,
    /// Repository description
    pub description: String,
    /// Create as private
    pub private: bool,
}

/// Repository information returned from the forge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    /// Repository name as the forge recorded it
    pub name: String,
    /// Clone address (HTTPS)
    pub clone_url: String,
    /// Web URL for viewing
    pub html_url: String,
}

/// The Forge trait for interacting with remote hosting services.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` to allow use across async tasks.
///
/// # Error Handling
///
/// All methods return `Result<T, ForgeError>`. Callers should handle:
/// - `AuthRequired` / `AuthFailed`: Surface a credential problem
/// - `NotFound`: Resource doesn't exist
/// - `RateLimited`: Back off and retry (caller's responsibility)
/// - `ApiError`: Display the error message
/// - `NetworkError`: Check connectivity
#[async_trait]
pub trait Forge: Send + Sync {
    /// Get the forge name (e.g., "github").
    fn name(&self) -> &'static str;

    /// Get the authenticated account.
    ///
    /// # Errors
    ///
    /// - `AuthRequired` if no credential is configured
    /// - `AuthFailed` if the credential is invalid
    async fn viewer(&self) -> Result<Account, ForgeError>;

    /// Check whether `owner/name` already exists.
    ///
    /// # Returns
    ///
    /// `true` if the repository exists, `false` if the probe returned
    /// not-found. Other failures propagate as errors.
    async fn repo_exists(&self, owner: &str, name: &RepoName) -> Result<bool, ForgeError>;

    /// Create a repository under the authenticated account.
    ///
    /// # Errors
    ///
    /// - `ApiError` with status 422 if the name is already taken
    /// - `AuthFailed` if the credential lacks permission
    async fn create_repo(&self, request: CreateRepoRequest) -> Result<Repository, ForgeError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forge_error_display() {
        assert_eq!(
            format!("{}", ForgeError::AuthRequired),
            "authentication required"
        );
        assert_eq!(
            format!("{}", ForgeError::AuthFailed("expired token".into())),
            "authentication failed: expired token"
        );
        assert_eq!(
            format!("{}", ForgeError::NotFound("repo".into())),
            "not found: repo"
        );
        assert_eq!(format!("{}", ForgeError::RateLimited), "rate limited");
        assert_eq!(
            format!(
                "{}",
                ForgeError::ApiError {
                    status: 422,
                    message: "name already exists".into()
                }
            ),
            "API error: 422 - name already exists"
        );
        assert_eq!(
            format!("{}", ForgeError::NetworkError("connection refused".into())),
            "network error: connection refused"
        );
    }
}
