//! forge::github
//!
//! GitHub forge implementation using the REST API.
//!
//! # Design
//!
//! This module implements the `Forge` trait for GitHub:
//! - `GET /user` for the authenticated account
//! - `GET /repos/{owner}/{repo}` for existence probes (404 means absent)
//! - `POST /user/repos` for creation
//!
//! # Authentication
//!
//! A single static token from configuration, sent as a Bearer credential.
//!
//! # Rate Limiting
//!
//! GitHub has rate limits. This implementation returns
//! `ForgeError::RateLimited` when limits are hit and does not retry;
//! the pipeline fails fast.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use reqwest::{Client, Response, StatusCode};
use serde::{Deserialize, Serialize};

use super::traits::{Account, CreateRepoRequest, Forge, ForgeError, Repository};
use crate::core::types::RepoName;

/// Default GitHub API base URL.
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// User-Agent header value for API requests.
const USER_AGENT_VALUE: &str = "scaffold-cli";

/// GitHub forge implementation.
pub struct GitHubForge {
    /// HTTP client for making requests
    client: Client,
    /// API token
    token: String,
    /// API base URL (configurable for GitHub Enterprise and tests)
    api_base: String,
}

// Custom Debug to avoid exposing the token
impl std::fmt::Debug for GitHubForge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHubForge")
            .field("api_base", &self.api_base)
            .finish()
    }
}

impl GitHubForge {
    /// Create a new GitHub forge against the public API.
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_api_base(token, DEFAULT_API_BASE)
    }

    /// Create a GitHub forge with a custom API base URL.
    ///
    /// Use this for GitHub Enterprise installations or HTTP test fixtures.
    pub fn with_api_base(token: impl Into<String>, api_base: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            token: token.into(),
            api_base: api_base.into(),
        }
    }

    /// Build common headers for API requests.
    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", self.token))
                .expect("invalid token format"),
        );
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));
        headers.insert(
            "X-GitHub-Api-Version",
            HeaderValue::from_static("2022-11-28"),
        );
        headers
    }

    /// Handle API response, mapping errors appropriately.
    async fn handle_response<T: for<'de> Deserialize<'de>>(
        &self,
        response: Response,
    ) -> Result<T, ForgeError> {
        let status = response.status();

        if status.is_success() {
            response.json().await.map_err(|e| ForgeError::ApiError {
                status: status.as_u16(),
                message: format!("failed to parse response: {e}"),
            })
        } else {
            Err(Self::error_for(response, status).await)
        }
    }

    /// Map an error response from the API to a `ForgeError`.
    async fn error_for(response: Response, status: StatusCode) -> ForgeError {
        let message = match response.json::<GitHubErrorResponse>().await {
            Ok(err) => err.message,
            Err(_) => "unknown error".to_string(),
        };

        match status {
            StatusCode::UNAUTHORIZED => ForgeError::AuthFailed("invalid or expired token".into()),
            StatusCode::FORBIDDEN => ForgeError::AuthFailed(format!("permission denied: {message}")),
            StatusCode::NOT_FOUND => ForgeError::NotFound(message),
            StatusCode::TOO_MANY_REQUESTS => ForgeError::RateLimited,
            _ if status.is_server_error() => ForgeError::ApiError {
                status: status.as_u16(),
                message: format!("GitHub server error: {message}"),
            },
            _ => ForgeError::ApiError {
                status: status.as_u16(),
                message,
            },
        }
    }
}

#[derive(Deserialize)]
struct GitHubErrorResponse {
    #[serde(default = "unknown_message")]
    message: String,
}

fn unknown_message() -> String {
    "unknown error".to_string()
}

#[derive(Deserialize)]
struct UserResponse {
    login: String,
}

#[derive(Serialize)]
struct CreateRepoBody<'a> {
    name: &'a str,
    description: &'a str,
    private: bool,
}

#[derive(Deserialize)]
struct RepoResponse {
    name: String,
    clone_url: String,
    html_url: String,
}

#[async_trait::async_trait]
impl Forge for GitHubForge {
    fn name(&self) -> &'static str {
        "github"
    }

    async fn viewer(&self) -> Result<Account, ForgeError> {
        let response = self
            .client
            .get(format!("{}/user", self.api_base))
            .headers(self.headers())
            .send()
            .await
            .map_err(|e| ForgeError::NetworkError(e.to_string()))?;

        let user: UserResponse = self.handle_response(response).await?;
        Ok(Account { login: user.login })
    }

    async fn repo_exists(&self, owner: &str, name: &RepoName) -> Result<bool, ForgeError> {
        let response = self
            .client
            .get(format!("{}/repos/{}/{}", self.api_base, owner, name))
            .headers(self.headers())
            .send()
            .await
            .map_err(|e| ForgeError::NetworkError(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(true);
        }
        if status == StatusCode::NOT_FOUND {
            return Ok(false);
        }
        Err(Self::error_for(response, status).await)
    }

    async fn create_repo(&self, request: CreateRepoRequest) -> Result<Repository, ForgeError> {
        let body = CreateRepoBody {
            name: request.name.as_str(),
            description: &request.description,
            private: request.private,
        };

        let response = self
            .client
            .post(format!("{}/user/repos", self.api_base))
            .headers(self.headers())
            .json(&body)
            .send()
            .await
            .map_err(|e| ForgeError::NetworkError(e.to_string()))?;

        let repo: RepoResponse = self.handle_response(response).await?;
        tracing::info!(repo = %repo.name, url = %repo.html_url, "created repository");

        Ok(Repository {
            name: repo.name,
            clone_url: repo.clone_url,
            html_url: repo.html_url,
        })
    }
}
