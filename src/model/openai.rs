//! model::openai
//!
//! OpenAI-compatible chat-completions implementation of `TextModel`.
//!
//! # Design
//!
//! Talks to the `/chat/completions` endpoint of an OpenAI-compatible API.
//! The base URL is configurable so tests can point at a local HTTP fixture
//! and deployments can use compatible gateways.
//!
//! # Rate Limiting
//!
//! 429 responses map to `ModelError::RateLimited`. No automatic retry is
//! performed; the pipeline fails fast and surfaces the error.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, USER_AGENT};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use super::traits::{ModelError, TextModel};

/// User-Agent header value for API requests.
const USER_AGENT_VALUE: &str = "scaffold-cli";

/// OpenAI-compatible text model client.
pub struct OpenAiModel {
    /// HTTP client for making requests
    client: Client,
    /// API key
    api_key: String,
    /// Model identifier (e.g., "gpt-4o-mini")
    model: String,
    /// API base URL (e.g., "https://api.openai.com/v1")
    api_base: String,
}

// Custom Debug to avoid exposing the api key
impl std::fmt::Debug for OpenAiModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiModel")
            .field("model", &self.model)
            .field("api_base", &self.api_base)
            .finish()
    }
}

impl OpenAiModel {
    /// Create a new client.
    ///
    /// # Arguments
    ///
    /// * `api_key` - Bearer credential for the service
    /// * `model` - Model identifier to request completions from
    /// * `api_base` - API base URL, without the `/chat/completions` suffix
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        api_base: impl Into<String>,
    ) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model: model.into(),
            api_base: api_base.into(),
        }
    }

    /// Build common headers for API requests.
    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", self.api_key))
                .expect("invalid key format"),
        );
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));
        headers
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct ApiErrorResponse {
    error: Option<ApiErrorBody>,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    message: String,
}

#[async_trait]
impl TextModel for OpenAiModel {
    fn name(&self) -> &'static str {
        "openai"
    }

    async fn complete(&self, prompt: &str, max_tokens: u32) -> Result<String, ModelError> {
        let body = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            max_tokens,
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.api_base))
            .headers(self.headers())
            .json(&body)
            .send()
            .await
            .map_err(|e| ModelError::NetworkError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ApiErrorResponse>()
                .await
                .ok()
                .and_then(|e| e.error)
                .map(|e| e.message)
                .unwrap_or_else(|| "unknown error".to_string());

            return Err(match status {
                StatusCode::UNAUTHORIZED => {
                    ModelError::AuthFailed("invalid or expired API key".into())
                }
                StatusCode::FORBIDDEN => ModelError::AuthFailed(message),
                StatusCode::TOO_MANY_REQUESTS => ModelError::RateLimited,
                _ => ModelError::ApiError {
                    status: status.as_u16(),
                    message,
                },
            });
        }

        let parsed: ChatResponse = response.json().await.map_err(|e| ModelError::ApiError {
            status: status.as_u16(),
            message: format!("failed to parse response: {e}"),
        })?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.is_empty())
            .ok_or(ModelError::EmptyCompletion)
    }
}
