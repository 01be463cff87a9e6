//! exec::piston
//!
//! Piston-compatible implementation of `CodeRunner`.
//!
//! # Design
//!
//! Talks to the `/execute` endpoint of a Piston-compatible API. The base
//! URL is configurable; the default is the public emkc.org instance.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{CodeRunner, ExecError, ExecutionOutput, SourceFile};

/// Piston-compatible execution client.
#[derive(Debug)]
pub struct PistonRunner {
    /// HTTP client for making requests
    client: Client,
    /// API base URL (e.g., "https://emkc.org/api/v2/piston")
    api_base: String,
}

impl PistonRunner {
    /// Create a new client against `api_base`.
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_base: api_base.into(),
        }
    }
}

#[derive(Serialize)]
struct ExecuteRequest<'a> {
    language: &'a str,
    version: &'a str,
    files: &'a [SourceFile],
}

#[derive(Deserialize)]
struct ExecuteResponse {
    run: Option<RunSection>,
}

#[derive(Deserialize)]
struct RunSection {
    #[serde(default)]
    stdout: String,
    #[serde(default)]
    stderr: String,
}

#[async_trait]
impl CodeRunner for PistonRunner {
    fn name(&self) -> &'static str {
        "piston"
    }

    async fn run(
        &self,
        language: &str,
        version: &str,
        files: &[SourceFile],
    ) -> Result<ExecutionOutput, ExecError> {
        let body = ExecuteRequest {
            language,
            version,
            files,
        };

        let response = self
            .client
            .post(format!("{}/execute", self.api_base))
            .json(&body)
            .send()
            .await
            .map_err(|e| ExecError::NetworkError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ExecError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: ExecuteResponse = response.json().await.map_err(|e| ExecError::ApiError {
            status: status.as_u16(),
            message: format!("failed to parse response: {e}"),
        })?;

        let run = parsed.run.ok_or(ExecError::MalformedResponse)?;
        Ok(ExecutionOutput {
            stdout: run.stdout,
            stderr: run.stderr,
        })
    }
}
