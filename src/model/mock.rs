//! model::mock
//!
//! Mock text model for deterministic testing.
//!
//! # Example
//!
//! ```
//! use scaffold::model::TextModel;
//! use scaffold::model::mock::MockModel;
//!
//! # tokio_test::block_on(async {
//! let model = MockModel::returning("{\"files\":[]}");
//! let text = model.complete("any prompt", 128).await.unwrap();
//! assert_eq!(text, "{\"files\":[]}");
//! assert_eq!(model.prompts().len(), 1);
//! # });
//! ```

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::traits::{ModelError, TextModel};

/// Mock text model for testing.
///
/// Thread-safe via internal `Arc<Mutex<...>>` wrapping.
#[derive(Debug, Clone)]
pub struct MockModel {
    inner: Arc<Mutex<MockModelInner>>,
}

#[derive(Debug)]
struct MockModelInner {
    /// Completion returned on success.
    completion: String,
    /// Error returned instead, if configured.
    fail_with: Option<ModelError>,
    /// Recorded prompts for verification.
    prompts: Vec<String>,
}

impl MockModel {
    /// Create a mock that returns `completion` for every prompt.
    pub fn returning(completion: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(MockModelInner {
                completion: completion.into(),
                fail_with: None,
                prompts: Vec::new(),
            })),
        }
    }

    /// Create a mock that fails every request with `error`.
    pub fn failing(error: ModelError) -> Self {
        Self {
            inner: Arc::new(Mutex::new(MockModelInner {
                completion: String::new(),
                fail_with: Some(error),
                prompts: Vec::new(),
            })),
        }
    }

    /// Get all prompts the mock has received.
    pub fn prompts(&self) -> Vec<String> {
        let inner = self.inner.lock().unwrap();
        inner.prompts.clone()
    }
}

#[async_trait]
impl TextModel for MockModel {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn complete(&self, prompt: &str, _max_tokens: u32) -> Result<String, ModelError> {
        let mut inner = self.inner.lock().unwrap();
        inner.prompts.push(prompt.to_string());

        if let Some(error) = &inner.fail_with {
            return Err(error.clone());
        }
        Ok(inner.completion.clone())
    }
}
