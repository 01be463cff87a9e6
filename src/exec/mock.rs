//! exec::mock
//!
//! Mock code runner for deterministic testing.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::{CodeRunner, ExecError, ExecutionOutput, SourceFile};

/// Mock runner for testing.
///
/// Thread-safe via internal `Arc<Mutex<...>>` wrapping.
#[derive(Debug, Clone)]
pub struct MockRunner {
    inner: Arc<Mutex<MockRunnerInner>>,
}

#[derive(Debug)]
struct MockRunnerInner {
    /// Output returned on success.
    output: ExecutionOutput,
    /// Error returned instead, if configured.
    fail_with: Option<ExecError>,
    /// Recorded (language, version, file names) triples.
    invocations: Vec<(String, String, Vec<String>)>,
}

impl MockRunner {
    /// Create a mock that returns the given streams for every run.
    pub fn returning(stdout: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(MockRunnerInner {
                output: ExecutionOutput {
                    stdout: stdout.into(),
                    stderr: stderr.into(),
                },
                fail_with: None,
                invocations: Vec::new(),
            })),
        }
    }

    /// Create a mock that fails every run with `error`.
    pub fn failing(error: ExecError) -> Self {
        Self {
            inner: Arc::new(Mutex::new(MockRunnerInner {
                output: ExecutionOutput {
                    stdout: String::new(),
                    stderr: String::new(),
                },
                fail_with: Some(error),
                invocations: Vec::new(),
            })),
        }
    }

    /// Get all recorded invocations.
    pub fn invocations(&self) -> Vec<(String, String, Vec<String>)> {
        let inner = self.inner.lock().unwrap();
        inner.invocations.clone()
    }
}

#[async_trait]
impl CodeRunner for MockRunner {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn run(
        &self,
        language: &str,
        version: &str,
        files: &[SourceFile],
    ) -> Result<ExecutionOutput, ExecError> {
        let mut inner = self.inner.lock().unwrap();
        inner.invocations.push((
            language.to_string(),
            version.to_string(),
            files.iter().map(|f| f.name.clone()).collect(),
        ));

        if let Some(error) = &inner.fail_with {
            return Err(error.clone());
        }
        Ok(inner.output.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn returning_yields_output() {
        let runner = MockRunner::returning("out", "err");
        let output = runner
            .run("python3", "3.10.0", &[SourceFile::new("main.py", "x")])
            .await
            .unwrap();
        assert_eq!(output.stdout, "out");
        assert_eq!(output.stderr, "err");
    }

    #[tokio::test]
    async fn failing_yields_error() {
        let runner = MockRunner::failing(ExecError::MalformedResponse);
        let result = runner.run("python3", "3.10.0", &[]).await;
        assert!(matches!(result, Err(ExecError::MalformedResponse)));
    }

    #[tokio::test]
    async fn invocations_recorded() {
        let runner = MockRunner::returning("", "");
        runner
            .run("python3", "3.10.0", &[SourceFile::new("main.py", "x")])
            .await
            .unwrap();

        let calls = runner.invocations();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "python3");
        assert_eq!(calls[0].2, vec!["main.py"]);
    }
}
