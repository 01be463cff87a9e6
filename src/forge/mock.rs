//! forge::mock
//!
//! Mock forge implementation for deterministic testing.
//!
//! # Design
//!
//! The mock forge provides a deterministic implementation of the `Forge`
//! trait. It stores repositories in memory and allows configuring failure
//! scenarios and a local clone root so publish tests can push to bare
//! repositories on disk.
//!
//! # Example
//!
//! ```
//! use scaffold::core::types::RepoName;
//! use scaffold::forge::{CreateRepoRequest, Forge};
//! use scaffold::forge::mock::MockForge;
//!
//! # tokio_test::block_on(async {
//! let forge = MockForge::new();
//!
//! let repo = forge.create_repo(CreateRepoRequest {
//!     name: RepoName::new("demo").unwrap(),
//!     description: "demo repo".to_string(),
//!     private: false,
//! }).await.unwrap();
//!
//! assert_eq!(repo.clone_url, "https://github.com/mock-user/demo.git");
//! # });
//! ```

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::traits::{Account, CreateRepoRequest, Forge, ForgeError, Repository};
use crate::core::types::RepoName;

/// Default login of the mock account.
const MOCK_LOGIN: &str = "mock-user";

/// Mock forge for testing.
///
/// Thread-safe via internal `Arc<Mutex<...>>` wrapping.
#[derive(Debug, Clone)]
pub struct MockForge {
    inner: Arc<Mutex<MockForgeInner>>,
}

#[derive(Debug)]
struct MockForgeInner {
    /// Stored repositories by name.
    repos: HashMap<String, Repository>,
    /// Method to fail on (for testing error paths).
    fail_on: Option<FailOn>,
    /// Recorded operations for verification.
    operations: Vec<MockOperation>,
    /// When set, clone URLs are paths under this directory instead of
    /// github.com URLs, so tests can push locally.
    clone_root: Option<PathBuf>,
}

/// Configuration for which operation should fail.
#[derive(Debug, Clone)]
pub enum FailOn {
    /// Fail viewer with the given error.
    Viewer(ForgeError),
    /// Fail repo_exists with the given error.
    RepoExists(ForgeError),
    /// Fail create_repo with the given error.
    CreateRepo(ForgeError),
}

/// Recorded operation for test verification.
#[derive(Debug, Clone)]
pub enum MockOperation {
    Viewer,
    RepoExists { owner: String, name: String },
    CreateRepo { name: String, description: String },
}

impl MockForge {
    /// Create a new empty mock forge.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(MockForgeInner {
                repos: HashMap::new(),
                fail_on: None,
                operations: Vec::new(),
                clone_root: None,
            })),
        }
    }

    /// Create a mock forge with pre-existing repository names.
    pub fn with_existing_repos(names: &[&str]) -> Self {
        let forge = Self::new();
        {
            let mut inner = forge.inner.lock().unwrap();
            for name in names {
                inner.repos.insert(
                    name.to_string(),
                    Repository {
                        name: name.to_string(),
                        clone_url: format!("https://github.com/{MOCK_LOGIN}/{name}.git"),
                        html_url: format!("https://github.com/{MOCK_LOGIN}/{name}"),
                    },
                );
            }
        }
        forge
    }

    /// Configure the mock to fail on a specific operation.
    pub fn fail_on(self, fail_on: FailOn) -> Self {
        {
            let mut inner = self.inner.lock().unwrap();
            inner.fail_on = Some(fail_on);
        }
        self
    }

    /// Make created repositories resolve to `<root>/<name>.git` so pushes
    /// land in local bare repositories.
    pub fn with_clone_root(self, root: impl Into<PathBuf>) -> Self {
        {
            let mut inner = self.inner.lock().unwrap();
            inner.clone_root = Some(root.into());
        }
        self
    }

    /// Get all recorded operations.
    pub fn operations(&self) -> Vec<MockOperation> {
        let inner = self.inner.lock().unwrap();
        inner.operations.clone()
    }

    /// Get the count of stored repositories.
    pub fn repo_count(&self) -> usize {
        let inner = self.inner.lock().unwrap();
        inner.repos.len()
    }

    /// Record an operation.
    fn record(&self, op: MockOperation) {
        let mut inner = self.inner.lock().unwrap();
        inner.operations.push(op);
    }
}

impl Default for MockForge {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Forge for MockForge {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn viewer(&self) -> Result<Account, ForgeError> {
        self.record(MockOperation::Viewer);

        let inner = self.inner.lock().unwrap();
        if let Some(FailOn::Viewer(e)) = &inner.fail_on {
            return Err(e.clone());
        }

        Ok(Account {
            login: MOCK_LOGIN.to_string(),
        })
    }

    async fn repo_exists(&self, owner: &str, name: &RepoName) -> Result<bool, ForgeError> {
        self.record(MockOperation::RepoExists {
            owner: owner.to_string(),
            name: name.to_string(),
        });

        let inner = self.inner.lock().unwrap();
        if let Some(FailOn::RepoExists(e)) = &inner.fail_on {
            return Err(e.clone());
        }

        Ok(inner.repos.contains_key(name.as_str()))
    }

    async fn create_repo(&self, request: CreateRepoRequest) -> Result<Repository, ForgeError> {
        self.record(MockOperation::CreateRepo {
            name: request.name.to_string(),
            description: request.description.clone(),
        });

        let mut inner = self.inner.lock().unwrap();
        if let Some(FailOn::CreateRepo(e)) = &inner.fail_on {
            return Err(e.clone());
        }

        if inner.repos.contains_key(request.name.as_str()) {
            return Err(ForgeError::ApiError {
                status: 422,
                message: "name already exists on this account".into(),
            });
        }

        let name = request.name.to_string();
        let repo = match &inner.clone_root {
            Some(root) => Repository {
                name: name.clone(),
                clone_url: root.join(format!("{name}.git")).display().to_string(),
                html_url: format!("https://github.com/{MOCK_LOGIN}/{name}"),
            },
            None => Repository {
                name: name.clone(),
                clone_url: format!("https://github.com/{MOCK_LOGIN}/{name}.git"),
                html_url: format!("https://github.com/{MOCK_LOGIN}/{name}"),
            },
        };

        inner.repos.insert(name, repo.clone());
        Ok(repo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(s: &str) -> RepoName {
        RepoName::new(s).unwrap()
    }

    #[tokio::test]
    async fn viewer_returns_mock_login() {
        let forge = MockForge::new();
        let account = forge.viewer().await.unwrap();
        assert_eq!(account.login, "mock-user");
    }

    #[tokio::test]
    async fn repo_exists_reflects_creations() {
        let forge = MockForge::new();
        assert!(!forge.repo_exists("mock-user", &name("demo")).await.unwrap());

        forge
            .create_repo(CreateRepoRequest {
                name: name("demo"),
                description: String::new(),
                private: false,
            })
            .await
            .unwrap();

        assert!(forge.repo_exists("mock-user", &name("demo")).await.unwrap());
    }

    #[tokio::test]
    async fn with_existing_repos_preloads() {
        let forge = MockForge::with_existing_repos(&["taken"]);
        assert!(forge.repo_exists("mock-user", &name("taken")).await.unwrap());
        assert_eq!(forge.repo_count(), 1);
    }

    #[tokio::test]
    async fn duplicate_create_fails_with_422() {
        let forge = MockForge::with_existing_repos(&["taken"]);
        let result = forge
            .create_repo(CreateRepoRequest {
                name: name("taken"),
                description: String::new(),
                private: false,
            })
            .await;

        assert!(
            matches!(result, Err(ForgeError::ApiError { status: 422, .. })),
            "got {result:?}"
        );
    }

    #[tokio::test]
    async fn fail_on_create_repo() {
        let forge = MockForge::new().fail_on(FailOn::CreateRepo(ForgeError::RateLimited));
        let result = forge
            .create_repo(CreateRepoRequest {
                name: name("demo"),
                description: String::new(),
                private: false,
            })
            .await;

        assert!(matches!(result, Err(ForgeError::RateLimited)));
    }

    #[tokio::test]
    async fn clone_root_rewrites_clone_url() {
        let forge = MockForge::new().with_clone_root("/tmp/remotes");
        let repo = forge
            .create_repo(CreateRepoRequest {
                name: name("demo"),
                description: String::new(),
                private: false,
            })
            .await
            .unwrap();

        assert_eq!(repo.clone_url, "/tmp/remotes/demo.git");
    }

    #[tokio::test]
    async fn operations_recorded() {
        let forge = MockForge::new();
        forge.viewer().await.unwrap();
        forge.repo_exists("mock-user", &name("demo")).await.unwrap();

        let ops = forge.operations();
        assert_eq!(ops.len(), 2);
        assert!(matches!(ops[0], MockOperation::Viewer));
        assert!(matches!(ops[1], MockOperation::RepoExists { .. }));
    }
}
