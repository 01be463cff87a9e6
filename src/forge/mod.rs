//! forge
//!
//! Abstraction for remote hosting services (GitHub v1).
//!
//! # Architecture
//!
//! The `Forge` trait defines the interface for account lookup, repository
//! existence probes and repository creation. The pipeline's reconciler
//! depends only on the trait; pushing commits is performed by the
//! [`crate::git`] publish driver, not through the hosting API.
//!
//! # Modules
//!
//! - `traits`: Core `Forge` trait and request/response types
//! - [`github`]: GitHub implementation using the REST API
//! - [`mock`]: Mock implementation for deterministic testing
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
//! let name = RepoName::new("todo-app").unwrap();
//!
//! assert!(!forge.repo_exists("mock-user", &name).await.unwrap());
//!
//! let repo = forge.create_repo(CreateRepoRequest {
//!     name: name.clone(),
//!     description: "A todo list".to_string(),
//!     private: false,
//! }).await.unwrap();
//!
//! assert_eq!(repo.name, "todo-app");
//! assert!(forge.repo_exists("mock-user", &name).await.unwrap());
//! # });
//! ```

pub mod github;
pub mod mock;
mod traits;

pub use traits::*;
