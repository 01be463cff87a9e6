//! git
//!
//! Single interface for all Git operations.
//!
//! # Architecture
//!
//! This module is the **only doorway** to Git. All staging-tree commits and
//! pushes flow through [`Publisher`]; no other module imports `git2`. We use
//! the `git2` crate exclusively (no shelling out to the git CLI).
//!
//! # Responsibilities
//!
//! - Turning a staging directory into a repository checkout
//! - Committer identity and remote configuration
//! - Stage-all, dirty detection, commit, branch normalization, push

mod publisher;

pub use publisher::{PublishError, PublishOutcome, PublishStep, Publisher};
