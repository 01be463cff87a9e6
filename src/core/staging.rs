//! core::staging
//!
//! Per-invocation isolated staging directories.
//!
//! # Design
//!
//! Each pipeline invocation assembles its repository under a uniquely-named
//! directory keyed by a generated request id. Concurrent invocations never
//! share a working tree, so file writes and git state cannot race across
//! requests. The arena is removed when dropped, after publish or failure
//! alike.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use uuid::Uuid;

/// Errors from staging operations.
#[derive(Debug, Error)]
pub enum StagingError {
    #[error("failed to create staging directory '{path}': {source}")]
    Create {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// An isolated staging directory owned by one pipeline invocation.
///
/// The directory and everything under it are deleted on drop.
#[derive(Debug)]
pub struct StagingArena {
    path: PathBuf,
}

impl StagingArena {
    /// Create a fresh arena under `root`, which is created if missing.
    pub fn create(root: &Path) -> Result<Self, StagingError> {
        let path = root.join(format!("req-{}", Uuid::new_v4()));
        fs::create_dir_all(&path).map_err(|source| StagingError::Create {
            path: path.clone(),
            source,
        })?;
        Ok(Self { path })
    }

    /// The arena's directory.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for StagingArena {
    fn drop(&mut self) {
        // Best effort; a leaked directory under the staging root is harmless.
        let _ = fs::remove_dir_all(&self.path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn create_makes_unique_directories() {
        let root = TempDir::new().unwrap();
        let a = StagingArena::create(root.path()).unwrap();
        let b = StagingArena::create(root.path()).unwrap();

        assert!(a.path().is_dir());
        assert!(b.path().is_dir());
        assert_ne!(a.path(), b.path());
        assert!(a.path().starts_with(root.path()));
    }

    #[test]
    fn drop_removes_directory() {
        let root = TempDir::new().unwrap();
        let path = {
            let arena = StagingArena::create(root.path()).unwrap();
            fs::write(arena.path().join("file.txt"), "contents").unwrap();
            arena.path().to_path_buf()
        };
        assert!(!path.exists());
    }

    #[test]
    fn create_builds_missing_root() {
        let root = TempDir::new().unwrap();
        let nested = root.path().join("deep/staging");
        let arena = StagingArena::create(&nested).unwrap();
        assert!(arena.path().is_dir());
    }
}
