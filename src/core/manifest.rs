//! core::manifest
//!
//! File manifest decoding, validation and materialization.
//!
//! # Design
//!
//! The generative-text service is asked for a JSON document of the shape
//! `{ "files": [ { "path": ..., "content": ... }, ... ] }`, but nothing
//! guarantees it complies. The response is therefore treated as adversarial
//! input: [`decode`] validates the document shape, and [`materialize`]
//! validates every path against the staging directory before the first
//! write. A manifest with any escaping path writes nothing.
//!
//! Decode failure is terminal for the pipeline; the raw text is carried in
//! the error for diagnosis. There is no partial recovery or retry.

use std::fs;
use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from manifest handling.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// The raw text did not decode to the expected document shape.
    #[error("response is not a valid file manifest: {message}")]
    Decode {
        /// Decoder diagnostic.
        message: String,
        /// The raw text, kept for diagnosis.
        raw: String,
    },

    /// The manifest decoded but declares no files.
    #[error("manifest contains no files")]
    Empty,

    /// A declared path is empty, absolute, or escapes the staging directory.
    #[error("manifest path escapes the staging directory: '{path}'")]
    PathEscape {
        /// The offending path as declared.
        path: String,
    },

    /// Filesystem failure while writing a file.
    #[error("failed to write '{path}': {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// One declared file: a staging-relative path and its full content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestFile {
    pub path: String,
    pub content: String,
}

/// An ordered set of files to materialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileManifest {
    pub files: Vec<ManifestFile>,
}

/// Decode raw model output into a validated manifest.
///
/// # Errors
///
/// - [`ManifestError::Decode`] if the text is not JSON of the expected
///   shape (required `files` array, string `path`/`content` fields)
/// - [`ManifestError::Empty`] if the `files` array has no entries
pub fn decode(raw: &str) -> Result<FileManifest, ManifestError> {
    let manifest: FileManifest =
        serde_json::from_str(raw).map_err(|e| ManifestError::Decode {
            message: e.to_string(),
            raw: raw.to_string(),
        })?;

    if manifest.files.is_empty() {
        return Err(ManifestError::Empty);
    }

    Ok(manifest)
}

/// Write every manifest entry under `dir`, creating parent directories and
/// overwriting existing files.
///
/// All paths are resolved and checked before the first write, so a manifest
/// with any invalid path leaves the directory untouched. After a successful
/// return every entry exists on disk with the declared content. A
/// filesystem failure partway leaves a partially-written tree; callers must
/// treat that as not safe to publish.
pub fn materialize(manifest: &FileManifest, dir: &Path) -> Result<(), ManifestError> {
    let targets: Vec<PathBuf> = manifest
        .files
        .iter()
        .map(|file| resolve_entry(dir, &file.path))
        .collect::<Result<_, _>>()?;

    for (file, target) in manifest.files.iter().zip(&targets) {
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).map_err(|source| ManifestError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(target, &file.content).map_err(|source| ManifestError::Write {
            path: target.clone(),
            source,
        })?;
    }

    Ok(())
}

/// Resolve a declared path relative to the staging directory.
///
/// Rejects empty and absolute paths and any path containing a parent
/// component, so every target stays inside `dir`.
fn resolve_entry(dir: &Path, declared: &str) -> Result<PathBuf, ManifestError> {
    let escape = || ManifestError::PathEscape {
        path: declared.to_string(),
    };

    if declared.is_empty() {
        return Err(escape());
    }

    let relative = Path::new(declared);
    if relative.is_absolute() {
        return Err(escape());
    }

    for component in relative.components() {
        match component {
            Component::Normal(_) | Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                return Err(escape());
            }
        }
    }

    Ok(dir.join(relative))
}
