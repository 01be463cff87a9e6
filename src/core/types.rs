//! core::types
//!
//! Strong types for core domain concepts.
//!
//! # Types
//!
//! - [`RepoName`] - Validated repository identifier
//!
//! # Validation
//!
//! These types enforce validity at construction time. Invalid values
//! cannot be represented, preventing entire classes of bugs.
//!
//! # Examples
//!
//! ```
//! use scaffold::core::types::RepoName;
//!
//! // Valid constructions
//! let name = RepoName::new("todo-app").unwrap();
//! assert_eq!(name.as_str(), "todo-app");
//!
//! // Invalid constructions fail at creation time
//! assert!(RepoName::new("").is_err());
//! assert!(RepoName::new("Has Spaces").is_err());
//! assert!(RepoName::new("-leading-separator").is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from type validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid repository name: {0}")]
    InvalidRepoName(String),
}

/// Maximum length of a repository name.
pub const MAX_REPO_NAME_LEN: usize = 100;

/// Characters treated as separators at the edges of a name.
const SEPARATORS: [char; 3] = ['-', '.', '_'];

/// A validated repository identifier.
///
/// Repository names are:
/// - Non-empty
/// - Lowercase, restricted to `[a-z0-9._-]`
/// - At most 100 characters
/// - Free of leading/trailing separator characters (`-`, `.`, `_`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RepoName(String);

impl RepoName {
    /// Create a new validated repository name.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidRepoName` if the name violates the
    /// charset, length or separator rules.
    pub fn new(name: impl Into<String>) -> Result<Self, TypeError> {
        let name = name.into();
        Self::validate(&name)?;
        Ok(Self(name))
    }

    /// Construct from a string the caller has already normalized.
    ///
    /// Used by the naming module, whose normalization pipeline guarantees
    /// the invariants hold.
    pub(crate) fn new_unchecked(name: String) -> Self {
        debug_assert!(Self::validate(&name).is_ok(), "unnormalized name: {name}");
        Self(name)
    }

    /// Validate a repository name.
    fn validate(name: &str) -> Result<(), TypeError> {
        if name.is_empty() {
            return Err(TypeError::InvalidRepoName("name cannot be empty".into()));
        }

        if name.chars().count() > MAX_REPO_NAME_LEN {
            return Err(TypeError::InvalidRepoName(format!(
                "name exceeds {MAX_REPO_NAME_LEN} characters"
            )));
        }

        if let Some(bad) = name
            .chars()
            .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || SEPARATORS.contains(c)))
        {
            return Err(TypeError::InvalidRepoName(format!(
                "name cannot contain '{bad}'"
            )));
        }

        let first = name.chars().next();
        let last = name.chars().last();
        if first.is_some_and(|c| SEPARATORS.contains(&c))
            || last.is_some_and(|c| SEPARATORS.contains(&c))
        {
            return Err(TypeError::InvalidRepoName(
                "name cannot start or end with a separator".into(),
            ));
        }

        Ok(())
    }

    /// Derive a new name by appending `-{suffix}`.
    ///
    /// The base is truncated so the result stays within the length limit.
    /// Used for collision disambiguation during reconciliation.
    pub fn with_suffix(&self, suffix: &str) -> RepoName {
        let budget = MAX_REPO_NAME_LEN.saturating_sub(suffix.len() + 1);
        let base: String = self.0.chars().take(budget).collect();
        let base = base.trim_end_matches(SEPARATORS);
        Self::new_unchecked(format!("{base}-{suffix}"))
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RepoName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for RepoName {
    type Error = TypeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RepoName> for String {
    fn from(name: RepoName) -> Self {
        name.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_names() {
        for name in ["todo-app", "a.b_c-d", "x1", "repo2024", "my.project"] {
            assert!(RepoName::new(name).is_ok(), "expected valid: {name}");
        }
    }

    #[test]
    fn rejects_empty() {
        assert_eq!(
            RepoName::new(""),
            Err(TypeError::InvalidRepoName("name cannot be empty".into()))
        );
    }

    #[test]
    fn rejects_uppercase_and_spaces() {
        assert!(RepoName::new("Todo").is_err());
        assert!(RepoName::new("has space").is_err());
        assert!(RepoName::new("emoji💥").is_err());
    }

    #[test]
    fn rejects_edge_separators() {
        assert!(RepoName::new("-leading").is_err());
        assert!(RepoName::new("trailing-").is_err());
        assert!(RepoName::new(".hidden").is_err());
        assert!(RepoName::new("dotted.").is_err());
        assert!(RepoName::new("_under").is_err());
    }

    #[test]
    fn rejects_overlong() {
        let long = "a".repeat(MAX_REPO_NAME_LEN + 1);
        assert!(RepoName::new(long).is_err());
        let max = "a".repeat(MAX_REPO_NAME_LEN);
        assert!(RepoName::new(max).is_ok());
    }

    #[test]
    fn with_suffix_appends() {
        let name = RepoName::new("todo-app").unwrap();
        assert_eq!(name.with_suffix("1234").as_str(), "todo-app-1234");
    }

    #[test]
    fn with_suffix_respects_length_limit() {
        let name = RepoName::new("a".repeat(MAX_REPO_NAME_LEN)).unwrap();
        let suffixed = name.with_suffix("1234");
        assert!(suffixed.as_str().chars().count() <= MAX_REPO_NAME_LEN);
        assert!(suffixed.as_str().ends_with("-1234"));
    }

    #[test]
    fn serde_round_trip() {
        let name = RepoName::new("todo-app").unwrap();
        let json = serde_json::to_string(&name).unwrap();
        assert_eq!(json, "\"todo-app\"");
        let back: RepoName = serde_json::from_str(&json).unwrap();
        assert_eq!(back, name);
    }

    #[test]
    fn serde_rejects_invalid() {
        let result: Result<RepoName, _> = serde_json::from_str("\"Not Valid\"");
        assert!(result.is_err());
    }
}
