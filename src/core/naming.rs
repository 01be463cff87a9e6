//! core::naming
//!
//! Repository name resolution from free-form text.
//!
//! # Resolution order
//!
//! 1. An explicit name, if the caller supplied one, sanitized to the
//!    repository-name charset.
//! 2. A name extracted from the description via an ordered list of phrase
//!    patterns ("repo name: X", "repository: X", "project: X", "name: X",
//!    "call it X"); first match wins.
//! 3. A name synthesized from the description's keywords plus a
//!    `YYYYMMDD-HHMM` timestamp for uniqueness.
//!
//! Resolution never fails: every path produces a valid [`RepoName`]. The
//! wall clock is injected so tests stay deterministic.

use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use regex::Regex;

use crate::core::types::{RepoName, MAX_REPO_NAME_LEN};

/// Words dropped during keyword synthesis.
const STOPWORDS: &[&str] = &[
    "the", "and", "for", "with", "that", "this", "from", "into", "using", "use", "are", "was",
    "will", "can", "could", "would", "should", "make", "makes", "create", "creates", "build",
    "builds", "want", "need", "please", "some", "code", "repo", "repository", "project",
];

/// Minimum accepted length for a phrase-extracted name.
const MIN_EXTRACTED_LEN: usize = 3;

/// How many keywords the synthesized base name keeps.
const KEYWORD_COUNT: usize = 3;

/// Length of the raw-description fallback slug.
const FALLBACK_SLUG_LEN: usize = 15;

/// Ordered phrase patterns, checked case-insensitively; first match wins.
fn phrase_patterns() -> &'static [Regex] {
    static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        [
            r"(?i)repo\s+name\s*:\s*([A-Za-z0-9._-]+)",
            r"(?i)repository\s*:\s*([A-Za-z0-9._-]+)",
            r"(?i)project\s*:\s*([A-Za-z0-9._-]+)",
            r"(?i)\bname\s*:\s*([A-Za-z0-9._-]+)",
            r"(?i)call\s+it\s+([A-Za-z0-9._-]+)",
        ]
        .iter()
        .map(|p| Regex::new(p).expect("static pattern"))
        .collect()
    })
}

/// Resolve a repository name using the current wall-clock time.
///
/// See [`resolve_at`] for the deterministic variant used by tests.
pub fn resolve(description: &str, explicit_name: Option<&str>) -> RepoName {
    resolve_at(description, explicit_name, Utc::now())
}

/// Resolve a repository name at a fixed point in time.
///
/// # Example
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use scaffold::core::naming::resolve_at;
///
/// let now = Utc.with_ymd_and_hms(2024, 1, 1, 12, 30, 0).unwrap();
///
/// let named = resolve_at("Create a repo name: todo-app for a todo list", None, now);
/// assert_eq!(named.as_str(), "todo-app");
///
/// let synthesized = resolve_at("A quick sorting visualizer in JavaScript", None, now);
/// assert_eq!(synthesized.as_str(), "quick-sorting-visualizer-20240101-1230");
/// ```
pub fn resolve_at(description: &str, explicit_name: Option<&str>, now: DateTime<Utc>) -> RepoName {
    if let Some(explicit) = explicit_name {
        let sanitized = sanitize(explicit);
        if !sanitized.is_empty() {
            return RepoName::new_unchecked(sanitized);
        }
    }

    if let Some(extracted) = extract_named(description) {
        return RepoName::new_unchecked(extracted);
    }

    RepoName::new_unchecked(synthesize(description, now))
}

/// Sanitize a raw name into the repository-name charset.
///
/// Disallowed characters become `-`, the result is lowercased, leading and
/// trailing separators are trimmed, and the name is truncated to the length
/// limit. Sanitization is idempotent; the result may be empty if the input
/// contains no usable characters.
pub fn sanitize(raw: &str) -> String {
    let mapped: String = raw
        .chars()
        .map(|c| {
            let c = c.to_ascii_lowercase();
            if c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '-'
            }
        })
        .collect();

    let trimmed = mapped.trim_matches(['-', '.', '_']);
    let truncated: String = trimmed.chars().take(MAX_REPO_NAME_LEN).collect();
    // Truncation can expose a new trailing separator
    truncated.trim_matches(['-', '.', '_']).to_string()
}

/// Extract a name from a recognized naming phrase in the description.
///
/// The extracted token is lowercased, underscores become hyphens, and
/// anything outside `[a-z0-9-]` is stripped. Tokens shorter than three
/// characters are rejected so stray matches ("name: a") don't win.
fn extract_named(description: &str) -> Option<String> {
    for pattern in phrase_patterns() {
        if let Some(caps) = pattern.captures(description) {
            let token = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
            let normalized: String = token
                .to_ascii_lowercase()
                .chars()
                .map(|c| if c == '_' { '-' } else { c })
                .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-')
                .collect();
            let truncated: String = normalized.chars().take(MAX_REPO_NAME_LEN).collect();
            let normalized = truncated.trim_matches('-').to_string();
            if normalized.chars().count() >= MIN_EXTRACTED_LEN {
                return Some(normalized);
            }
        }
    }
    None
}

/// Synthesize a name from description keywords plus a timestamp suffix.
fn synthesize(description: &str, now: DateTime<Utc>) -> String {
    let keywords: Vec<String> = description
        .split(|c: char| !c.is_ascii_alphanumeric())
        .map(|w| w.to_ascii_lowercase())
        .filter(|w| (3..=15).contains(&w.chars().count()))
        .filter(|w| !STOPWORDS.contains(&w.as_str()))
        .take(KEYWORD_COUNT)
        .collect();

    let base = if keywords.is_empty() {
        fallback_slug(description)
    } else {
        keywords.join("-")
    };

    let stamp = now.format("%Y%m%d-%H%M");
    if base.is_empty() {
        format!("project-{stamp}")
    } else {
        format!("{base}-{stamp}")
    }
}

/// Slug of the description's leading characters, for descriptions with no
/// usable keywords.
fn fallback_slug(description: &str) -> String {
    let slug: String = description
        .chars()
        .take(FALLBACK_SLUG_LEN)
        .map(|c| {
            let c = c.to_ascii_lowercase();
            if c.is_ascii_lowercase() || c.is_ascii_digit() {
                c
            } else {
                '-'
            }
        })
        .collect();
    slug.trim_matches('-').to_string()
}
