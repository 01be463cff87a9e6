//! core::config::schema
//!
//! Configuration schema types.
//!
//! # Layout
//!
//! ```toml
//! [github]
//! token = "ghp_xxx"
//!
//! [model]
//! api_key = "sk-xxx"
//! model = "gpt-4o-mini"
//! max_tokens = 4096
//!
//! [exec]
//! language = "python3"
//! version = "3.10.0"
//!
//! [staging]
//! root = "/tmp/scaffold"
//!
//! [committer]
//! name = "scaffold-bot"
//! email = "scaffold@localhost"
//! ```
//!
//! Every section and field is optional; accessors on
//! [`Config`](super::Config) apply defaults. Service base URLs are
//! configurable so tests can point clients at local HTTP fixtures.

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Hosting-service settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GithubSection {
    /// API token. Overridden by `GITHUB_TOKEN` if set.
    pub token: Option<String>,

    /// API base URL (default: `https://api.github.com`)
    pub api_base: Option<String>,
}

/// Generative-text-service settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ModelSection {
    /// API key. Overridden by `OPENAI_API_KEY` if set.
    pub api_key: Option<String>,

    /// API base URL (default: `https://api.openai.com/v1`)
    pub api_base: Option<String>,

    /// Model identifier (default: `gpt-4o-mini`)
    pub model: Option<String>,

    /// Response-length ceiling in tokens (default: 4096)
    pub max_tokens: Option<u32>,
}

/// Code-execution-service settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ExecSection {
    /// API base URL (default: `https://emkc.org/api/v2/piston`)
    pub api_base: Option<String>,

    /// Default language for snippets (default: `python3`)
    pub language: Option<String>,

    /// Default language version (default: `3.10.0`)
    pub version: Option<String>,
}

/// Staging settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct StagingSection {
    /// Root under which per-request staging directories are created
    /// (default: `$TMPDIR/scaffold`)
    pub root: Option<std::path::PathBuf>,
}

/// Commit identity used by the publish driver.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct CommitterSection {
    /// Committer name (default: `scaffold-bot`)
    pub name: Option<String>,

    /// Committer email (default: `scaffold@localhost`)
    pub email: Option<String>,
}

/// The full configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub github: Option<GithubSection>,
    pub model: Option<ModelSection>,
    pub exec: Option<ExecSection>,
    pub staging: Option<StagingSection>,
    pub committer: Option<CommitterSection>,
}

impl ConfigFile {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(model) = &self.model {
            if let Some(max_tokens) = model.max_tokens {
                if max_tokens == 0 {
                    return Err(ConfigError::InvalidValue(
                        "model.max_tokens must be positive".to_string(),
                    ));
                }
            }
        }

        if let Some(committer) = &self.committer {
            if let Some(email) = &committer.email {
                if !email.contains('@') {
                    return Err(ConfigError::InvalidValue(format!(
                        "committer.email '{email}' is not an email address"
                    )));
                }
            }
            if let Some(name) = &committer.name {
                if name.is_empty() {
                    return Err(ConfigError::InvalidValue(
                        "committer.name cannot be empty".to_string(),
                    ));
                }
            }
        }

        for (field, value) in [
            ("github.api_base", self.github.as_ref().and_then(|s| s.api_base.as_deref())),
            ("model.api_base", self.model.as_ref().and_then(|s| s.api_base.as_deref())),
            ("exec.api_base", self.exec.as_ref().and_then(|s| s.api_base.as_deref())),
        ] {
            if let Some(url) = value {
                if !url.starts_with("http://") && !url.starts_with("https://") {
                    return Err(ConfigError::InvalidValue(format!(
                        "{field} must be an http(s) URL, got '{url}'"
                    )));
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_valid() {
        let file: ConfigFile = toml::from_str("").unwrap();
        assert!(file.validate().is_ok());
    }

    #[test]
    fn full_file_parses() {
        let file: ConfigFile = toml::from_str(
            r#"
            [github]
            token = "ghp_abc"

            [model]
            api_key = "sk-abc"
            model = "gpt-4o-mini"
            max_tokens = 2048

            [exec]
            language = "python3"
            version = "3.10.0"

            [staging]
            root = "/tmp/scaffold"

            [committer]
            name = "bot"
            email = "bot@example.com"
            "#,
        )
        .unwrap();
        assert!(file.validate().is_ok());
        assert_eq!(file.model.unwrap().max_tokens, Some(2048));
    }

    #[test]
    fn unknown_fields_rejected() {
        let result: Result<ConfigFile, _> = toml::from_str("[github]\nbogus = true\n");
        assert!(result.is_err());
    }

    #[test]
    fn zero_max_tokens_rejected() {
        let file: ConfigFile = toml::from_str("[model]\nmax_tokens = 0\n").unwrap();
        assert!(matches!(file.validate(), Err(ConfigError::InvalidValue(_))));
    }

    #[test]
    fn bad_email_rejected() {
        let file: ConfigFile = toml::from_str("[committer]\nemail = \"nope\"\n").unwrap();
        assert!(matches!(file.validate(), Err(ConfigError::InvalidValue(_))));
    }

    #[test]
    fn non_http_api_base_rejected() {
        let file: ConfigFile = toml::from_str("[github]\napi_base = \"ftp://x\"\n").unwrap();
        assert!(matches!(file.validate(), Err(ConfigError::InvalidValue(_))));
    }
}
