//! core::config
//!
//! Configuration schema and loading.
//!
//! # Locations
//!
//! The config file is searched in order:
//! 1. `$SCAFFOLD_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/scaffold/config.toml`
//! 3. `~/.scaffold/config.toml` (canonical write location)
//!
//! A missing file is not an error; defaults apply. Secrets can also come
//! from the environment (`GITHUB_TOKEN`, `OPENAI_API_KEY`), which overrides
//! the file.
//!
//! # Design
//!
//! Configuration is resolved once at startup and passed into components at
//! construction. Nothing in the pipeline reads the environment or the
//! filesystem for configuration mid-flight, which keeps pipeline runs
//! deterministic under test.
//!
//! # Example
//!
//! ```no_run
//! use scaffold::core::config::Config;
//!
//! let config = Config::load().unwrap();
//! println!("staging root: {}", config.staging_root().display());
//! println!("model: {}", config.model_name());
//! ```

pub mod schema;

pub use schema::ConfigFile;

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// Default GitHub API base URL.
pub const DEFAULT_GITHUB_API_BASE: &str = "https://api.github.com";

/// Default generative-text API base URL.
pub const DEFAULT_MODEL_API_BASE: &str = "https://api.openai.com/v1";

/// Default model identifier.
pub const DEFAULT_MODEL_NAME: &str = "gpt-4o-mini";

/// Default response-length ceiling.
pub const DEFAULT_MAX_TOKENS: u32 = 4096;

/// Default code-execution API base URL.
pub const DEFAULT_EXEC_API_BASE: &str = "https://emkc.org/api/v2/piston";

/// Default snippet language.
pub const DEFAULT_EXEC_LANGUAGE: &str = "python3";

/// Default snippet language version.
pub const DEFAULT_EXEC_VERSION: &str = "3.10.0";

/// Default committer name.
pub const DEFAULT_COMMITTER_NAME: &str = "scaffold-bot";

/// Default committer email.
pub const DEFAULT_COMMITTER_EMAIL: &str = "scaffold@localhost";

/// Resolved process configuration.
///
/// Accessors apply defaults so callers never see partial values.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Parsed file contents (empty if no file was found).
    pub file: ConfigFile,
    /// Path the file was loaded from, if any.
    path: Option<PathBuf>,
    /// `GITHUB_TOKEN` from the environment, if set.
    env_github_token: Option<String>,
    /// `OPENAI_API_KEY` from the environment, if set.
    env_model_key: Option<String>,
}

impl Config {
    /// Load configuration from the standard locations and environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be read, parsed
    /// or validated. A missing file is not an error.
    pub fn load() -> Result<Self, ConfigError> {
        let (file, path) = match Self::find_file() {
            Some(path) => (Self::read_file(&path)?, Some(path)),
            None => (ConfigFile::default(), None),
        };
        file.validate()?;

        Ok(Config {
            file,
            path,
            env_github_token: non_empty_env("GITHUB_TOKEN"),
            env_model_key: non_empty_env("OPENAI_API_KEY"),
        })
    }

    /// Build a config from already-parsed contents, ignoring the
    /// environment. Used by tests and embedding callers.
    pub fn from_file(file: ConfigFile) -> Result<Self, ConfigError> {
        file.validate()?;
        Ok(Config {
            file,
            path: None,
            env_github_token: None,
            env_model_key: None,
        })
    }

    /// Locate the config file, honoring the search order.
    fn find_file() -> Option<PathBuf> {
        if let Ok(path) = std::env::var("SCAFFOLD_CONFIG") {
            let path = PathBuf::from(path);
            if path.exists() {
                return Some(path);
            }
        }

        if let Ok(xdg_home) = std::env::var("XDG_CONFIG_HOME") {
            let path = PathBuf::from(xdg_home).join("scaffold/config.toml");
            if path.exists() {
                return Some(path);
            }
        }

        if let Some(home) = dirs::home_dir() {
            let path = home.join(".scaffold/config.toml");
            if path.exists() {
                return Some(path);
            }
        }

        None
    }

    /// Read and parse a config file.
    fn read_file(path: &Path) -> Result<ConfigFile, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Path the config was loaded from, if a file was found.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// GitHub API token (environment overrides the file).
    pub fn github_token(&self) -> Option<&str> {
        self.env_github_token
            .as_deref()
            .or_else(|| self.file.github.as_ref()?.token.as_deref())
    }

    /// GitHub API base URL.
    pub fn github_api_base(&self) -> &str {
        self.file
            .github
            .as_ref()
            .and_then(|s| s.api_base.as_deref())
            .unwrap_or(DEFAULT_GITHUB_API_BASE)
    }

    /// Generative-text API key (environment overrides the file).
    pub fn model_api_key(&self) -> Option<&str> {
        self.env_model_key
            .as_deref()
            .or_else(|| self.file.model.as_ref()?.api_key.as_deref())
    }

    /// Generative-text API base URL.
    pub fn model_api_base(&self) -> &str {
        self.file
            .model
            .as_ref()
            .and_then(|s| s.api_base.as_deref())
            .unwrap_or(DEFAULT_MODEL_API_BASE)
    }

    /// Model identifier to request completions from.
    pub fn model_name(&self) -> &str {
        self.file
            .model
            .as_ref()
            .and_then(|s| s.model.as_deref())
            .unwrap_or(DEFAULT_MODEL_NAME)
    }

    /// Response-length ceiling for structure requests.
    pub fn max_tokens(&self) -> u32 {
        self.file
            .model
            .as_ref()
            .and_then(|s| s.max_tokens)
            .unwrap_or(DEFAULT_MAX_TOKENS)
    }

    /// Code-execution API base URL.
    pub fn exec_api_base(&self) -> &str {
        self.file
            .exec
            .as_ref()
            .and_then(|s| s.api_base.as_deref())
            .unwrap_or(DEFAULT_EXEC_API_BASE)
    }

    /// Default snippet language for execution.
    pub fn exec_language(&self) -> &str {
        self.file
            .exec
            .as_ref()
            .and_then(|s| s.language.as_deref())
            .unwrap_or(DEFAULT_EXEC_LANGUAGE)
    }

    /// Default snippet language version for execution.
    pub fn exec_version(&self) -> &str {
        self.file
            .exec
            .as_ref()
            .and_then(|s| s.version.as_deref())
            .unwrap_or(DEFAULT_EXEC_VERSION)
    }

    /// Root under which per-request staging directories are created.
    pub fn staging_root(&self) -> PathBuf {
        self.file
            .staging
            .as_ref()
            .and_then(|s| s.root.clone())
            .unwrap_or_else(|| std::env::temp_dir().join("scaffold"))
    }

    /// Committer identity for published commits.
    pub fn committer(&self) -> (String, String) {
        let name = self
            .file
            .committer
            .as_ref()
            .and_then(|s| s.name.clone())
            .unwrap_or_else(|| DEFAULT_COMMITTER_NAME.to_string());
        let email = self
            .file
            .committer
            .as_ref()
            .and_then(|s| s.email.clone())
            .unwrap_or_else(|| DEFAULT_COMMITTER_EMAIL.to_string());
        (name, email)
    }
}

/// Read an environment variable, treating empty as unset.
fn non_empty_env(key: &str) -> Option<String> {
    match std::env::var(key) {
        Ok(value) if !value.is_empty() => Some(value),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_on_empty_config() {
        let config = Config::from_file(ConfigFile::default()).unwrap();

        assert_eq!(config.github_api_base(), DEFAULT_GITHUB_API_BASE);
        assert_eq!(config.model_api_base(), DEFAULT_MODEL_API_BASE);
        assert_eq!(config.model_name(), DEFAULT_MODEL_NAME);
        assert_eq!(config.max_tokens(), DEFAULT_MAX_TOKENS);
        assert_eq!(config.exec_language(), DEFAULT_EXEC_LANGUAGE);
        assert_eq!(config.exec_version(), DEFAULT_EXEC_VERSION);
        assert!(config.github_token().is_none());
        assert!(config.model_api_key().is_none());
        assert!(config.staging_root().ends_with("scaffold"));

        let (name, email) = config.committer();
        assert_eq!(name, DEFAULT_COMMITTER_NAME);
        assert_eq!(email, DEFAULT_COMMITTER_EMAIL);
    }

    #[test]
    fn file_values_override_defaults() {
        let file: ConfigFile = toml::from_str(
            r#"
            [github]
            token = "ghp_file"
            api_base = "https://github.example.com/api/v3"

            [model]
            model = "gpt-4o"
            max_tokens = 1024
            "#,
        )
        .unwrap();
        let config = Config::from_file(file).unwrap();

        assert_eq!(config.github_token(), Some("ghp_file"));
        assert_eq!(config.github_api_base(), "https://github.example.com/api/v3");
        assert_eq!(config.model_name(), "gpt-4o");
        assert_eq!(config.max_tokens(), 1024);
    }

    #[test]
    fn invalid_file_rejected() {
        let file: ConfigFile = toml::from_str("[model]\nmax_tokens = 0\n").unwrap();
        assert!(Config::from_file(file).is_err());
    }
}
