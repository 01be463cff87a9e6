//! pipeline
//!
//! Orchestrates the repository-synthesis pipeline:
//!
//! ```text
//! Resolve name -> Request structure -> Materialize -> Reconcile -> Publish
//! ```
//!
//! Each stage's output feeds the next; failure at any stage aborts the
//! pipeline and surfaces a [`PipelineError`] tagging the failing stage. No
//! stage attempts automatic recovery; the caller decides presentation.
//!
//! # Isolation
//!
//! Every invocation materializes into its own [`StagingArena`], so
//! concurrent invocations never race on files or git state. The arena is
//! removed when the invocation ends, success or failure.

use std::sync::Arc;

use rand::Rng;
use thiserror::Error;

use crate::core::config::Config;
use crate::core::manifest::{self, ManifestError};
use crate::core::naming;
use crate::core::staging::{StagingArena, StagingError};
use crate::core::types::RepoName;
use crate::forge::{CreateRepoRequest, Forge, ForgeError, Repository};
use crate::git::{PublishError, PublishOutcome, Publisher};
use crate::model::{self, ModelError, TextModel};

/// How many candidate names reconciliation tries before giving up.
const MAX_NAME_ATTEMPTS: u32 = 5;

/// Errors from repository reconciliation.
#[derive(Debug, Error)]
pub enum ReconcileError {
    /// The hosting service failed (auth, rate limit, network, creation).
    #[error("hosting service error: {0}")]
    Forge(#[from] ForgeError),

    /// Every candidate name collided with an existing repository.
    #[error("no available repository name after {attempts} attempts (base '{base}')")]
    NamesExhausted {
        /// The originally resolved name
        base: String,
        /// How many candidates were tried
        attempts: u32,
    },
}

/// Errors from the pipeline, one variant per stage.
///
/// Name resolution has no variant: it never fails by construction.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The generative-text service was unreachable or rejected the request.
    #[error("structure request failed: {0}")]
    StructureRequest(#[from] ModelError),

    /// The response did not decode to a manifest, or a file write failed.
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    /// The staging arena could not be created.
    #[error(transparent)]
    Staging(#[from] StagingError),

    /// The hosting service failed during reconciliation.
    #[error(transparent)]
    Reconcile(#[from] ReconcileError),

    /// The version-control commit or push failed.
    #[error(transparent)]
    Publish(#[from] PublishError),
}

impl PipelineError {
    /// The pipeline stage that failed, for logs and caller-facing errors.
    pub fn stage(&self) -> &'static str {
        match self {
            PipelineError::StructureRequest(_) => "structure-request",
            PipelineError::Manifest(
                ManifestError::Write { .. } | ManifestError::PathEscape { .. },
            ) => "materialize",
            PipelineError::Manifest(_) => "manifest-decode",
            PipelineError::Staging(_) => "staging",
            PipelineError::Reconcile(_) => "reconcile",
            PipelineError::Publish(_) => "publish",
        }
    }
}

/// One repository-synthesis request.
#[derive(Debug, Clone, Default)]
pub struct SynthesisRequest {
    /// Code snippet to embed in the generated project
    pub code_snippet: String,
    /// Natural-language description of the project
    pub description: String,
    /// Caller-chosen repository name, overriding derivation
    pub explicit_name: Option<String>,
}

/// Terminal output of a successful pipeline run.
#[derive(Debug, Clone)]
pub struct PublishReport {
    /// The repository name actually used (may differ from the resolved
    /// name if a collision occurred)
    pub name: String,
    /// Clone address of the remote repository
    pub clone_url: String,
    /// Web URL of the remote repository
    pub html_url: String,
    /// False when the working tree was clean and nothing was pushed
    pub pushed: bool,
}

/// The repository-synthesis pipeline.
///
/// Collaborators and configuration are injected at construction; nothing is
/// read from the environment during a run.
pub struct Pipeline {
    model: Arc<dyn TextModel>,
    forge: Arc<dyn Forge>,
    publisher: Publisher,
    staging_root: std::path::PathBuf,
    max_tokens: u32,
}

impl Pipeline {
    /// Build a pipeline from configuration and collaborators.
    pub fn new(config: &Config, model: Arc<dyn TextModel>, forge: Arc<dyn Forge>) -> Self {
        let (committer_name, committer_email) = config.committer();
        let token = config.github_token().unwrap_or_default().to_string();
        Self {
            model,
            forge,
            publisher: Publisher::new(committer_name, committer_email, token),
            staging_root: config.staging_root(),
            max_tokens: config.max_tokens(),
        }
    }

    /// Run the full pipeline for one request.
    ///
    /// # Errors
    ///
    /// Returns a [`PipelineError`] tagging the failing stage. The staging
    /// arena is removed on every path out of this function.
    pub async fn create_project_repository(
        &self,
        request: &SynthesisRequest,
    ) -> Result<PublishReport, PipelineError> {
        let name = naming::resolve(&request.description, request.explicit_name.as_deref());
        tracing::info!(name = %name, "resolved repository name");

        let raw = model::request_structure(
            self.model.as_ref(),
            &request.code_snippet,
            &request.description,
            self.max_tokens,
        )
        .await?;

        let manifest = manifest::decode(&raw)?;
        tracing::info!(files = manifest.files.len(), "decoded project manifest");

        let arena = StagingArena::create(&self.staging_root)?;
        manifest::materialize(&manifest, arena.path())?;

        let repo = reconcile(self.forge.as_ref(), &name, &request.description).await?;

        let outcome = self.publisher.publish(arena.path(), &repo.clone_url)?;
        let pushed = matches!(outcome, PublishOutcome::Pushed { .. });

        Ok(PublishReport {
            name: repo.name,
            clone_url: repo.clone_url,
            html_url: repo.html_url,
            pushed,
        })
    }
}

/// Ensure a remote repository exists for `name`, resolving collisions.
///
/// Probes the authenticated account for each candidate before creating it.
/// On collision a `-` plus random 4-digit suffix is appended and the probe
/// repeats, up to a bounded number of attempts. A create that still races
/// into "name already exists" counts as a collision and continues the loop.
pub async fn reconcile(
    forge: &dyn Forge,
    name: &RepoName,
    description: &str,
) -> Result<Repository, ReconcileError> {
    let account = forge.viewer().await?;

    for attempt in 0..MAX_NAME_ATTEMPTS {
        let candidate = if attempt == 0 {
            name.clone()
        } else {
            let suffix: u16 = rand::rng().random_range(0..10_000);
            name.with_suffix(&format!("{suffix:04}"))
        };

        if forge.repo_exists(&account.login, &candidate).await? {
            tracing::debug!(candidate = %candidate, "name taken, retrying");
            continue;
        }

        match forge
            .create_repo(CreateRepoRequest {
                name: candidate.clone(),
                description: description.to_string(),
                private: false,
            })
            .await
        {
            Ok(repo) => {
                if attempt > 0 {
                    tracing::info!(
                        requested = %name,
                        used = %repo.name,
                        "resolved name collision"
                    );
                }
                return Ok(repo);
            }
            // Lost a race between probe and create; try the next candidate.
            Err(ForgeError::ApiError { status: 422, .. }) => continue,
            Err(e) => return Err(e.into()),
        }
    }

    Err(ReconcileError::NamesExhausted {
        base: name.to_string(),
        attempts: MAX_NAME_ATTEMPTS,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forge::mock::{FailOn, MockForge};

    fn name(s: &str) -> RepoName {
        RepoName::new(s).unwrap()
    }

    #[tokio::test]
    async fn reconcile_creates_fresh_name() {
        let forge = MockForge::new();
        let repo = reconcile(&forge, &name("todo-app"), "a todo list")
            .await
            .unwrap();
        assert_eq!(repo.name, "todo-app");
    }

    #[tokio::test]
    async fn reconcile_disambiguates_collisions() {
        let forge = MockForge::with_existing_repos(&["todo-app"]);
        let repo = reconcile(&forge, &name("todo-app"), "a todo list")
            .await
            .unwrap();

        assert_ne!(repo.name, "todo-app");
        assert!(repo.name.starts_with("todo-app-"));
        let suffix = repo.name.strip_prefix("todo-app-").unwrap();
        assert_eq!(suffix.len(), 4);
        assert!(suffix.chars().all(|c| c.is_ascii_digit()));
    }

    #[tokio::test]
    async fn reconcile_propagates_forge_errors() {
        let forge = MockForge::new().fail_on(FailOn::CreateRepo(ForgeError::RateLimited));
        let result = reconcile(&forge, &name("todo-app"), "").await;
        assert!(matches!(
            result,
            Err(ReconcileError::Forge(ForgeError::RateLimited))
        ));
    }

    #[tokio::test]
    async fn reconcile_propagates_auth_failure_from_viewer() {
        let forge = MockForge::new().fail_on(FailOn::Viewer(ForgeError::AuthRequired));
        let result = reconcile(&forge, &name("todo-app"), "").await;
        assert!(matches!(
            result,
            Err(ReconcileError::Forge(ForgeError::AuthRequired))
        ));
    }

    #[test]
    fn pipeline_error_stages() {
        let decode = PipelineError::Manifest(ManifestError::Empty);
        assert_eq!(decode.stage(), "manifest-decode");

        let write = PipelineError::Manifest(ManifestError::Write {
            path: "x".into(),
            source: std::io::Error::other("disk full"),
        });
        assert_eq!(write.stage(), "materialize");

        let request = PipelineError::StructureRequest(ModelError::RateLimited);
        assert_eq!(request.stage(), "structure-request");
    }
}
