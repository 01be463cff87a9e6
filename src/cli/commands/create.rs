//! cli::commands::create
//!
//! Synthesize a project repository and publish it.

use std::path::Path;
use std::sync::Arc;

use anyhow::{bail, Context, Result};

use crate::core::config::Config;
use crate::forge::github::GitHubForge;
use crate::model::openai::OpenAiModel;
use crate::pipeline::{Pipeline, SynthesisRequest};

/// Run the create command.
///
/// This is a synchronous wrapper that uses tokio to run the async implementation.
pub fn create(
    description: &str,
    snippet: Option<&Path>,
    name: Option<&str>,
    quiet: bool,
) -> Result<()> {
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(create_async(description, snippet, name, quiet))
}

/// Async implementation of create.
async fn create_async(
    description: &str,
    snippet: Option<&Path>,
    name: Option<&str>,
    quiet: bool,
) -> Result<()> {
    let config = Config::load()?;

    let Some(github_token) = config.github_token() else {
        bail!(
            "No GitHub token configured.\n\n\
             Set GITHUB_TOKEN, or add it to your config file:\n\n\
                 [github]\n\
                 token = \"ghp_...\""
        );
    };
    let Some(model_key) = config.model_api_key() else {
        bail!(
            "No model API key configured.\n\n\
             Set OPENAI_API_KEY, or add it to your config file:\n\n\
                 [model]\n\
                 api_key = \"sk-...\""
        );
    };

    let code_snippet = match snippet {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read snippet file '{}'", path.display()))?,
        None => String::new(),
    };

    let model = Arc::new(OpenAiModel::new(
        model_key,
        config.model_name(),
        config.model_api_base(),
    ));
    let forge = Arc::new(GitHubForge::with_api_base(
        github_token,
        config.github_api_base(),
    ));
    let pipeline = Pipeline::new(&config, model, forge);

    let request = SynthesisRequest {
        code_snippet,
        description: description.to_string(),
        explicit_name: name.map(|n| n.to_string()),
    };

    let report = pipeline
        .create_project_repository(&request)
        .await
        .map_err(|e| anyhow::anyhow!("{} (stage: {})", e, e.stage()))?;

    if quiet {
        println!("{}", report.html_url);
    } else if report.pushed {
        println!("Published {} -> {}", report.name, report.html_url);
    } else {
        println!(
            "Repository {} ready at {} (nothing to publish)",
            report.name, report.html_url
        );
    }

    Ok(())
}
