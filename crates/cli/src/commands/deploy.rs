//! `vulcan deploy`

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use color_eyre::eyre::{eyre, Result};
use vulcan_core::collaborators::adapters::{GitHubClient, MockRepositoryClient};
use vulcan_core::collaborators::RepositoryClient;
use vulcan_core::state::ProcessRegistry;
use vulcan_core::workflows::DeploymentWorkflow;
use vulcan_protocol::deployment_models::DeploymentConfig;

use crate::commands::collect_bundle;
use crate::console;

#[derive(Args)]
pub struct DeployArgs {
    /// Files or directories containing the code to deploy
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Repository URL, e.g. https://github.com/username/repo.git
    #[arg(long)]
    pub repository_url: String,

    /// Branch to deploy to
    #[arg(long, default_value = "main")]
    pub branch: String,

    /// Commit message
    #[arg(long, default_value = "Deploy code via Vulcan API")]
    pub commit_message: String,
}

fn repository_from_env() -> Result<Arc<dyn RepositoryClient>> {
    match std::env::var("GITHUB_TOKEN") {
        Ok(token) => Ok(Arc::new(GitHubClient::new(token)?)),
        Err(_) => {
            console::info("GITHUB_TOKEN not set, using mock repository client");
            Ok(Arc::new(MockRepositoryClient::success()))
        }
    }
}

pub async fn run(args: DeployArgs) -> Result<()> {
    let bundle = collect_bundle(&args.paths)?;
    console::info(&format!(
        "deploying {} file(s) to {}",
        bundle.len(),
        args.repository_url
    ));

    let config = DeploymentConfig {
        environment: "production".to_string(),
        repository_url: args.repository_url,
        branch: args.branch,
        commit_message: args.commit_message,
        additional_config: HashMap::new(),
    };

    let registry = Arc::new(ProcessRegistry::new());
    let workflow = DeploymentWorkflow::new(Arc::clone(&registry), repository_from_env()?);

    let outcome = workflow.execute(&bundle, &config).await?;
    console::info(&format!("process id: {}", outcome.process_id));

    for line in &outcome.logs {
        println!("  {line}");
    }

    match (outcome.success, outcome.deployment_url) {
        (true, Some(url)) => {
            console::success(&format!("deployed: {url}"));
            Ok(())
        }
        (true, None) => {
            console::success("deployed");
            Ok(())
        }
        (false, _) => {
            let message = outcome
                .error_message
                .unwrap_or_else(|| "deployment failed".to_string());
            console::error(&message);
            Err(eyre!(message))
        }
    }
}
