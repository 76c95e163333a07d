//! Deployment workflow.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::json;
use vulcan_protocol::deployment_models::DeploymentConfig;
use vulcan_protocol::process_models::ProcessType;

use crate::collaborators::RepositoryClient;
use crate::error::{CoreError, CoreResult};
use crate::state::ProcessRegistry;
use crate::workflows::{DeploymentOutcome, STEP_PUSH_TO_REPOSITORY};

/// Orchestrates one deployment: a single `push_to_repository` step against
/// the version-control backend, tracked in the registry.
pub struct DeploymentWorkflow {
    registry: Arc<ProcessRegistry>,
    repository: Arc<dyn RepositoryClient>,
}

impl DeploymentWorkflow {
    pub fn new(registry: Arc<ProcessRegistry>, repository: Arc<dyn RepositoryClient>) -> Self {
        Self {
            registry,
            repository,
        }
    }

    /// Deploy a code bundle to the configured repository.
    ///
    /// # Errors
    ///
    /// `Validation` if the bundle is empty or the repository URL is missing
    /// (no process is created). Registry errors indicate a bug in this
    /// orchestrator.
    pub async fn execute(
        &self,
        code_content: &HashMap<String, String>,
        config: &DeploymentConfig,
    ) -> CoreResult<DeploymentOutcome> {
        if code_content.is_empty() {
            return Err(CoreError::Validation(
                "code_content must contain at least one file".to_string(),
            ));
        }
        if config.repository_url.trim().is_empty() {
            return Err(CoreError::Validation(
                "repository_url must not be empty".to_string(),
            ));
        }

        let process_id = self.registry.create(ProcessType::Deployment).await;
        tracing::info!(
            %process_id,
            repository = %config.repository_url,
            branch = %config.branch,
            "starting deployment"
        );

        self.registry
            .begin_step(process_id, STEP_PUSH_TO_REPOSITORY)
            .await?;

        match self.repository.push(code_content, config).await {
            Ok(outcome) => {
                self.registry
                    .end_step(process_id, STEP_PUSH_TO_REPOSITORY, true, None)
                    .await?;

                let records = vec![json!({
                    "deployment_url": outcome.deployment_url,
                    "logs": outcome.logs,
                })];
                self.registry.complete(process_id, records, None).await?;

                tracing::info!(%process_id, url = %outcome.deployment_url, "deployment completed");
                Ok(DeploymentOutcome {
                    success: true,
                    process_id,
                    deployment_url: Some(outcome.deployment_url),
                    logs: outcome.logs,
                    error_message: None,
                })
            }
            Err(backend_error) => {
                let message = format!("Failed to deploy code: {backend_error}");
                self.registry
                    .end_step(process_id, STEP_PUSH_TO_REPOSITORY, false, Some(message.clone()))
                    .await?;
                self.registry
                    .complete(process_id, Vec::new(), Some(message.clone()))
                    .await?;

                tracing::error!(%process_id, error = %message, "deployment failed");
                Ok(DeploymentOutcome {
                    success: false,
                    process_id,
                    deployment_url: None,
                    logs: Vec::new(),
                    error_message: Some(message),
                })
            }
        }
    }
}
