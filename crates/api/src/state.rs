//! Shared application state.

use std::sync::Arc;

use vulcan_core::collaborators::adapters::{
    CommandCodeGenerator, CommandTestRunner, GitHubClient, MockCodeGenerator,
    MockRepositoryClient, MockTestRunner,
};
use vulcan_core::state::ProcessRegistry;
use vulcan_core::workflows::{DeploymentWorkflow, GenerationWorkflow, TestingWorkflow};

use crate::config::ApiConfig;

/// Everything the handlers need, cheaply cloneable.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<ProcessRegistry>,
    pub generation: Arc<GenerationWorkflow>,
    pub testing: Arc<TestingWorkflow>,
    pub deployment: Arc<DeploymentWorkflow>,
    pub api_key: Arc<str>,
}

impl AppState {
    /// Wire up the workflows from configuration.
    ///
    /// Backends without configuration fall back to the mock adapters so the
    /// server is usable out of the box; each fallback is logged.
    pub fn from_config(config: &ApiConfig) -> anyhow::Result<Self> {
        let registry = Arc::new(ProcessRegistry::new());

        let generator: Arc<dyn vulcan_core::collaborators::CodeGenerator> =
            match &config.generate_command {
                Some(command) => Arc::new(CommandCodeGenerator::new(command.clone())),
                None => {
                    tracing::warn!("VULCAN_GENERATE_CMD not set, using mock code generator");
                    Arc::new(MockCodeGenerator::success())
                }
            };

        let runner: Arc<dyn vulcan_core::collaborators::TestRunner> = match &config.test_command {
            Some(command) => Arc::new(CommandTestRunner::new(command.clone())),
            None => {
                tracing::warn!("VULCAN_TEST_CMD not set, using mock test runner");
                Arc::new(MockTestRunner::passing())
            }
        };

        let repository: Arc<dyn vulcan_core::collaborators::RepositoryClient> =
            match &config.github_token {
                Some(token) => Arc::new(GitHubClient::new(token.clone())?),
                None => {
                    tracing::warn!("GITHUB_TOKEN not set, using mock repository client");
                    Arc::new(MockRepositoryClient::success())
                }
            };

        Ok(Self {
            generation: Arc::new(GenerationWorkflow::new(Arc::clone(&registry), generator)),
            testing: Arc::new(TestingWorkflow::new(Arc::clone(&registry), runner)),
            deployment: Arc::new(DeploymentWorkflow::new(Arc::clone(&registry), repository)),
            api_key: Arc::from(config.api_key.as_str()),
            registry,
        })
    }

    /// State backed entirely by mock collaborators.
    pub fn with_mocks(api_key: &str) -> Self {
        let registry = Arc::new(ProcessRegistry::new());
        Self {
            generation: Arc::new(GenerationWorkflow::new(
                Arc::clone(&registry),
                Arc::new(MockCodeGenerator::success()),
            )),
            testing: Arc::new(TestingWorkflow::new(
                Arc::clone(&registry),
                Arc::new(MockTestRunner::passing()),
            )),
            deployment: Arc::new(DeploymentWorkflow::new(
                Arc::clone(&registry),
                Arc::new(MockRepositoryClient::success()),
            )),
            api_key: Arc::from(api_key),
            registry,
        }
    }
}
