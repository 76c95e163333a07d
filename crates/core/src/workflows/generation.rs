//! Code generation workflow.

use std::sync::Arc;

use serde_json::json;
use vulcan_protocol::generation_models::Requirements;
use vulcan_protocol::process_models::ProcessType;

use crate::collaborators::CodeGenerator;
use crate::error::{CoreError, CoreResult};
use crate::state::ProcessRegistry;
use crate::workflows::{GenerationOutcome, STEP_GENERATE_CODE};

/// Orchestrates one code generation: a single `generate_code` step against
/// the code-generation backend, tracked in the registry.
pub struct GenerationWorkflow {
    registry: Arc<ProcessRegistry>,
    generator: Arc<dyn CodeGenerator>,
}

impl GenerationWorkflow {
    pub fn new(registry: Arc<ProcessRegistry>, generator: Arc<dyn CodeGenerator>) -> Self {
        Self {
            registry,
            generator,
        }
    }

    /// Generate code for the given requirements.
    ///
    /// Returns a structured outcome in both the success and the
    /// backend-failure case; a backend failure finalizes the process as
    /// `Failed` and never propagates as an error.
    ///
    /// # Errors
    ///
    /// `Validation` if the description is empty (no process is created).
    /// Registry errors indicate a bug in this orchestrator.
    pub async fn execute(&self, requirements: &Requirements) -> CoreResult<GenerationOutcome> {
        if requirements.description.trim().is_empty() {
            return Err(CoreError::Validation(
                "requirements description must not be empty".to_string(),
            ));
        }

        let process_id = self.registry.create(ProcessType::CodeGeneration).await;
        tracing::info!(%process_id, "starting code generation");

        self.registry.begin_step(process_id, STEP_GENERATE_CODE).await?;

        match self.generator.generate(requirements).await {
            Ok(artifacts) => {
                self.registry
                    .end_step(process_id, STEP_GENERATE_CODE, true, None)
                    .await?;

                let records = artifacts
                    .iter()
                    .map(|artifact| {
                        json!({
                            "file_path": artifact.file_path,
                            "content": artifact.content,
                            "language": artifact.language,
                            "metadata": artifact.metadata,
                        })
                    })
                    .collect();
                self.registry.complete(process_id, records, None).await?;

                tracing::info!(%process_id, count = artifacts.len(), "code generation completed");
                Ok(GenerationOutcome {
                    success: true,
                    process_id,
                    artifacts,
                    error_message: None,
                })
            }
            Err(backend_error) => {
                let message = format!("Failed to generate code: {backend_error}");
                self.registry
                    .end_step(process_id, STEP_GENERATE_CODE, false, Some(message.clone()))
                    .await?;
                self.registry
                    .complete(process_id, Vec::new(), Some(message.clone()))
                    .await?;

                tracing::error!(%process_id, error = %message, "code generation failed");
                Ok(GenerationOutcome {
                    success: false,
                    process_id,
                    artifacts: Vec::new(),
                    error_message: Some(message),
                })
            }
        }
    }
}
