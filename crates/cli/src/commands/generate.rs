//! `vulcan generate`

use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use color_eyre::eyre::{eyre, Result};
use vulcan_core::collaborators::adapters::{CommandCodeGenerator, MockCodeGenerator};
use vulcan_core::collaborators::CodeGenerator;
use vulcan_core::state::ProcessRegistry;
use vulcan_core::workflows::GenerationWorkflow;
use vulcan_protocol::generation_models::Requirements;

use crate::console;

#[derive(Args)]
pub struct GenerateArgs {
    /// Description of the code to generate
    pub description: String,

    /// Constraint for the generated code (repeatable)
    #[arg(long = "constraint")]
    pub constraints: Vec<String>,

    /// Example of expected behavior (repeatable)
    #[arg(long = "example")]
    pub examples: Vec<String>,

    /// Directory to write generated files into
    #[arg(long, default_value = "generated")]
    pub output: PathBuf,
}

fn generator_from_env() -> Arc<dyn CodeGenerator> {
    match std::env::var("VULCAN_GENERATE_CMD") {
        Ok(command) => Arc::new(CommandCodeGenerator::new(command)),
        Err(_) => {
            console::info("VULCAN_GENERATE_CMD not set, using mock code generator");
            Arc::new(MockCodeGenerator::success())
        }
    }
}

pub async fn run(args: GenerateArgs) -> Result<()> {
    let registry = Arc::new(ProcessRegistry::new());
    let workflow = GenerationWorkflow::new(Arc::clone(&registry), generator_from_env());

    let requirements = Requirements {
        description: args.description,
        constraints: args.constraints,
        examples: args.examples,
    };

    let outcome = workflow.execute(&requirements).await?;
    console::info(&format!("process id: {}", outcome.process_id));

    if !outcome.success {
        let message = outcome
            .error_message
            .unwrap_or_else(|| "code generation failed".to_string());
        console::error(&message);
        return Err(eyre!(message));
    }

    std::fs::create_dir_all(&args.output)
        .map_err(|e| eyre!("failed to create {}: {e}", args.output.display()))?;
    for artifact in &outcome.artifacts {
        let target = args.output.join(&artifact.file_path);
        if let Some(parent) = target.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| eyre!("failed to create {}: {e}", parent.display()))?;
        }
        std::fs::write(&target, &artifact.content)
            .map_err(|e| eyre!("failed to write {}: {e}", target.display()))?;
        console::success(&format!("wrote {}", target.display()));
    }

    console::success(&format!(
        "generated {} file(s) in {}",
        outcome.artifacts.len(),
        args.output.display()
    ));
    Ok(())
}
