//! Code generation domain models.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// User requirements for code generation.
///
/// Immutable once handed to a workflow.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Requirements {
    /// Description of the code to generate. Required, non-empty.
    pub description: String,

    /// Constraints the generated code must satisfy,
    /// e.g. "Must include type hints".
    #[serde(default)]
    pub constraints: Vec<String>,

    /// Examples of expected behavior, e.g. "factorial(5) -> 120".
    #[serde(default)]
    pub examples: Vec<String>,
}

impl Requirements {
    /// Create requirements from a bare description.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            constraints: Vec::new(),
            examples: Vec::new(),
        }
    }
}

/// A generated code artifact.
///
/// `file_path` is unique within the artifact list of one generation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CodeArtifact {
    /// Path of the generated file, relative to the output root.
    pub file_path: String,

    /// Content of the generated file.
    pub content: String,

    /// Programming language of the generated code, e.g. `"python"`.
    pub language: String,

    /// Additional metadata for the generated code.
    #[serde(default)]
    pub metadata: HashMap<String, String>,
}

/// Metadata about one generation run.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CodeMetadata {
    /// When the code was generated, RFC 3339.
    pub generation_timestamp: String,

    /// Which model produced the code.
    pub model_used: String,

    /// Prompt tokens consumed.
    pub prompt_tokens: u64,

    /// Completion tokens consumed.
    pub completion_tokens: u64,

    /// Backend-specific extras.
    #[serde(default)]
    pub additional_info: HashMap<String, String>,
}
