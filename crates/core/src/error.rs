//! Error taxonomy for the core crate.
//!
//! The registry raises `NotFound`/`InvalidState` synchronously; workflows
//! convert collaborator failures into a finalized `Failed` process instead of
//! propagating them, so front-ends only ever see structured results or one of
//! these variants.

use thiserror::Error;

use crate::collaborators::CollaboratorError;

/// Errors surfaced by the registry and the workflow orchestrators.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Malformed or missing input, caught before any process is created.
    #[error("Invalid input: {0}")]
    Validation(String),

    /// Unknown process id, or a step-end without a matching open step.
    #[error("Not found: {0}")]
    NotFound(String),

    /// An operation attempted against a process already in a terminal state.
    ///
    /// Indicates a programming error in the orchestrator, not a recoverable
    /// business condition.
    #[error("Invalid process state: {0}")]
    InvalidState(String),

    /// A failure from an external backend.
    #[error(transparent)]
    Collaborator(#[from] CollaboratorError),
}

/// Type alias for Result with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;
