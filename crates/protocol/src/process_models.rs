//! Runtime process state models.
//!
//! This module defines the structures for tracking the state of running
//! generation, testing, and deployment processes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents the current lifecycle status of a process or step.
///
/// The status progresses through these states during normal execution:
/// NotStarted -> InProgress -> Completed
///
/// `Completed` and `Failed` are terminal: a process in either state is
/// never mutated again.
///
/// The wire representation is a fixed snake_case string
/// (`"not_started"`, `"in_progress"`, `"completed"`, `"failed"`).
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ProcessStatus {
    /// Process has been created but no step has begun yet.
    NotStarted,

    /// Process is actively executing.
    InProgress,

    /// Process has completed successfully.
    Completed,

    /// Process has failed due to an error.
    Failed,
}

impl ProcessStatus {
    /// Whether the status permits no further transitions.
    pub fn is_terminal(self) -> bool {
        matches!(self, ProcessStatus::Completed | ProcessStatus::Failed)
    }

    /// The wire-format name of this status.
    pub fn as_str(self) -> &'static str {
        match self {
            ProcessStatus::NotStarted => "not_started",
            ProcessStatus::InProgress => "in_progress",
            ProcessStatus::Completed => "completed",
            ProcessStatus::Failed => "failed",
        }
    }
}

/// The kind of work a process performs.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ProcessType {
    /// Generating code from natural-language requirements.
    CodeGeneration,

    /// Running tests against a code bundle.
    Testing,

    /// Deploying a code bundle to a source-control repository.
    Deployment,
}

impl ProcessType {
    /// The wire-format name of this process type.
    pub fn as_str(self) -> &'static str {
        match self {
            ProcessType::CodeGeneration => "code_generation",
            ProcessType::Testing => "testing",
            ProcessType::Deployment => "deployment",
        }
    }
}

/// One named unit of work within a process.
///
/// A step is appended when its unit of work begins and is closed (status and
/// `end_time` set) when the unit of work finishes or fails. Steps are never
/// reordered or removed.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ProcessStep {
    /// Name of the step, e.g. `"generate_code"`.
    pub name: String,

    /// Current status of the step.
    pub status: ProcessStatus,

    /// When the step began.
    pub start_time: DateTime<Utc>,

    /// When the step finished or failed. `None` while the step is open.
    pub end_time: Option<DateTime<Utc>>,
}

/// Represents the tracked state of a single process execution.
///
/// Each time a generation, testing, or deployment operation is started, a new
/// `ProcessState` is created with a unique id and tracked by the registry
/// throughout its lifecycle.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ProcessState {
    /// Unique identifier for this process execution.
    ///
    /// Assigned at creation and never changed.
    pub process_id: Uuid,

    /// The kind of work this process performs.
    pub process_type: ProcessType,

    /// Current execution status.
    ///
    /// Transitions only along `NotStarted -> InProgress -> {Completed, Failed}`.
    pub status: ProcessStatus,

    /// When the process was created.
    pub start_time: DateTime<Utc>,

    /// When the process reached a terminal state. Set if and only if
    /// `status` is `Completed` or `Failed`.
    pub end_time: Option<DateTime<Utc>>,

    /// Steps in execution order. Append-only.
    pub steps: Vec<ProcessStep>,

    /// Artifacts produced by the process, as opaque key-value records.
    pub artifacts: Vec<serde_json::Value>,

    /// Errors recorded while the process ran. Non-empty implies the process
    /// ends up `Failed`.
    pub errors: Vec<String>,
}

impl ProcessState {
    /// Create a fresh process record with `NotStarted` status and no steps.
    pub fn new(process_type: ProcessType) -> Self {
        Self {
            process_id: Uuid::new_v4(),
            process_type,
            status: ProcessStatus::NotStarted,
            start_time: Utc::now(),
            end_time: None,
            steps: Vec::new(),
            artifacts: Vec::new(),
            errors: Vec::new(),
        }
    }
}
