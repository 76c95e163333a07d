//! Process registry for coordinating concurrent process tracking.
//!
//! The registry is the central record keeper for all generation, testing,
//! and deployment processes. It owns every `ProcessState` after creation;
//! workflows hold only the process id and call back into the registry to
//! record progress, and readers receive cloned snapshots they can never
//! mutate through.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::Mutex;
use uuid::Uuid;
use vulcan_protocol::process_models::{ProcessState, ProcessStatus, ProcessStep, ProcessType};

use crate::error::{CoreError, CoreResult};

/// Single source of truth mapping `process_id -> ProcessState`.
///
/// The outer map lock is held only long enough to look up or insert a record;
/// each record carries its own mutex, so mutations to one process never block
/// readers or writers of unrelated processes.
///
/// One process is advanced by exactly one workflow instance, but any number
/// of readers may poll any process concurrently with its writer.
pub struct ProcessRegistry {
    /// Registry of all processes, indexed by their UUID.
    ///
    /// Uses Arc<Mutex<ProcessState>> per record so mutation of one process
    /// proceeds independently of the rest of the map.
    processes: Mutex<HashMap<Uuid, Arc<Mutex<ProcessState>>>>,
}

impl ProcessRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            processes: Mutex::new(HashMap::new()),
        }
    }

    /// Create a new process record and return its id.
    ///
    /// The record starts with `NotStarted` status, the current time as
    /// `start_time`, and empty steps, artifacts, and errors.
    pub async fn create(&self, process_type: ProcessType) -> Uuid {
        let state = ProcessState::new(process_type);
        let process_id = state.process_id;

        let mut processes = self.processes.lock().await;
        processes.insert(process_id, Arc::new(Mutex::new(state)));

        process_id
    }

    /// Look up the shared record for a process.
    ///
    /// The outer map lock is released before the caller locks the record.
    async fn record(&self, process_id: Uuid) -> CoreResult<Arc<Mutex<ProcessState>>> {
        let processes = self.processes.lock().await;
        processes
            .get(&process_id)
            .cloned()
            .ok_or_else(|| CoreError::NotFound(format!("Process not found: {process_id}")))
    }

    /// Append a step with `InProgress` status and the current time.
    ///
    /// If the process has not started yet it transitions to `InProgress`
    /// first, so the status never skips a state.
    ///
    /// # Errors
    ///
    /// `NotFound` if the process id is unknown; `InvalidState` if the
    /// process is already terminal.
    pub async fn begin_step(&self, process_id: Uuid, step_name: &str) -> CoreResult<()> {
        let record = self.record(process_id).await?;
        let mut state = record.lock().await;

        if state.status.is_terminal() {
            return Err(CoreError::InvalidState(format!(
                "Process {process_id} is already {} and cannot start step '{step_name}'",
                state.status.as_str()
            )));
        }

        if state.status == ProcessStatus::NotStarted {
            state.status = ProcessStatus::InProgress;
        }

        state.steps.push(ProcessStep {
            name: step_name.to_string(),
            status: ProcessStatus::InProgress,
            start_time: Utc::now(),
            end_time: None,
        });

        Ok(())
    }

    /// Close the most recent open step with the given name.
    ///
    /// Sets the step's status to `Completed` or `Failed` and its `end_time`
    /// to the current time. When `success` is false, `error` (if any) is
    /// appended to the process's errors.
    ///
    /// # Errors
    ///
    /// `NotFound` if the process id is unknown or no open step with that
    /// name exists; `InvalidState` if the process is already terminal. The
    /// process state is left unchanged in either case.
    pub async fn end_step(
        &self,
        process_id: Uuid,
        step_name: &str,
        success: bool,
        error: Option<String>,
    ) -> CoreResult<()> {
        let record = self.record(process_id).await?;
        let mut state = record.lock().await;

        // A finalized record may still hold an open step if the process was
        // completed mid-step; it must stay untouched regardless.
        if state.status.is_terminal() {
            return Err(CoreError::InvalidState(format!(
                "Process {process_id} is already {} and cannot end step '{step_name}'",
                state.status.as_str()
            )));
        }

        let step = state
            .steps
            .iter_mut()
            .rev()
            .find(|step| step.name == step_name && step.status == ProcessStatus::InProgress)
            .ok_or_else(|| {
                CoreError::NotFound(format!(
                    "Process {process_id} has no open step named '{step_name}'"
                ))
            })?;

        step.status = if success {
            ProcessStatus::Completed
        } else {
            ProcessStatus::Failed
        };
        step.end_time = Some(Utc::now());

        if !success {
            if let Some(error) = error {
                state.errors.push(error);
            }
        }

        Ok(())
    }

    /// Finalize a process.
    ///
    /// Sets the status to `Completed` when `error_message` is `None`, else
    /// `Failed`; sets `end_time`; stores the artifacts. The error message is
    /// appended to the process's errors unless the failed step already
    /// recorded the same message.
    ///
    /// # Errors
    ///
    /// `NotFound` if the process id is unknown; `InvalidState` if the
    /// process is already terminal (double finalization) or has not started.
    pub async fn complete(
        &self,
        process_id: Uuid,
        artifacts: Vec<serde_json::Value>,
        error_message: Option<String>,
    ) -> CoreResult<()> {
        let record = self.record(process_id).await?;
        let mut state = record.lock().await;

        if state.status.is_terminal() {
            return Err(CoreError::InvalidState(format!(
                "Process {process_id} is already {}",
                state.status.as_str()
            )));
        }
        if state.status == ProcessStatus::NotStarted {
            return Err(CoreError::InvalidState(format!(
                "Process {process_id} cannot be finalized before any step has started"
            )));
        }

        match error_message {
            None => state.status = ProcessStatus::Completed,
            Some(message) => {
                state.status = ProcessStatus::Failed;
                if state.errors.last() != Some(&message) {
                    state.errors.push(message);
                }
            }
        }

        state.end_time = Some(Utc::now());
        state.artifacts = artifacts;

        Ok(())
    }

    /// Get a consistent snapshot of a process, or `None` if unknown.
    ///
    /// The snapshot is a deep clone; mutating it never affects the stored
    /// state.
    pub async fn get(&self, process_id: Uuid) -> Option<ProcessState> {
        let record = {
            let processes = self.processes.lock().await;
            processes.get(&process_id).cloned()
        };

        match record {
            Some(record) => {
                let state = record.lock().await;
                Some(state.clone())
            }
            None => None,
        }
    }

    /// Snapshots of all processes, in no particular order.
    pub async fn list(&self) -> Vec<ProcessState> {
        let records: Vec<Arc<Mutex<ProcessState>>> = {
            let processes = self.processes.lock().await;
            processes.values().cloned().collect()
        };

        let mut result = Vec::with_capacity(records.len());
        for record in records {
            let state = record.lock().await;
            result.push(state.clone());
        }

        result
    }

    /// The number of tracked processes.
    pub async fn count(&self) -> usize {
        let processes = self.processes.lock().await;
        processes.len()
    }
}

impl Default for ProcessRegistry {
    fn default() -> Self {
        Self::new()
    }
}
