//! Concurrency tests for the process registry.
//!
//! These exercise the registry from many tasks at once: id uniqueness under
//! a burst of creates, and snapshot consistency while a writer is mutating
//! the same record.

use std::collections::HashSet;
use std::sync::Arc;

use vulcan_core::state::ProcessRegistry;
use vulcan_protocol::process_models::{ProcessStatus, ProcessType};

#[tokio::test]
async fn test_concurrent_creates_yield_distinct_ids() {
    let registry = Arc::new(ProcessRegistry::new());

    let mut handles = Vec::with_capacity(10_000);
    for _ in 0..10_000 {
        let registry = Arc::clone(&registry);
        handles.push(tokio::spawn(async move {
            registry.create(ProcessType::Testing).await
        }));
    }

    let mut ids = HashSet::with_capacity(10_000);
    for handle in handles {
        let id = handle.await.expect("task should not panic");
        assert!(ids.insert(id), "duplicate process id {id}");
    }

    assert_eq!(registry.count().await, 10_000);
}

#[tokio::test]
async fn test_snapshots_stay_consistent_while_writer_is_active() {
    let registry = Arc::new(ProcessRegistry::new());
    let process_id = registry.create(ProcessType::CodeGeneration).await;

    let writer = {
        let registry = Arc::clone(&registry);
        tokio::spawn(async move {
            for i in 0..200 {
                let step = format!("step_{i}");
                registry
                    .begin_step(process_id, &step)
                    .await
                    .expect("begin_step should succeed");
                tokio::task::yield_now().await;
                registry
                    .end_step(process_id, &step, true, None)
                    .await
                    .expect("end_step should succeed");
            }
        })
    };

    let reader = {
        let registry = Arc::clone(&registry);
        tokio::spawn(async move {
            let mut last_len = 0;
            for _ in 0..500 {
                let state = registry.get(process_id).await.expect("process exists");

                // Every observed snapshot must be internally consistent: a
                // step with no end time is still in progress, and a finished
                // step carries a terminal status.
                for step in &state.steps {
                    match step.end_time {
                        None => assert_eq!(step.status, ProcessStatus::InProgress),
                        Some(_) => assert!(step.status.is_terminal()),
                    }
                }

                // Steps are append-only.
                assert!(state.steps.len() >= last_len);
                last_len = state.steps.len();

                tokio::task::yield_now().await;
            }
        })
    };

    writer.await.expect("writer should not panic");
    reader.await.expect("reader should not panic");

    let state = registry.get(process_id).await.expect("process exists");
    assert_eq!(state.steps.len(), 200);
    assert_eq!(state.status, ProcessStatus::InProgress);
}

#[tokio::test]
async fn test_snapshot_is_detached_from_live_record() {
    let registry = ProcessRegistry::new();
    let process_id = registry.create(ProcessType::Deployment).await;

    let before = registry.get(process_id).await.expect("process exists");
    registry
        .begin_step(process_id, "push_to_repository")
        .await
        .expect("begin_step should succeed");

    // The earlier snapshot must not reflect the later mutation.
    assert!(before.steps.is_empty());
    assert_eq!(before.status, ProcessStatus::NotStarted);

    let after = registry.get(process_id).await.expect("process exists");
    assert_eq!(after.steps.len(), 1);
    assert_eq!(after.status, ProcessStatus::InProgress);
}
