//! # vulcan-protocol
//!
//! Core protocol definitions and data models for vulcan.
//!
//! This crate defines all shared data structures used for:
//! - Runtime process state tracking (processes, steps, statuses)
//! - Code generation, testing, and deployment domain objects
//! - Request/response models shared by the HTTP API and the CLI
//!
//! ## Modules
//!
//! - [`process_models`]: Runtime process state and status
//! - [`generation_models`]: Requirements and generated code artifacts
//! - [`testing_models`]: Test cases, results, and coverage
//! - [`deployment_models`]: Deployment configuration and status
//! - [`api_models`]: Wire-format request/response structures
//!
//! ## Design Principles
//!
//! - Minimal dependencies: Only serde, serde_json, uuid, and chrono
//! - Closed enums with explicit string mappings, tested in
//!   `tests/serialization.rs`
//! - Independent compilation: No dependencies on other vulcan crates

pub mod api_models;
pub mod deployment_models;
pub mod generation_models;
pub mod process_models;
pub mod testing_models;

// Re-export all public types for convenience
pub use api_models::*;
pub use deployment_models::*;
pub use generation_models::*;
pub use process_models::*;
pub use testing_models::*;
