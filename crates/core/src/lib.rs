//! # vulcan-core
//!
//! Process tracking and workflow orchestration for vulcan.
//!
//! This crate provides:
//! - The process registry: the single source of truth for process state
//! - Collaborator traits and adapters for the external generation, testing,
//!   and deployment backends
//! - The three workflow orchestrators that sequence collaborator calls and
//!   record progress in the registry
//!
//! ## Modules
//!
//! - [`state`]: Process registry and lifecycle tracking
//! - [`collaborators`]: Backend traits and adapter implementations
//! - [`workflows`]: Generation, testing, and deployment orchestrators
//! - [`error`]: Error taxonomy shared across the crate

pub mod collaborators;
pub mod error;
pub mod state;
pub mod workflows;
