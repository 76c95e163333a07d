//! Process state tracking.
//!
//! This module provides the [`ProcessRegistry`], the single source of truth
//! mapping process ids to their tracked state.

pub mod registry;

pub use registry::ProcessRegistry;
