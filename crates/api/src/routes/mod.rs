//! Route handlers, one module per API surface.

pub mod deployment;
pub mod generation;
pub mod health;
pub mod status;
pub mod testing;
