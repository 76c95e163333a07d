//! External collaborator traits and adapters.
//!
//! The workflows delegate the real work (generating code, executing tests,
//! pushing to a repository) to external backends behind the traits in
//! [`base`]. Adapters live in [`adapters`].

pub mod adapters;
pub mod base;

pub use base::{
    CodeGenerator, CollaboratorError, PushOutcome, RepositoryClient, TestRun, TestRunner,
};
