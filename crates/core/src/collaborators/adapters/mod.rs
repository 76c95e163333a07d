//! Collaborator adapter implementations.
//!
//! - [`mock`]: In-memory adapters used by tests and by unconfigured local
//!   development setups.
//! - [`command`]: Adapters that hand work to an external command over
//!   stdin/stdout JSON.
//! - [`github`]: Repository adapter backed by the GitHub REST API.

pub mod command;
pub mod github;
pub mod mock;

pub use command::{CommandCodeGenerator, CommandTestRunner};
pub use github::GitHubClient;
pub use mock::{MockCodeGenerator, MockRepositoryClient, MockTestRunner};
