//! `vulcan` command-line front-end.
//!
//! `generate`, `test` and `deploy` run the core workflows in-process with an
//! in-memory registry; `status` polls a running API server over HTTP, since
//! an in-process registry does not outlive the invocation that created it.

mod api_client;
mod commands;
mod console;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "vulcan")]
#[command(about = "Autonomous coding agent: generate, test and deploy code")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate code from a requirements description
    Generate(commands::generate::GenerateArgs),
    /// Run tests against a code bundle
    Test(commands::test::TestArgs),
    /// Deploy a code bundle to a repository
    Deploy(commands::deploy::DeployArgs),
    /// Poll the status of a process on a running API server
    Status(commands::status::StatusArgs),
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    match cli.command {
        Command::Generate(args) => commands::generate::run(args).await,
        Command::Test(args) => commands::test::run(args).await,
        Command::Deploy(args) => commands::deploy::run(args).await,
        Command::Status(args) => commands::status::run(args).await,
    }
}
