//! `vulcan status`

use clap::Args;
use color_eyre::eyre::{eyre, Result};

use crate::api_client::StatusClient;
use crate::console;

#[derive(Args)]
pub struct StatusArgs {
    /// Process id to look up; omit to list all processes
    pub process_id: Option<String>,

    /// Base URL of the API server
    #[arg(long, default_value = "http://localhost:8000")]
    pub api_url: String,

    /// API key, falls back to VULCAN_API_KEY then the development default
    #[arg(long)]
    pub api_key: Option<String>,
}

fn resolve_api_key(flag: Option<String>) -> String {
    flag.or_else(|| std::env::var("VULCAN_API_KEY").ok())
        .unwrap_or_else(|| "development-api-key".to_string())
}

pub async fn run(args: StatusArgs) -> Result<()> {
    let client = StatusClient::new(&args.api_url, resolve_api_key(args.api_key))?;

    match args.process_id {
        Some(process_id) => match client.fetch_status(&process_id).await? {
            Some(status) => {
                console::render_status(&status);
                Ok(())
            }
            None => {
                console::error(&format!("process {process_id} not found"));
                Err(eyre!("process {process_id} not found"))
            }
        },
        None => {
            let statuses = client.fetch_all().await?;
            if statuses.is_empty() {
                console::info("no processes tracked");
                return Ok(());
            }
            for (i, status) in statuses.iter().enumerate() {
                if i > 0 {
                    println!();
                }
                console::render_status(status);
            }
            Ok(())
        }
    }
}
