//! Environment-driven server configuration.

use std::net::SocketAddr;

const DEFAULT_API_KEY: &str = "development-api-key";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";

/// Runtime configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Shared secret expected in the `X-API-Key` header.
    pub api_key: String,
    /// Address the HTTP server binds to.
    pub bind_addr: SocketAddr,
    /// External command used for code generation, if configured.
    pub generate_command: Option<String>,
    /// External command used for running tests, if configured.
    pub test_command: Option<String>,
    /// GitHub token for real deployments, if configured.
    pub github_token: Option<String>,
}

impl ApiConfig {
    /// Read configuration from the environment, falling back to development
    /// defaults for the key and bind address.
    pub fn from_env() -> anyhow::Result<Self> {
        let api_key =
            std::env::var("VULCAN_API_KEY").unwrap_or_else(|_| DEFAULT_API_KEY.to_string());
        let bind_addr = std::env::var("VULCAN_BIND_ADDR")
            .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| anyhow::anyhow!("invalid VULCAN_BIND_ADDR: {e}"))?;

        Ok(Self {
            api_key,
            bind_addr,
            generate_command: std::env::var("VULCAN_GENERATE_CMD").ok(),
            test_command: std::env::var("VULCAN_TEST_CMD").ok(),
            github_token: std::env::var("GITHUB_TOKEN").ok(),
        })
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            api_key: DEFAULT_API_KEY.to_string(),
            // The default literal always parses.
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8000)),
            generate_command: None,
            test_command: None,
            github_token: None,
        }
    }
}
