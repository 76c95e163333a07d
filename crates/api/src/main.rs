use vulcan_api::config::ApiConfig;
use vulcan_api::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = ApiConfig::from_env()?;
    let state = AppState::from_config(&config)?;
    let app = vulcan_api::router(state);

    tracing::info!(addr = %config.bind_addr, "vulcan-api listening");
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
