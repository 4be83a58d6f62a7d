// Main entry point - Configuration, logging and server setup
use agent_analytics_hub::build_router;
use agent_analytics_hub::infrastructure::config::load_hub_config;
use agent_analytics_hub::presentation::app_state::AppState;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing, RUST_LOG overrides the default level
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Load configuration
    let config = load_hub_config()?;
    let addr = config.server.socket_addr()?;
    let pacing = config.progress.pacing();
    tracing::debug!(
        ?pacing,
        "Dashboard loading animation takes {:?}",
        pacing.dashboard_load_time()
    );

    let router = build_router(AppState::new(pacing));

    // Start server
    tracing::info!("Starting agent-analytics-hub on {}", addr);
    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
