use eyre::Result;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use navtrail_server::build_router;
use navtrail_server::config::ServerConfig;
use navtrail_server::state::AppState;
use navtrail_storage::seed::seed_demo;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    // Structured JSON logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    let config = ServerConfig::from_env()?;
    let state = AppState::from_config(&config).await?;

    if config.seed_demo {
        let log = seed_demo(&state.store).await?;
        info!(log_id = %log.id, title = %log.title, "demo log seeded");
    }

    let listener = TcpListener::bind((config.host.as_str(), config.port)).await?;
    info!(addr = %listener.local_addr()?, "navtrail server listening");

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
