//! Interview Orchestrator
//!
//! Main application entry point

use tracing::{info, warn};

use interview_orchestrator::{
    config::Settings,
    create_router,
    utils::logging,
    AppState, ServiceFactory,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new()?;
    settings.validate()?;

    // Initialize logging; the guard flushes file logs on exit
    let _log_guard = logging::init_logging(&settings.logging)?;

    info!("Starting {} ({})...", interview_orchestrator::info(), settings.app.environment);

    // Initialize services
    let services = ServiceFactory::new(&settings).await?;
    let health = services.health_check().await;
    for issue in health.get_issues() {
        warn!(issue = %issue, "Startup health check reported an issue");
    }

    let bind_address = settings.server.bind_address();
    let api_prefix = settings.server.api_prefix.clone();
    let app = create_router(AppState::new(services, settings));

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    info!(address = %bind_address, api_prefix = %api_prefix, "HTTP server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Interview orchestrator has been shut down.");
    Ok(())
}

/// Resolve when the process receives Ctrl-C
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
