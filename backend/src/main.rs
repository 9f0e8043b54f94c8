//! Specialty Coffee Brewer - Backend Server
//!
//! Scores brewing recipes against method-specific reference ranges and
//! serves the web client.

use brewer_server::{create_app, AppState, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "brewer_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::load()?;

    tracing::info!("Starting Specialty Coffee Brewer");
    tracing::info!("Environment: {}", config.environment);
    tracing::info!("Serving static files from {}", config.server.static_dir);

    let addr = (config.server.host.clone(), config.server.port);
    let app = create_app(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Mulai menyeduh! Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
