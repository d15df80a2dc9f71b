//! Vendra API Server
//!
//! Main entry point for the Vendra backend service.

use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vendra_api::{AppState, create_router};
use vendra_db::{LookupRepository, connect};
use vendra_shared::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vendra=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load().context("Failed to load configuration")?;

    // Connect to database
    let db = connect(&config.database.url).await?;
    info!("Connected to database");

    // Resolve the "N/A" lookup rows; a database without them is
    // misconfigured and the server refuses to start
    let sentinels = LookupRepository::new(db.clone())
        .resolve_sentinels()
        .await
        .context("Required \"N/A\" lookup rows are missing; run the migrator")?;
    info!(
        product_type_na = %sentinels.product_type_na,
        payment_method_na = %sentinels.payment_method_na,
        "Sentinel lookup rows resolved"
    );

    // Create application state
    let state = AppState {
        db: Arc::new(db),
        sentinels,
    };

    // Create router
    let app = create_router(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
