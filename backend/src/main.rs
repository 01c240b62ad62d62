use std::sync::Arc;

use clap::Parser;
use trail_api::{
    config::{ServerConfig, DEFAULT_LOG_FILTER},
    create_router,
    database::Database,
    handlers::ENDPOINTS,
    AppState,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::parse();

    let db = match Database::connect(&config.database_url, config.max_connections).await {
        Ok(db) => Arc::new(db),
        Err(e) => {
            tracing::error!("Trail database unavailable: {}", e);
            tracing::error!("Set DATABASE_URL, e.g. DATABASE_URL=sqlite:///srv/trails.db");
            return Err(e.into());
        }
    };

    let app = create_router(AppState { db });

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    tracing::info!("Starting trail API on http://{}", config.bind);
    tracing::info!("API endpoints:");
    for endpoint in ENDPOINTS {
        tracing::info!("  GET {}", endpoint);
    }

    axum::serve(listener, app).await?;
    Ok(())
}
