pub mod config;
pub mod cors;
pub mod database;
pub mod error;
pub mod gpx_export;
pub mod gpx_import;
pub mod handlers;
pub mod models;

use std::sync::Arc;

use axum::{middleware, routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::database::Database;

#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Database>,
}

/// Build the API router. Non-GET methods on known paths and unknown paths
/// both fall through to the endpoint index. Everything under `/api/trail/`
/// goes to `get_trail`, which reads the id from the raw path itself.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/health",
            get(handlers::health).fallback(handlers::api_index),
        )
        .route(
            "/api/trails",
            get(handlers::list_trails).fallback(handlers::api_index),
        )
        .route(
            "/api/trail/",
            get(handlers::get_trail).fallback(handlers::api_index),
        )
        .route(
            "/api/trail/*rest",
            get(handlers::get_trail).fallback(handlers::api_index),
        )
        .route(
            "/api/gpx",
            get(handlers::export_gpx).fallback(handlers::api_index),
        )
        .fallback(handlers::api_index)
        .layer(middleware::from_fn(cors::cors))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
