//! AgriDash - Backend Server
//!
//! Farm monitoring dashboard for fields, sensors, frost risk, plant growth
//! stages and sensor reports. All state is held in memory and seeded from
//! mock data when the server starts.

use std::sync::Arc;

use axum::{routing::get, Router};
use chrono::Utc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod seed;
pub mod services;
pub mod store;

pub use config::Config;
pub use store::DashboardStore;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub store: DashboardStore,
    pub config: Arc<Config>,
}

impl AppState {
    /// Build the state with a freshly seeded store
    pub fn new(config: Config) -> Self {
        let data = seed::seed(Utc::now(), config.alerts.frost_threshold_celsius);
        Self {
            store: DashboardStore::new(data),
            config: Arc::new(config),
        }
    }
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "AgriDash API v1.0"
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
