//! Route definitions for the AgriDash API

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Mock login
        .nest("/auth", auth_routes())
        // View shell
        .route("/view", get(handlers::get_view).put(handlers::update_view))
        // Field management
        .nest("/fields", field_routes())
        // Sensor placement
        .nest("/sensors", sensor_routes())
        // Weather and frost monitor
        .nest("/weather", weather_routes())
        // BBCH and growth
        .nest("/phenology", phenology_routes())
        // Plant analysis
        .route("/analysis", get(handlers::get_analysis))
        // Notifications
        .nest("/notifications", notification_routes())
        // Reports and exports
        .nest("/reports", reporting_routes())
        // Settings
        .route(
            "/settings",
            get(handlers::get_settings).put(handlers::update_settings),
        )
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new().route("/login", post(handlers::login))
}

/// Field management routes
fn field_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_fields).post(handlers::create_field))
        .route(
            "/:field_id",
            get(handlers::get_field)
                .put(handlers::update_field)
                .delete(handlers::delete_field),
        )
}

/// Sensor routes
fn sensor_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_sensors).post(handlers::create_sensor))
        .route(
            "/:sensor_id",
            get(handlers::get_sensor).delete(handlers::delete_sensor),
        )
}

/// Weather routes
fn weather_routes() -> Router<AppState> {
    Router::new()
        .route("/forecast", get(handlers::get_forecast))
        .route("/frost", get(handlers::get_frost_outlook))
}

/// Phenology routes
fn phenology_routes() -> Router<AppState> {
    Router::new()
        .route("/bbch", get(handlers::get_bbch))
        .route("/bbch/feedback", post(handlers::submit_bbch_feedback))
        .route("/growth", get(handlers::get_growth))
}

/// Notification routes
fn notification_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::get_notifications))
        .route("/unread-count", get(handlers::get_unread_count))
}

/// Reporting routes
fn reporting_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::get_report))
        .route("/export.csv", get(handlers::export_csv))
        .route("/export.pdf", get(handlers::export_pdf))
}
