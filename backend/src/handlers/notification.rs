//! Notification HTTP handlers

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::services::NotificationService;
use crate::AppState;

/// Derived notifications, frost alert first
pub async fn get_notifications(State(state): State<AppState>) -> impl IntoResponse {
    let service = NotificationService::new(state.store.clone(), &state.config);

    match service.get_notifications().await {
        Ok(notifications) => (
            StatusCode::OK,
            Json(serde_json::json!({ "notifications": notifications })),
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn get_unread_count(State(state): State<AppState>) -> impl IntoResponse {
    let service = NotificationService::new(state.store.clone(), &state.config);

    match service.get_unread_count().await {
        Ok(count) => (StatusCode::OK, Json(count)).into_response(),
        Err(e) => e.into_response(),
    }
}
