//! Field management HTTP handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::services::field::{CreateFieldInput, FieldService, UpdateFieldInput};
use crate::AppState;

/// List all fields
pub async fn list_fields(State(state): State<AppState>) -> impl IntoResponse {
    let service = FieldService::new(state.store.clone(), &state.config);

    match service.list_fields().await {
        Ok(fields) => (StatusCode::OK, Json(serde_json::json!({ "fields": fields }))).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Get a field with its sensors and BBCH estimate
pub async fn get_field(
    State(state): State<AppState>,
    Path(field_id): Path<String>,
) -> impl IntoResponse {
    let service = FieldService::new(state.store.clone(), &state.config);

    match service.get_field(&field_id).await {
        Ok(field) => (StatusCode::OK, Json(field)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Create a field from a map click or the form
pub async fn create_field(
    State(state): State<AppState>,
    Json(input): Json<CreateFieldInput>,
) -> impl IntoResponse {
    let service = FieldService::new(state.store.clone(), &state.config);

    match service.create_field(input).await {
        Ok(field) => (StatusCode::CREATED, Json(field)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Rename or recolour a field
pub async fn update_field(
    State(state): State<AppState>,
    Path(field_id): Path<String>,
    Json(input): Json<UpdateFieldInput>,
) -> impl IntoResponse {
    let service = FieldService::new(state.store.clone(), &state.config);

    match service.update_field(&field_id, input).await {
        Ok(field) => (StatusCode::OK, Json(field)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Delete a field
pub async fn delete_field(
    State(state): State<AppState>,
    Path(field_id): Path<String>,
) -> impl IntoResponse {
    let service = FieldService::new(state.store.clone(), &state.config);

    match service.delete_field(&field_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => e.into_response(),
    }
}
