//! Sensor HTTP handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::handlers::FieldQuery;
use crate::services::sensor::{CreateSensorInput, SensorService};
use crate::AppState;

/// List sensors of a field, all fields, or the current selection
pub async fn list_sensors(
    State(state): State<AppState>,
    Query(query): Query<FieldQuery>,
) -> impl IntoResponse {
    let service = SensorService::new(state.store.clone());

    match service.list_sensors(query.field).await {
        Ok(sensors) => {
            (StatusCode::OK, Json(serde_json::json!({ "sensors": sensors }))).into_response()
        }
        Err(e) => e.into_response(),
    }
}

pub async fn get_sensor(
    State(state): State<AppState>,
    Path(sensor_id): Path<String>,
) -> impl IntoResponse {
    let service = SensorService::new(state.store.clone());

    match service.get_sensor(&sensor_id).await {
        Ok(sensor) => (StatusCode::OK, Json(sensor)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Place a sensor in the selected field
pub async fn create_sensor(
    State(state): State<AppState>,
    Json(input): Json<CreateSensorInput>,
) -> impl IntoResponse {
    let service = SensorService::new(state.store.clone());

    match service.create_sensor(input).await {
        Ok(sensor) => (StatusCode::CREATED, Json(sensor)).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn delete_sensor(
    State(state): State<AppState>,
    Path(sensor_id): Path<String>,
) -> impl IntoResponse {
    let service = SensorService::new(state.store.clone());

    match service.delete_sensor(&sensor_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => e.into_response(),
    }
}
