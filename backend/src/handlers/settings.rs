//! Settings HTTP handlers

use axum::{extract::State, Json};
use shared::Settings;

use crate::error::AppResult;
use crate::services::settings::UpdateSettingsInput;
use crate::services::SettingsService;
use crate::AppState;

pub async fn get_settings(State(state): State<AppState>) -> AppResult<Json<Settings>> {
    let service = SettingsService::new(state.store.clone());
    Ok(Json(service.get_settings().await?))
}

pub async fn update_settings(
    State(state): State<AppState>,
    Json(input): Json<UpdateSettingsInput>,
) -> AppResult<Json<Settings>> {
    let service = SettingsService::new(state.store.clone());
    Ok(Json(service.update_settings(input).await?))
}
