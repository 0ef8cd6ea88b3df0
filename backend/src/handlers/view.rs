//! View shell handlers

use axum::{extract::State, Json};

use crate::error::AppResult;
use crate::services::view::{UpdateViewInput, ViewShell};
use crate::services::ViewService;
use crate::AppState;

/// Current view, selection and sidebar
pub async fn get_view(State(state): State<AppState>) -> AppResult<Json<ViewShell>> {
    let service = ViewService::new(state.store.clone(), &state.config);
    Ok(Json(service.get_view().await?))
}

/// Navigate or change the selected field
pub async fn update_view(
    State(state): State<AppState>,
    Json(input): Json<UpdateViewInput>,
) -> AppResult<Json<ViewShell>> {
    let service = ViewService::new(state.store.clone(), &state.config);
    Ok(Json(service.update_view(input).await?))
}
