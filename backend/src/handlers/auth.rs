//! Authentication handlers

use axum::{extract::State, Json};

use crate::error::AppResult;
use crate::services::auth::{LoginInput, LoginResponse};
use crate::services::AuthService;
use crate::AppState;

/// Login endpoint handler
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginInput>,
) -> AppResult<Json<LoginResponse>> {
    let auth_service = AuthService::new(&state.config);
    let response = auth_service.login(body).await?;
    Ok(Json(response))
}
