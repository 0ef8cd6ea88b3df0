//! Weather HTTP handlers

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use shared::{FrostOutlook, WeatherSample};

use crate::error::AppResult;
use crate::services::WeatherService;
use crate::AppState;

#[derive(Deserialize)]
pub struct ForecastQuery {
    pub limit: Option<usize>,
}

/// Hourly forecast
pub async fn get_forecast(
    State(state): State<AppState>,
    Query(query): Query<ForecastQuery>,
) -> AppResult<Json<Vec<WeatherSample>>> {
    let service = WeatherService::new(state.store.clone());
    let forecast = service.get_forecast(query.limit).await?;
    Ok(Json(forecast))
}

/// Frost monitor summary
pub async fn get_frost_outlook(State(state): State<AppState>) -> AppResult<Json<FrostOutlook>> {
    let service = WeatherService::new(state.store.clone());
    let outlook = service.get_frost_outlook().await?;
    Ok(Json(outlook))
}
