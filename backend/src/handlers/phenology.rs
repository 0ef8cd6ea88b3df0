//! Phenology and plant analysis handlers

use axum::{
    extract::{Query, State},
    Json,
};

use crate::error::AppResult;
use crate::handlers::FieldQuery;
use crate::services::phenology::{
    BbchFeedbackAck, BbchFeedbackInput, BbchView, GrowthView, PlantAnalysis,
};
use crate::services::PhenologyService;
use crate::AppState;

pub async fn get_bbch(
    State(state): State<AppState>,
    Query(query): Query<FieldQuery>,
) -> AppResult<Json<BbchView>> {
    let service = PhenologyService::new(state.store.clone());
    Ok(Json(service.get_bbch(query.field).await?))
}

pub async fn get_growth(
    State(state): State<AppState>,
    Query(query): Query<FieldQuery>,
) -> AppResult<Json<GrowthView>> {
    let service = PhenologyService::new(state.store.clone());
    Ok(Json(service.get_growth(query.field).await?))
}

/// Stage correction from the grower
pub async fn submit_bbch_feedback(
    State(state): State<AppState>,
    Json(input): Json<BbchFeedbackInput>,
) -> AppResult<Json<BbchFeedbackAck>> {
    let service = PhenologyService::new(state.store.clone());
    Ok(Json(service.submit_feedback(input).await?))
}

/// Plant analysis KPIs
pub async fn get_analysis(
    State(state): State<AppState>,
    Query(query): Query<FieldQuery>,
) -> AppResult<Json<PlantAnalysis>> {
    let service = PhenologyService::new(state.store.clone());
    Ok(Json(service.get_analysis(query.field).await?))
}
