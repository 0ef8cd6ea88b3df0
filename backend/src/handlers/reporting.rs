//! Reporting handlers for the sensor table and its exports

use axum::{
    extract::{Query, State},
    http::header,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use shared::{ReportFilter, SensorType};

use crate::error::{AppError, AppResult};
use crate::services::reporting::ReportTable;
use crate::services::ReportingService;
use crate::AppState;

#[derive(Deserialize)]
pub struct ReportQuery {
    pub search: Option<String>,
    #[serde(rename = "type")]
    pub sensor_type: Option<String>, // "all" or a sensor type tag
}

impl ReportQuery {
    fn into_filter(self) -> AppResult<ReportFilter> {
        let sensor_type = match self.sensor_type.as_deref().map(str::trim) {
            None | Some("") | Some("all") => None,
            Some(tag) => Some(
                tag.parse::<SensorType>()
                    .map_err(|e| AppError::invalid("type", &e.to_string()))?,
            ),
        };
        Ok(ReportFilter {
            search: self.search,
            sensor_type,
        })
    }
}

/// Filtered report table
pub async fn get_report(
    State(state): State<AppState>,
    Query(query): Query<ReportQuery>,
) -> AppResult<Json<ReportTable>> {
    let service = ReportingService::new(state.store.clone(), &state.config);
    let report = service.get_report(&query.into_filter()?).await?;
    Ok(Json(report))
}

/// Download the filtered table as CSV
pub async fn export_csv(
    State(state): State<AppState>,
    Query(query): Query<ReportQuery>,
) -> AppResult<impl IntoResponse> {
    let service = ReportingService::new(state.store.clone(), &state.config);
    let report = service.get_report(&query.into_filter()?).await?;
    let csv = ReportingService::export_to_csv(&report.rows)?;

    tracing::info!(rows = report.total, "CSV report exported");
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"sensor_report.csv\"",
            ),
        ],
        csv,
    ))
}

/// Download the filtered table as PDF
pub async fn export_pdf(
    State(state): State<AppState>,
    Query(query): Query<ReportQuery>,
) -> AppResult<impl IntoResponse> {
    let service = ReportingService::new(state.store.clone(), &state.config);
    let report = service.get_report(&query.into_filter()?).await?;
    let pdf = ReportingService::export_to_pdf(&report.rows, Utc::now())?;

    tracing::info!(rows = report.total, bytes = pdf.len(), "PDF report exported");
    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"sensor_report.pdf\"",
            ),
        ],
        pdf,
    ))
}
