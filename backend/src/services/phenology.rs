//! Phenology, growth and plant analysis service
//!
//! BBCH and growth series exist only for some fields. Requests for the
//! "all" selection or a field without data fall back to `f-001`.

use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::{
    cumulative_growth, stress_days, validate_bbch_stage, BbchRecord, FieldSelector, GrowthSample,
    FALLBACK_FIELD_ID,
};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::store::DashboardStore;

/// Days until the next BBCH stage is expected
pub const NEXT_STAGE_DAYS: i64 = 14;

/// Phenology service
#[derive(Clone)]
pub struct PhenologyService {
    store: DashboardStore,
}

/// BBCH record of the resolved field
#[derive(Debug, Serialize)]
pub struct BbchView {
    pub field_id: String,
    pub confidence_percent: u32,
    pub high_confidence: bool,
    #[serde(flatten)]
    pub record: BbchRecord,
}

/// Growth series of the resolved field
#[derive(Debug, Serialize)]
pub struct GrowthView {
    pub field_id: String,
    pub samples: Vec<GrowthSample>,
}

/// Correction of an estimated stage submitted by the grower
#[derive(Debug, Deserialize, Validate)]
pub struct BbchFeedbackInput {
    pub field_id: Option<String>,
    pub stage: i32,
    #[validate(length(max = 500))]
    pub comment: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct BbchFeedbackAck {
    pub accepted: bool,
    pub field_id: String,
    pub stage: i32,
    pub message: String,
    pub message_de: String,
}

/// KPIs of the plant analysis view
#[derive(Debug, Serialize)]
pub struct PlantAnalysis {
    pub field_id: String,
    pub cumulative_growth_mm: Decimal,
    pub stress_days: usize,
    pub moisture_threshold_percent: i32,
    pub current_stage: u8,
    pub stage_name: String,
    pub next_stage_forecast: NaiveDate,
    pub samples: Vec<GrowthSample>,
}

/// Pick the field whose series is shown: the selected one when it has
/// data, `f-001` otherwise.
fn resolve<'a, T>(
    series: &'a std::collections::HashMap<String, T>,
    selector: &FieldSelector,
) -> AppResult<(String, &'a T)> {
    let field_id = selector
        .field_id()
        .filter(|id| series.contains_key(*id))
        .unwrap_or(FALLBACK_FIELD_ID);
    series
        .get(field_id)
        .map(|value| (field_id.to_string(), value))
        .ok_or_else(|| AppError::NotFound(format!("Phenology data for {}", field_id)))
}

impl PhenologyService {
    pub fn new(store: DashboardStore) -> Self {
        Self { store }
    }

    pub async fn get_bbch(&self, selector: Option<FieldSelector>) -> AppResult<BbchView> {
        let data = self.store.read().await;
        let selector = selector.unwrap_or_else(|| data.view.selected_field.clone());
        let (field_id, record) = resolve(&data.bbch, &selector)?;
        Ok(BbchView {
            field_id,
            confidence_percent: record.confidence_percent(),
            high_confidence: record.is_high_confidence(),
            record: record.clone(),
        })
    }

    pub async fn get_growth(&self, selector: Option<FieldSelector>) -> AppResult<GrowthView> {
        let data = self.store.read().await;
        let selector = selector.unwrap_or_else(|| data.view.selected_field.clone());
        let (field_id, samples) = resolve(&data.growth, &selector)?;
        Ok(GrowthView {
            field_id,
            samples: samples.clone(),
        })
    }

    /// Accept a stage correction. The estimate itself is not changed.
    pub async fn submit_feedback(&self, input: BbchFeedbackInput) -> AppResult<BbchFeedbackAck> {
        input.validate()?;
        validate_bbch_stage(input.stage).map_err(|m| AppError::invalid("stage", m))?;

        let data = self.store.read().await;
        let selector = input
            .field_id
            .map(FieldSelector::from)
            .unwrap_or_else(|| data.view.selected_field.clone());
        let (field_id, record) = resolve(&data.bbch, &selector)?;

        tracing::info!(
            field_id = %field_id,
            estimated = record.current_stage,
            corrected = input.stage,
            "BBCH feedback received"
        );

        Ok(BbchFeedbackAck {
            accepted: true,
            field_id,
            stage: input.stage,
            message: "Thank you for your feedback!".to_string(),
            message_de: "Danke für Ihr Feedback!".to_string(),
        })
    }

    /// Growth, stress and stage KPIs for the plant analysis view
    pub async fn get_analysis(&self, selector: Option<FieldSelector>) -> AppResult<PlantAnalysis> {
        let data = self.store.read().await;
        let selector = selector.unwrap_or_else(|| data.view.selected_field.clone());
        let (field_id, samples) = resolve(&data.growth, &selector)?;
        let (_, record) = resolve(&data.bbch, &FieldSelector::Field(field_id.clone()))?;
        let threshold = data.settings.moisture_threshold_percent;

        Ok(PlantAnalysis {
            cumulative_growth_mm: cumulative_growth(samples),
            stress_days: stress_days(samples, threshold),
            moisture_threshold_percent: threshold,
            current_stage: record.current_stage,
            stage_name: record.stage_name.clone(),
            next_stage_forecast: data.seeded_at.date_naive() + Duration::days(NEXT_STAGE_DAYS),
            samples: samples.clone(),
            field_id,
        })
    }
}
