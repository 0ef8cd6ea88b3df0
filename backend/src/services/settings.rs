//! Settings service

use rust_decimal::Decimal;
use serde::Deserialize;
use shared::{validate_frost_threshold, validate_percentage, MapType, Settings};

use crate::error::{AppError, AppResult};
use crate::store::DashboardStore;

/// Settings service
#[derive(Clone)]
pub struct SettingsService {
    store: DashboardStore,
}

/// Partial settings update; omitted values are kept
#[derive(Debug, Default, Deserialize)]
pub struct UpdateSettingsInput {
    pub frost_threshold_celsius: Option<Decimal>,
    pub moisture_threshold_percent: Option<i32>,
    pub email_notifications: Option<bool>,
    pub push_notifications: Option<bool>,
    pub map_type: Option<MapType>,
}

impl SettingsService {
    pub fn new(store: DashboardStore) -> Self {
        Self { store }
    }

    pub async fn get_settings(&self) -> AppResult<Settings> {
        Ok(self.store.read().await.settings.clone())
    }

    /// Validate and save settings.
    ///
    /// The seeded forecast keeps its frost flags; a new threshold applies
    /// to forecasts generated afterwards.
    pub async fn update_settings(&self, input: UpdateSettingsInput) -> AppResult<Settings> {
        if let Some(threshold) = input.frost_threshold_celsius {
            validate_frost_threshold(threshold)
                .map_err(|m| AppError::invalid("frost_threshold_celsius", m))?;
        }
        if let Some(moisture) = input.moisture_threshold_percent {
            validate_percentage(moisture)
                .map_err(|m| AppError::invalid("moisture_threshold_percent", m))?;
        }

        let mut data = self.store.write().await;
        let settings = &mut data.settings;

        if let Some(threshold) = input.frost_threshold_celsius {
            settings.frost_threshold_celsius = threshold;
        }
        if let Some(moisture) = input.moisture_threshold_percent {
            settings.moisture_threshold_percent = moisture;
        }
        if let Some(email) = input.email_notifications {
            settings.email_notifications = email;
        }
        if let Some(push) = input.push_notifications {
            settings.push_notifications = push;
        }
        if let Some(map_type) = input.map_type {
            settings.map_type = map_type;
        }

        tracing::info!(
            frost_threshold = %settings.frost_threshold_celsius,
            moisture_threshold = settings.moisture_threshold_percent,
            "Settings saved"
        );
        Ok(settings.clone())
    }
}
