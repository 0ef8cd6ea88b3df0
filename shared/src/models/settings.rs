//! User settings models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::DEFAULT_FROST_THRESHOLD;

/// Base layer of the field map
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum MapType {
    #[default]
    Standard,
    Satellite,
}

/// Alert thresholds and account preferences
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    pub frost_threshold_celsius: Decimal,
    /// Soil moisture below this is critical
    pub moisture_threshold_percent: i32,
    pub email_notifications: bool,
    pub push_notifications: bool,
    pub map_type: MapType,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            frost_threshold_celsius: DEFAULT_FROST_THRESHOLD,
            moisture_threshold_percent: 20,
            email_notifications: true,
            push_notifications: true,
            map_type: MapType::Standard,
        }
    }
}
