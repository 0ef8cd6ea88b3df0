//! Sensor models

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{FieldSelector, GpsCoordinates, ModelError};

/// Kinds of field sensors
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SensorType {
    Dendrometer,
    SoilMoisture,
    Temperature,
    Camera,
}

impl SensorType {
    pub const ALL: [SensorType; 4] = [
        SensorType::Dendrometer,
        SensorType::SoilMoisture,
        SensorType::Temperature,
        SensorType::Camera,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SensorType::Dendrometer => "dendrometer",
            SensorType::SoilMoisture => "soil_moisture",
            SensorType::Temperature => "temperature",
            SensorType::Camera => "camera",
        }
    }

    /// Unit of a freshly placed sensor's reading
    pub fn default_unit(&self) -> &'static str {
        match self {
            SensorType::Dendrometer => "mm growth",
            SensorType::SoilMoisture => "%",
            SensorType::Temperature => "°C",
            SensorType::Camera => "",
        }
    }
}

impl std::fmt::Display for SensorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for SensorType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SensorType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ModelError::UnknownSensorType(s.to_string()))
    }
}

/// Connectivity status of a sensor
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SensorStatus {
    Online,
    Warning,
    Offline,
}

impl SensorStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SensorStatus::Online => "online",
            SensorStatus::Warning => "warning",
            SensorStatus::Offline => "offline",
        }
    }

    /// Warning and offline sensors raise a dashboard notification
    pub fn needs_attention(&self) -> bool {
        !matches!(self, SensorStatus::Online)
    }
}

impl std::fmt::Display for SensorStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Current reading of a sensor, numeric or free text (e.g. "No Signal")
///
/// Numeric readings travel as JSON numbers so that text which happens to
/// look numeric stays text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Reading {
    Numeric(#[serde(with = "rust_decimal::serde::float")] Decimal),
    Text(String),
}

impl Reading {
    pub fn as_decimal(&self) -> Option<Decimal> {
        match self {
            Reading::Numeric(v) => Some(*v),
            Reading::Text(_) => None,
        }
    }
}

impl std::fmt::Display for Reading {
    /// Numeric readings are printed with two decimals
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Reading::Numeric(v) => write!(f, "{:.2}", v),
            Reading::Text(t) => write!(f, "{}", t),
        }
    }
}

/// A sensor installed in a field
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Sensor {
    pub id: String,
    pub field_id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub sensor_type: SensorType,
    pub status: SensorStatus,
    /// Battery level in percent (0-100)
    pub battery_level: u8,
    /// Signal strength in percent (0-100)
    pub signal_strength: u8,
    pub last_update: DateTime<Utc>,
    pub value: Reading,
    pub unit: String,
    pub coordinates: GpsCoordinates,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}

/// Sensors belonging to the selected field, or all of them.
///
/// Order is preserved.
pub fn filter_sensors<'a>(sensors: &'a [Sensor], selector: &FieldSelector) -> Vec<&'a Sensor> {
    sensors
        .iter()
        .filter(|s| selector.matches(&s.field_id))
        .collect()
}
