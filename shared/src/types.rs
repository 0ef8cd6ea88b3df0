//! Common types used across the dashboard

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// GPS coordinates in decimal degrees
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct GpsCoordinates {
    pub latitude: Decimal,
    pub longitude: Decimal,
}

impl GpsCoordinates {
    pub fn new(latitude: Decimal, longitude: Decimal) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Offset both axes by the given number of degrees
    pub fn offset(&self, d_lat: Decimal, d_lng: Decimal) -> Self {
        Self::new(self.latitude + d_lat, self.longitude + d_lng)
    }
}

impl std::fmt::Display for GpsCoordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}", self.latitude, self.longitude)
    }
}

/// Keyword selecting every field at once
pub const ALL_FIELDS: &str = "all";

/// Field selection driving the derived views.
///
/// Serialized as a plain string: `"all"` or a field identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FieldSelector {
    #[default]
    All,
    Field(String),
}

impl FieldSelector {
    pub fn field_id(&self) -> Option<&str> {
        match self {
            FieldSelector::All => None,
            FieldSelector::Field(id) => Some(id),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, FieldSelector::All)
    }

    pub fn matches(&self, field_id: &str) -> bool {
        match self {
            FieldSelector::All => true,
            FieldSelector::Field(id) => id == field_id,
        }
    }
}

impl From<String> for FieldSelector {
    fn from(value: String) -> Self {
        let trimmed = value.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(ALL_FIELDS) {
            FieldSelector::All
        } else {
            FieldSelector::Field(trimmed.to_string())
        }
    }
}

impl From<&str> for FieldSelector {
    fn from(value: &str) -> Self {
        FieldSelector::from(value.to_string())
    }
}

impl From<FieldSelector> for String {
    fn from(value: FieldSelector) -> Self {
        match value {
            FieldSelector::All => ALL_FIELDS.to_string(),
            FieldSelector::Field(id) => id,
        }
    }
}

impl std::fmt::Display for FieldSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldSelector::All => write!(f, "{}", ALL_FIELDS),
            FieldSelector::Field(id) => write!(f, "{}", id),
        }
    }
}

/// Errors raised while parsing model tags from strings
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("Unknown sensor type: {0}")]
    UnknownSensorType(String),

    #[error("Unknown view: {0}")]
    UnknownView(String),
}
