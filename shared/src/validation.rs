//! Validation utilities for the dashboard forms
//!
//! Every check returns a short English message; the backend wraps it into
//! a localized error response.

use rust_decimal::Decimal;

use crate::models::Field;
use crate::types::GpsCoordinates;

/// Longest accepted field or sensor name
pub const MAX_NAME_LENGTH: usize = 100;

// ============================================================================
// Form Validations
// ============================================================================

/// Validate a field or sensor display name
pub fn validate_name(name: &str) -> Result<(), &'static str> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err("Name cannot be empty");
    }
    if trimmed.chars().count() > MAX_NAME_LENGTH {
        return Err("Name must be at most 100 characters");
    }
    Ok(())
}

/// Validate a display colour in `#rgb` or `#rrggbb` form
pub fn validate_hex_color(color: &str) -> Result<(), &'static str> {
    let Some(hex) = color.strip_prefix('#') else {
        return Err("Colour must start with '#'");
    };
    if !(hex.len() == 3 || hex.len() == 6) {
        return Err("Colour must have 3 or 6 hex digits");
    }
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err("Colour must only contain hex digits");
    }
    Ok(())
}

/// Validate a percentage (battery, signal, soil moisture)
pub fn validate_percentage(value: i32) -> Result<(), &'static str> {
    if !(0..=100).contains(&value) {
        return Err("Percentage must be between 0 and 100");
    }
    Ok(())
}

/// Validate a BBCH stage code (two-digit scale)
pub fn validate_bbch_stage(stage: i32) -> Result<(), &'static str> {
    if !(0..=99).contains(&stage) {
        return Err("BBCH stage must be between 0 and 99");
    }
    Ok(())
}

/// Validate a frost alert threshold in °C
pub fn validate_frost_threshold(threshold: Decimal) -> Result<(), &'static str> {
    if threshold < Decimal::from(-30) || threshold > Decimal::from(30) {
        return Err("Frost threshold must be between -30 and 30 °C");
    }
    Ok(())
}

// ============================================================================
// Geospatial Validations
// ============================================================================

/// Validate WGS84 coordinate ranges
pub fn validate_coordinates(point: &GpsCoordinates) -> Result<(), &'static str> {
    if point.latitude < Decimal::from(-90) || point.latitude > Decimal::from(90) {
        return Err("Latitude must be between -90 and 90");
    }
    if point.longitude < Decimal::from(-180) || point.longitude > Decimal::from(180) {
        return Err("Longitude must be between -180 and 180");
    }
    Ok(())
}

/// Validate that a sensor placed at `point` lies inside `field`
pub fn validate_sensor_placement(field: &Field, point: &GpsCoordinates) -> Result<(), &'static str> {
    if !field.has_boundary() {
        return Err("Field has no boundary to place sensors in");
    }
    if !field.contains(point) {
        return Err("Sensor must be placed inside the selected field");
    }
    Ok(())
}
