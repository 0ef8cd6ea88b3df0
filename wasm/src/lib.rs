//! WebAssembly module for the AgriDash front end
//!
//! Provides client-side computation for:
//! - Map placement (containment, square fields from a click)
//! - Sensor filtering by the selected field
//! - Notification derivation and frost risk levels
//!
//! Structured arguments and results are passed as JSON strings.

use rust_decimal::Decimal;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use shared::{
    derive_notifications, filter_sensors, square_around, FieldSelector, FrostRiskLevel,
    validate_coordinates, GpsCoordinates, SensorType, DEFAULT_FIELD_OFFSET,
    DEFAULT_FROST_LOOKAHEAD,
};

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::types::*;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    web_sys::console::log_1(&JsValue::from_str("AgriDash WASM module loaded"));
}

fn to_decimal(value: f64, name: &str) -> Result<Decimal, String> {
    Decimal::try_from(value).map_err(|_| format!("Invalid {}: {}", name, value))
}

fn parse<T: serde::de::DeserializeOwned>(json: &str, what: &str) -> Result<T, String> {
    serde_json::from_str(json).map_err(|e| format!("Invalid {} JSON: {}", what, e))
}

fn to_json<T: Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| format!("Serialization failed: {}", e))
}

fn point(lat: f64, lng: f64) -> Result<GpsCoordinates, String> {
    let point = GpsCoordinates::new(to_decimal(lat, "latitude")?, to_decimal(lng, "longitude")?);
    validate_coordinates(&point)?;
    Ok(point)
}

fn point_in_field(field_json: &str, lat: f64, lng: f64) -> Result<bool, String> {
    let field: Field = parse(field_json, "field")?;
    Ok(field.contains(&point(lat, lng)?))
}

fn polygon_from_point(lat: f64, lng: f64, offset: Option<f64>) -> Result<String, String> {
    let offset = match offset {
        Some(o) => {
            let o = to_decimal(o, "offset")?;
            if o <= Decimal::ZERO || o > Decimal::ONE {
                return Err("Offset must be greater than 0 and at most 1 degree".to_string());
            }
            o
        }
        None => DEFAULT_FIELD_OFFSET,
    };
    to_json(&square_around(&point(lat, lng)?, offset))
}

fn sensors_for_field(sensors_json: &str, field_id: &str) -> Result<String, String> {
    let sensors: Vec<Sensor> = parse(sensors_json, "sensors")?;
    to_json(&filter_sensors(&sensors, &FieldSelector::from(field_id)))
}

fn notifications(
    weather_json: &str,
    sensors_json: &str,
    fields_json: &str,
) -> Result<String, String> {
    let weather: Vec<WeatherSample> = parse(weather_json, "weather")?;
    let sensors: Vec<Sensor> = parse(sensors_json, "sensors")?;
    let fields: Vec<Field> = parse(fields_json, "fields")?;
    to_json(&derive_notifications(
        &weather,
        &sensors,
        &fields,
        DEFAULT_FROST_LOOKAHEAD,
    ))
}

fn unit_for(sensor_type: &str) -> Result<String, String> {
    let sensor_type: SensorType = sensor_type.parse().map_err(|e| format!("{}", e))?;
    Ok(sensor_type.default_unit().to_string())
}

/// Whether a map point lies inside a field's boundary
#[wasm_bindgen]
pub fn is_point_in_field(field_json: &str, lat: f64, lng: f64) -> Result<bool, JsValue> {
    point_in_field(field_json, lat, lng).map_err(|e| JsValue::from_str(&e))
}

/// Square boundary around a clicked point, as a JSON array of coordinates
#[wasm_bindgen]
pub fn field_polygon_from_point(
    lat: f64,
    lng: f64,
    offset: Option<f64>,
) -> Result<String, JsValue> {
    polygon_from_point(lat, lng, offset).map_err(|e| JsValue::from_str(&e))
}

/// Sensors of one field, or all of them for `"all"`
#[wasm_bindgen]
pub fn filter_sensors_by_field(sensors_json: &str, field_id: &str) -> Result<String, JsValue> {
    sensors_for_field(sensors_json, field_id).map_err(|e| JsValue::from_str(&e))
}

/// Notification list for the top bar
#[wasm_bindgen]
pub fn derive_dashboard_notifications(
    weather_json: &str,
    sensors_json: &str,
    fields_json: &str,
) -> Result<String, JsValue> {
    notifications(weather_json, sensors_json, fields_json).map_err(|e| JsValue::from_str(&e))
}

/// Frost monitor level for the lowest forecast temperature
#[wasm_bindgen]
pub fn frost_risk_level(min_temperature_celsius: f64) -> String {
    let level = Decimal::try_from(min_temperature_celsius)
        .map(FrostRiskLevel::from_min_temperature)
        .unwrap_or(FrostRiskLevel::Low);
    match level {
        FrostRiskLevel::Low => "low",
        FrostRiskLevel::Moderate => "moderate",
        FrostRiskLevel::Critical => "critical",
    }
    .to_string()
}

/// Unit of a newly placed sensor of the given type
#[wasm_bindgen]
pub fn unit_for_sensor_type(sensor_type: &str) -> Result<String, JsValue> {
    unit_for(sensor_type).map_err(|e| JsValue::from_str(&e))
}
