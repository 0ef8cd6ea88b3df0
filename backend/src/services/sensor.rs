//! Sensor placement and listing

use chrono::Utc;
use rust_decimal::Decimal;
use serde::Deserialize;
use shared::{
    filter_sensors, validate_coordinates, validate_sensor_placement, FieldSelector, GpsCoordinates,
    Reading, Sensor, SensorStatus, SensorType,
};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::store::DashboardStore;

/// Sensor service
#[derive(Clone)]
pub struct SensorService {
    store: DashboardStore,
}

/// Input for placing a sensor in the selected field
#[derive(Debug, Deserialize, Validate)]
pub struct CreateSensorInput {
    #[validate(length(max = 100))]
    pub name: Option<String>,
    #[serde(rename = "type", default = "default_sensor_type")]
    pub sensor_type: SensorType,
    /// Map location; the field center is used when absent
    pub location: Option<GpsCoordinates>,
}

fn default_sensor_type() -> SensorType {
    SensorType::Temperature
}

impl SensorService {
    pub fn new(store: DashboardStore) -> Self {
        Self { store }
    }

    /// Sensors of the given field, or of the current selection
    pub async fn list_sensors(&self, selector: Option<FieldSelector>) -> AppResult<Vec<Sensor>> {
        let data = self.store.read().await;
        let selector = selector.unwrap_or_else(|| data.view.selected_field.clone());
        Ok(filter_sensors(&data.sensors, &selector)
            .into_iter()
            .cloned()
            .collect())
    }

    pub async fn get_sensor(&self, sensor_id: &str) -> AppResult<Sensor> {
        self.store
            .read()
            .await
            .sensor(sensor_id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Sensor {}", sensor_id)))
    }

    /// Place a new sensor in the currently selected field
    pub async fn create_sensor(&self, input: CreateSensorInput) -> AppResult<Sensor> {
        input.validate()?;
        if let Some(location) = &input.location {
            validate_coordinates(location).map_err(|m| AppError::invalid("location", m))?;
        }

        let mut data = self.store.write().await;

        let field_id = data
            .view
            .selected_field
            .field_id()
            .map(str::to_string)
            .ok_or(AppError::NoFieldSelected)?;
        let field = data
            .field(&field_id)
            .ok_or_else(|| AppError::NotFound(format!("Field {}", field_id)))?;

        let coordinates = match input.location {
            Some(location) => {
                if let Err(reason) = validate_sensor_placement(field, &location) {
                    tracing::warn!(field_id = %field.id, %location, reason, "Sensor placement rejected");
                    return Err(AppError::OutsideFieldBoundary { field_id });
                }
                location
            }
            None => field.center,
        };

        let name = match input.name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            // Map placements may leave the name blank
            _ if input.location.is_some() => format!("Neuer Sensor {}", data.sensors.len() + 1),
            _ => {
                return Err(AppError::validation(
                    "name",
                    "Name cannot be empty",
                    "Name darf nicht leer sein",
                ))
            }
        };

        let sensor = Sensor {
            id: data.next_id("s", Utc::now()),
            field_id,
            name,
            sensor_type: input.sensor_type,
            status: SensorStatus::Online,
            battery_level: 100,
            signal_strength: 100,
            last_update: Utc::now(),
            value: Reading::Numeric(Decimal::ZERO),
            unit: input.sensor_type.default_unit().to_string(),
            coordinates,
            photo_url: None,
        };
        data.sensors.push(sensor.clone());

        tracing::info!(
            sensor_id = %sensor.id,
            field_id = %sensor.field_id,
            sensor_type = %sensor.sensor_type,
            "Sensor placed"
        );
        Ok(sensor)
    }

    pub async fn delete_sensor(&self, sensor_id: &str) -> AppResult<()> {
        let mut data = self.store.write().await;
        let before = data.sensors.len();
        data.sensors.retain(|s| s.id != sensor_id);
        if data.sensors.len() == before {
            return Err(AppError::NotFound(format!("Sensor {}", sensor_id)));
        }

        tracing::info!(sensor_id, "Sensor removed");
        Ok(())
    }
}
