//! Field management service

use chrono::Utc;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::{
    filter_sensors, square_around, validate_coordinates, validate_hex_color, validate_name,
    BbchRecord, Field, FieldSelector, GpsCoordinates, Sensor, DEFAULT_FIELD_COLOR,
};
use validator::Validate;

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::store::DashboardStore;

/// Colour preselected in the "add field" form
pub const FORM_FIELD_COLOR: &str = "#3b82f6";

/// Field service for the field list, map and field management views
#[derive(Clone)]
pub struct FieldService {
    store: DashboardStore,
    field_offset: Decimal,
    default_center: GpsCoordinates,
}

/// Input for creating a field.
///
/// With a `location` the field is drawn as a square around the clicked
/// point; without one it comes from the form and has no boundary yet.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct CreateFieldInput {
    #[validate(length(max = 100))]
    pub name: Option<String>,
    pub color: Option<String>,
    pub location: Option<GpsCoordinates>,
}

/// Input for editing a field. Boundary and center are kept.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateFieldInput {
    #[validate(length(max = 100))]
    pub name: Option<String>,
    pub color: Option<String>,
}

/// A field with everything installed on it
#[derive(Debug, Serialize)]
pub struct FieldDetail {
    #[serde(flatten)]
    pub field: Field,
    pub sensors: Vec<Sensor>,
    pub bbch: Option<BbchRecord>,
}

impl FieldService {
    pub fn new(store: DashboardStore, config: &Config) -> Self {
        Self {
            store,
            field_offset: config.map.field_offset_degrees,
            default_center: config.map.default_center(),
        }
    }

    /// All fields in creation order
    pub async fn list_fields(&self) -> AppResult<Vec<Field>> {
        Ok(self.store.read().await.fields.clone())
    }

    pub async fn get_field(&self, field_id: &str) -> AppResult<FieldDetail> {
        let data = self.store.read().await;
        let field = data
            .field(field_id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Field {}", field_id)))?;

        let selector = FieldSelector::Field(field.id.clone());
        let sensors = filter_sensors(&data.sensors, &selector)
            .into_iter()
            .cloned()
            .collect();

        Ok(FieldDetail {
            bbch: data.bbch.get(&field.id).cloned(),
            sensors,
            field,
        })
    }

    /// Create a field from a map click or from the form
    pub async fn create_field(&self, input: CreateFieldInput) -> AppResult<Field> {
        input.validate()?;
        if let Some(color) = &input.color {
            validate_hex_color(color).map_err(|m| AppError::invalid("color", m))?;
        }
        if let Some(location) = &input.location {
            validate_coordinates(location).map_err(|m| AppError::invalid("location", m))?;
        }

        let name = input
            .name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(str::to_string);

        let mut data = self.store.write().await;
        let id = data.next_id("f", Utc::now());

        let field = match input.location {
            Some(location) => Field {
                name: name.unwrap_or_else(|| format!("Neues Feld {}", data.fields.len() + 1)),
                color: input.color.unwrap_or_else(|| DEFAULT_FIELD_COLOR.to_string()),
                center: location,
                polygon: square_around(&location, self.field_offset),
                id,
            },
            None => {
                let name = name.unwrap_or_default();
                validate_name(&name).map_err(|m| AppError::invalid("name", m))?;
                Field {
                    name,
                    color: input.color.unwrap_or_else(|| FORM_FIELD_COLOR.to_string()),
                    center: self.default_center,
                    polygon: Vec::new(),
                    id,
                }
            }
        };

        // Fields added through the form become the active selection
        if !field.has_boundary() {
            data.view.selected_field = FieldSelector::Field(field.id.clone());
        }
        data.fields.push(field.clone());

        tracing::info!(field_id = %field.id, name = %field.name, "Field created");
        Ok(field)
    }

    /// Rename or recolour a field
    pub async fn update_field(&self, field_id: &str, input: UpdateFieldInput) -> AppResult<Field> {
        input.validate()?;
        if let Some(name) = &input.name {
            validate_name(name).map_err(|m| AppError::invalid("name", m))?;
        }
        if let Some(color) = &input.color {
            validate_hex_color(color).map_err(|m| AppError::invalid("color", m))?;
        }

        let mut data = self.store.write().await;
        let field = data
            .fields
            .iter_mut()
            .find(|f| f.id == field_id)
            .ok_or_else(|| AppError::NotFound(format!("Field {}", field_id)))?;

        if let Some(name) = input.name {
            field.name = name.trim().to_string();
        }
        if let Some(color) = input.color {
            field.color = color;
        }

        tracing::info!(field_id = %field.id, "Field updated");
        Ok(field.clone())
    }

    /// Remove a field. Its sensors stay and report an unknown field.
    pub async fn delete_field(&self, field_id: &str) -> AppResult<()> {
        let mut data = self.store.write().await;
        let before = data.fields.len();
        data.fields.retain(|f| f.id != field_id);
        if data.fields.len() == before {
            return Err(AppError::NotFound(format!("Field {}", field_id)));
        }

        if data.view.selected_field.field_id() == Some(field_id) {
            data.view.selected_field = FieldSelector::All;
        }

        tracing::info!(field_id, "Field removed");
        Ok(())
    }
}
