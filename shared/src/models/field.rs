//! Field models

use serde::{Deserialize, Serialize};

use crate::geometry::point_in_polygon;
use crate::types::GpsCoordinates;

/// Colour given to fields created from a map click
pub const DEFAULT_FIELD_COLOR: &str = "#10b981";

/// Field used when a read model is requested without a specific field
pub const FALLBACK_FIELD_ID: &str = "f-001";

/// A bounded area of farmland
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Field {
    pub id: String,
    pub name: String,
    /// Display colour as `#rrggbb`
    pub color: String,
    pub center: GpsCoordinates,
    /// Boundary ring, implicitly closed. Empty for fields created
    /// without a map location.
    pub polygon: Vec<GpsCoordinates>,
}

impl Field {
    /// Whether the field has a usable boundary
    pub fn has_boundary(&self) -> bool {
        self.polygon.len() >= 3
    }

    /// Whether `point` lies inside the field boundary
    pub fn contains(&self, point: &GpsCoordinates) -> bool {
        point_in_polygon(point, &self.polygon)
    }
}

/// Find a field by id
pub fn find_field<'a>(fields: &'a [Field], id: &str) -> Option<&'a Field> {
    fields.iter().find(|f| f.id == id)
}
