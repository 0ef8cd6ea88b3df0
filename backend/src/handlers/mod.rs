//! HTTP handlers for the AgriDash API

pub mod auth;
pub mod field;
pub mod health;
pub mod notification;
pub mod phenology;
pub mod reporting;
pub mod sensor;
pub mod settings;
pub mod view;
pub mod weather;

pub use auth::*;
pub use field::*;
pub use health::*;
pub use notification::*;
pub use phenology::*;
pub use reporting::*;
pub use sensor::*;
pub use settings::*;
pub use view::*;
pub use weather::*;

use serde::Deserialize;
use shared::FieldSelector;

/// `?field=<id|all>` query shared by the field-scoped read models
#[derive(Debug, Default, Deserialize)]
pub struct FieldQuery {
    pub field: Option<FieldSelector>,
}
