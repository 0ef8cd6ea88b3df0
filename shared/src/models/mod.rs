//! Domain models for the farm-monitoring dashboard

mod field;
mod notification;
mod phenology;
mod report;
mod sensor;
mod settings;
mod view;
mod weather;

pub use field::*;
pub use notification::*;
pub use phenology::*;
pub use report::*;
pub use sensor::*;
pub use settings::*;
pub use view::*;
pub use weather::*;
