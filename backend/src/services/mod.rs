//! Business logic services for the AgriDash dashboard

pub mod auth;
pub mod field;
pub mod notification;
pub mod phenology;
pub mod reporting;
pub mod sensor;
pub mod settings;
pub mod view;
pub mod weather;

pub use auth::AuthService;
pub use field::FieldService;
pub use notification::NotificationService;
pub use phenology::PhenologyService;
pub use reporting::ReportingService;
pub use sensor::SensorService;
pub use settings::SettingsService;
pub use view::ViewService;
pub use weather::WeatherService;
