//! Configuration management for the AgriDash server
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with AGRIDASH_ prefix

use config::{ConfigError, Environment, File};
use rust_decimal::Decimal;
use serde::Deserialize;
use shared::{
    GpsCoordinates, DEFAULT_FIELD_OFFSET, DEFAULT_FROST_LOOKAHEAD, DEFAULT_FROST_THRESHOLD,
};

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Mock login configuration
    pub auth: AuthConfig,

    /// Frost and sensor alert configuration
    pub alerts: AlertConfig,

    /// Map interaction configuration
    pub map: MapConfig,

    /// Report generation configuration
    pub reports: ReportConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    /// Simulated round-trip delay before a login is answered
    pub login_delay_ms: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AlertConfig {
    /// Forecast temperature at or below which a sample is flagged as frost
    pub frost_threshold_celsius: Decimal,

    /// Number of upcoming forecast samples scanned for frost
    pub frost_lookahead: usize,
}

#[derive(Debug, Deserialize, Clone)]
pub struct MapConfig {
    /// Half-width of the square boundary created from a map click
    pub field_offset_degrees: Decimal,

    /// Center of fields created without a map location
    pub default_center_lat: Decimal,
    pub default_center_lng: Decimal,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ReportConfig {
    /// Days of history generated per sensor
    pub history_days: u32,
}

impl MapConfig {
    pub fn default_center(&self) -> GpsCoordinates {
        GpsCoordinates::new(self.default_center_lat, self.default_center_lng)
    }
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("AGRIDASH_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("auth.login_delay_ms", 1500)?
            .set_default("alerts.frost_threshold_celsius", "2.0")?
            .set_default("alerts.frost_lookahead", DEFAULT_FROST_LOOKAHEAD as u64)?
            .set_default("map.field_offset_degrees", "0.001")?
            .set_default("map.default_center_lat", "51.3")?
            .set_default("map.default_center_lng", "12.3")?
            .set_default("reports.history_days", 5)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (AGRIDASH_ prefix)
            .add_source(
                Environment::with_prefix("AGRIDASH")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            server: ServerConfig::default(),
            auth: AuthConfig::default(),
            alerts: AlertConfig::default(),
            map: MapConfig::default(),
            reports: ReportConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            host: "0.0.0.0".to_string(),
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            login_delay_ms: 1500,
        }
    }
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            frost_threshold_celsius: DEFAULT_FROST_THRESHOLD,
            frost_lookahead: DEFAULT_FROST_LOOKAHEAD,
        }
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            field_offset_degrees: DEFAULT_FIELD_OFFSET,
            default_center_lat: Decimal::new(513, 1),
            default_center_lng: Decimal::new(123, 1),
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self { history_days: 5 }
    }
}
