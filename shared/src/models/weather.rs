//! Weather data models

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Default frost threshold in °C
pub const DEFAULT_FROST_THRESHOLD: Decimal = Decimal::from_parts(2, 0, 0, false, 0);

/// Sky condition of a forecast sample
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum WeatherCondition {
    Sunny,
    Cloudy,
    Rain,
    Frost,
    Storm,
}

/// One hourly forecast sample
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeatherSample {
    pub timestamp: DateTime<Utc>,
    pub temperature_celsius: Decimal,
    pub humidity_percent: i32,
    pub condition: WeatherCondition,
    pub is_frost_risk: bool,
}

/// Whether a temperature counts as frost risk under `threshold`
pub fn is_frost_risk(temperature_celsius: Decimal, threshold: Decimal) -> bool {
    temperature_celsius <= threshold
}

/// Severity shown on the frost monitor
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum FrostRiskLevel {
    Low,
    Moderate,
    Critical,
}

impl FrostRiskLevel {
    /// Critical below 0 °C, moderate below 2 °C
    pub fn from_min_temperature(min_celsius: Decimal) -> Self {
        if min_celsius < Decimal::ZERO {
            FrostRiskLevel::Critical
        } else if min_celsius < Decimal::TWO {
            FrostRiskLevel::Moderate
        } else {
            FrostRiskLevel::Low
        }
    }
}

/// Frost summary over a forecast series
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FrostOutlook {
    pub min_temperature_celsius: Option<Decimal>,
    pub level: FrostRiskLevel,
    pub first_frost: Option<WeatherSample>,
    pub frost_hours: usize,
}

impl FrostOutlook {
    pub fn from_samples(samples: &[WeatherSample]) -> Self {
        let min = samples.iter().map(|s| s.temperature_celsius).min();
        Self {
            min_temperature_celsius: min,
            level: min
                .map(FrostRiskLevel::from_min_temperature)
                .unwrap_or(FrostRiskLevel::Low),
            first_frost: samples.iter().find(|s| s.is_frost_risk).cloned(),
            frost_hours: samples.iter().filter(|s| s.is_frost_risk).count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample(hour: i64, temp: Decimal, frost: bool) -> WeatherSample {
        WeatherSample {
            timestamp: Utc.timestamp_opt(0, 0).unwrap() + chrono::Duration::hours(hour),
            temperature_celsius: temp,
            humidity_percent: 50,
            condition: WeatherCondition::Sunny,
            is_frost_risk: frost,
        }
    }

    #[test]
    fn test_frost_risk_is_inclusive() {
        assert!(is_frost_risk(Decimal::TWO, DEFAULT_FROST_THRESHOLD));
        assert!(is_frost_risk(Decimal::new(-15, 1), DEFAULT_FROST_THRESHOLD));
        assert!(!is_frost_risk(Decimal::new(21, 1), DEFAULT_FROST_THRESHOLD));
    }

    #[test]
    fn test_risk_levels() {
        assert_eq!(
            FrostRiskLevel::from_min_temperature(Decimal::new(-1, 1)),
            FrostRiskLevel::Critical
        );
        assert_eq!(
            FrostRiskLevel::from_min_temperature(Decimal::ONE),
            FrostRiskLevel::Moderate
        );
        assert_eq!(
            FrostRiskLevel::from_min_temperature(Decimal::TWO),
            FrostRiskLevel::Low
        );
    }

    #[test]
    fn test_outlook() {
        let samples = vec![
            sample(0, Decimal::from(12), false),
            sample(1, Decimal::new(-15, 1), true),
            sample(2, Decimal::from(1), true),
        ];
        let outlook = FrostOutlook::from_samples(&samples);
        assert_eq!(outlook.min_temperature_celsius, Some(Decimal::new(-15, 1)));
        assert_eq!(outlook.level, FrostRiskLevel::Critical);
        assert_eq!(outlook.frost_hours, 2);
        assert_eq!(outlook.first_frost.unwrap().timestamp, samples[1].timestamp);
    }

    #[test]
    fn test_outlook_of_empty_series() {
        let outlook = FrostOutlook::from_samples(&[]);
        assert_eq!(outlook.level, FrostRiskLevel::Low);
        assert!(outlook.min_temperature_celsius.is_none());
        assert!(outlook.first_frost.is_none());
    }
}
