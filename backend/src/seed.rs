//! Mock data the dashboard starts from
//!
//! All timestamps are relative to the seed time so the dashboard always
//! looks current.

use std::collections::HashMap;

use chrono::{DateTime, Duration, NaiveDate, Utc};
use rust_decimal::Decimal;
use shared::{
    is_frost_risk, BbchHistoryEntry, BbchRecord, Field, GpsCoordinates, GrowthSample, Reading,
    Sensor, SensorStatus, SensorType, Settings, ViewState, WeatherCondition, WeatherSample,
};

use crate::store::DashboardData;

/// Hourly forecast samples generated at seed time
pub const FORECAST_HOURS: i64 = 24;

/// Daily growth samples per field
pub const GROWTH_DAYS: i64 = 14;

/// Build the initial dashboard state
pub fn seed(now: DateTime<Utc>, frost_threshold: Decimal) -> DashboardData {
    DashboardData {
        fields: seed_fields(),
        sensors: seed_sensors(now),
        bbch: seed_bbch(now),
        growth: seed_growth(now),
        weather: seed_weather(now, frost_threshold),
        settings: Settings {
            frost_threshold_celsius: frost_threshold,
            ..Settings::default()
        },
        view: ViewState::default(),
        seeded_at: now,
    }
}

/// Coordinate from values scaled by 10^5
fn point(lat_e5: i64, lng_e5: i64) -> GpsCoordinates {
    GpsCoordinates::new(
        Decimal::new(lat_e5, 5).normalize(),
        Decimal::new(lng_e5, 5).normalize(),
    )
}

fn field(id: &str, name: &str, color: &str, center: (i64, i64), ring: [(i64, i64); 4]) -> Field {
    Field {
        id: id.to_string(),
        name: name.to_string(),
        color: color.to_string(),
        center: point(center.0, center.1),
        polygon: ring.iter().map(|&(lat, lng)| point(lat, lng)).collect(),
    }
}

pub fn seed_fields() -> Vec<Field> {
    vec![
        field(
            "f-001",
            "Versuchsfeld Nord (Seehausen)",
            "#3b82f6",
            (5_140_500, 1_240_000),
            [
                (5_140_600, 1_239_900),
                (5_140_600, 1_240_100),
                (5_140_400, 1_240_100),
                (5_140_400, 1_239_900),
            ],
        ),
        field(
            "f-002",
            "Obstplantage Süd (Wachau)",
            "#10b981",
            (5_127_000, 1_242_000),
            [
                (5_127_100, 1_241_900),
                (5_127_100, 1_242_100),
                (5_126_900, 1_242_100),
                (5_126_900, 1_241_900),
            ],
        ),
        field(
            "f-003",
            "Gewächshaus West (Miltitz)",
            "#f59e0b",
            (5_133_000, 1_223_000),
            [
                (5_133_050, 1_222_900),
                (5_133_050, 1_223_100),
                (5_132_950, 1_223_100),
                (5_132_950, 1_222_900),
            ],
        ),
        field(
            "f-004",
            "Apfelbaum Gewächshaus West (Miltitz)",
            "#920ec7",
            (4_913_140, 1_337_000),
            [
                (4_913_148, 1_336_900),
                (4_913_148, 1_337_100),
                (4_913_099, 1_337_100),
                (4_913_099, 1_336_900),
            ],
        ),
    ]
}

struct SensorSeed {
    id: &'static str,
    field_id: &'static str,
    name: &'static str,
    sensor_type: SensorType,
    status: SensorStatus,
    battery: u8,
    signal: u8,
    age: Duration,
    value: Reading,
    unit: &'static str,
    at: (i64, i64),
    photo: Option<&'static str>,
}

pub fn seed_sensors(now: DateTime<Utc>) -> Vec<Sensor> {
    let seeds = [
        SensorSeed {
            id: "s-001",
            field_id: "f-001",
            name: "Dendrometer Nord",
            sensor_type: SensorType::Dendrometer,
            status: SensorStatus::Online,
            battery: 85,
            signal: 92,
            age: Duration::zero(),
            value: Reading::Numeric(Decimal::new(45, 2)),
            unit: "mm growth",
            at: (5_140_500, 1_240_000),
            photo: None,
        },
        SensorSeed {
            id: "s-002",
            field_id: "f-001",
            name: "Bodenfeuchte Tief",
            sensor_type: SensorType::SoilMoisture,
            status: SensorStatus::Warning,
            battery: 12,
            signal: 45,
            age: Duration::hours(1),
            value: Reading::Numeric(Decimal::from(22)),
            unit: "%",
            at: (5_140_550, 1_239_950),
            photo: None,
        },
        SensorSeed {
            id: "s-003",
            field_id: "f-002",
            name: "Klima Station",
            sensor_type: SensorType::Temperature,
            status: SensorStatus::Online,
            battery: 100,
            signal: 98,
            age: Duration::zero(),
            value: Reading::Numeric(Decimal::new(142, 1)),
            unit: "°C",
            at: (5_127_000, 1_242_000),
            photo: None,
        },
        SensorSeed {
            id: "s-004",
            field_id: "f-003",
            name: "Phäno-Kamera",
            sensor_type: SensorType::Camera,
            status: SensorStatus::Offline,
            battery: 0,
            signal: 0,
            age: Duration::hours(24),
            value: Reading::Text("No Signal".to_string()),
            unit: "",
            at: (5_133_000, 1_223_000),
            photo: Some("/uploads/sensor-1.jpg"),
        },
        SensorSeed {
            id: "s-005",
            field_id: "f-004",
            name: "Apfelbaum Kamera",
            sensor_type: SensorType::Camera,
            status: SensorStatus::Online,
            battery: 95,
            signal: 90,
            age: Duration::zero(),
            value: Reading::Text("Online".to_string()),
            unit: "",
            at: (4_913_140, 1_337_000),
            photo: Some("/uploads/sensor-2.jpg"),
        },
        SensorSeed {
            id: "s-006",
            field_id: "f-004",
            name: "Apfelbaum Temperatur",
            sensor_type: SensorType::Temperature,
            status: SensorStatus::Online,
            battery: 95,
            signal: 90,
            age: Duration::zero(),
            value: Reading::Numeric(Decimal::new(205, 1)),
            unit: "°C",
            at: (4_913_140, 1_337_000),
            photo: None,
        },
        SensorSeed {
            id: "s-007",
            field_id: "f-004",
            name: "Apfelbaum Bodenfeuchte",
            sensor_type: SensorType::SoilMoisture,
            status: SensorStatus::Online,
            battery: 95,
            signal: 90,
            age: Duration::zero(),
            value: Reading::Numeric(Decimal::from(35)),
            unit: "%",
            at: (4_913_140, 1_337_000),
            photo: None,
        },
    ];

    seeds
        .into_iter()
        .map(|s| Sensor {
            id: s.id.to_string(),
            field_id: s.field_id.to_string(),
            name: s.name.to_string(),
            sensor_type: s.sensor_type,
            status: s.status,
            battery_level: s.battery,
            signal_strength: s.signal,
            last_update: now - s.age,
            value: s.value,
            unit: s.unit.to_string(),
            coordinates: point(s.at.0, s.at.1),
            photo_url: s.photo.map(str::to_string),
        })
        .collect()
}

fn bbch(
    now: DateTime<Utc>,
    stage: u8,
    name: &str,
    confidence: f32,
    history: &[(i32, u32, u32, u8)],
) -> BbchRecord {
    BbchRecord {
        current_stage: stage,
        stage_name: name.to_string(),
        confidence_score: confidence,
        last_updated: now,
        history: history
            .iter()
            .filter_map(|&(y, m, d, stage)| {
                NaiveDate::from_ymd_opt(y, m, d).map(|date| BbchHistoryEntry { date, stage })
            })
            .collect(),
    }
}

pub fn seed_bbch(now: DateTime<Utc>) -> HashMap<String, BbchRecord> {
    HashMap::from([
        (
            "f-001".to_string(),
            bbch(
                now,
                65,
                "Vollblüte",
                0.89,
                &[(2025, 4, 1, 10), (2025, 4, 15, 30), (2025, 4, 25, 60), (2025, 5, 1, 65)],
            ),
        ),
        (
            "f-002".to_string(),
            bbch(
                now,
                71,
                "Fruchtansatz",
                0.92,
                &[(2025, 4, 1, 50), (2025, 4, 10, 60), (2025, 4, 20, 69), (2025, 5, 1, 71)],
            ),
        ),
        (
            "f-003".to_string(),
            bbch(
                now,
                11,
                "Erste Laubblätter",
                0.75,
                &[(2025, 4, 20, 0), (2025, 4, 25, 9), (2025, 5, 1, 11)],
            ),
        ),
    ])
}

/// Daily series ending today. `growth` and `moisture` map the day index to
/// growth in 1/100 mm and moisture in percent.
fn growth_series(
    now: DateTime<Utc>,
    growth: impl Fn(i64) -> i64,
    moisture: impl Fn(i64) -> i64,
) -> Vec<GrowthSample> {
    (0..GROWTH_DAYS)
        .map(|i| GrowthSample {
            date: now - Duration::days(GROWTH_DAYS - 1 - i),
            growth_mm: Decimal::new(growth(i), 2),
            moisture_percent: moisture(i) as i32,
        })
        .collect()
}

pub fn seed_growth(now: DateTime<Utc>) -> HashMap<String, Vec<GrowthSample>> {
    // Moisture curves are `base - i/2` rounded half up, i.e. `base - floor(i/2)`
    HashMap::from([
        (
            "f-001".to_string(),
            growth_series(now, |i| 10 + i * 5, |i| 30 - i / 2),
        ),
        (
            "f-002".to_string(),
            growth_series(now, |i| 80 + i * 10, |i| 45 + i % 3),
        ),
        (
            "f-003".to_string(),
            growth_series(now, |i| 5 + i, |i| 18 - i / 2),
        ),
    ])
}

/// Hourly forecast with a cold night between hours 11 and 17
pub fn seed_weather(now: DateTime<Utc>, frost_threshold: Decimal) -> Vec<WeatherSample> {
    (0..FORECAST_HOURS)
        .map(|i| {
            let is_night = i > 10 && i < 18;
            let temperature = if is_night {
                Decimal::new(-15, 1)
            } else {
                Decimal::from(12 + i % 3)
            };
            let condition = if temperature < Decimal::ZERO {
                WeatherCondition::Frost
            } else if is_night {
                WeatherCondition::Cloudy
            } else {
                WeatherCondition::Sunny
            };
            WeatherSample {
                timestamp: now + Duration::hours(i),
                temperature_celsius: temperature,
                humidity_percent: if is_night { 90 } else { 45 },
                condition,
                is_frost_risk: is_frost_risk(temperature, frost_threshold),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::DEFAULT_FROST_THRESHOLD;

    #[test]
    fn test_seed_counts() {
        let data = seed(Utc::now(), DEFAULT_FROST_THRESHOLD);
        assert_eq!(data.fields.len(), 4);
        assert_eq!(data.sensors.len(), 7);
        assert_eq!(data.bbch.len(), 3);
        assert_eq!(data.growth.len(), 3);
        assert_eq!(data.weather.len(), 24);
    }

    #[test]
    fn test_field_centers_lie_inside_their_boundaries() {
        for field in seed_fields() {
            assert!(field.contains(&field.center), "{} center outside", field.id);
        }
    }

    #[test]
    fn test_sensors_lie_inside_their_fields() {
        let fields = seed_fields();
        for sensor in seed_sensors(Utc::now()) {
            let field = fields.iter().find(|f| f.id == sensor.field_id).unwrap();
            assert!(field.contains(&sensor.coordinates), "{} misplaced", sensor.id);
        }
    }

    #[test]
    fn test_growth_formulas() {
        let growth = seed_growth(Utc::now());
        let north = &growth["f-001"];
        assert_eq!(north.len(), 14);
        assert_eq!(north[0].growth_mm, Decimal::new(10, 2));
        assert_eq!(north[13].growth_mm, Decimal::new(75, 2));
        // round(30 - 0.5) = 30, round(30 - 6.5) = 24
        assert_eq!(north[1].moisture_percent, 30);
        assert_eq!(north[13].moisture_percent, 24);
        assert_eq!(growth["f-002"][4].moisture_percent, 46);
    }

    #[test]
    fn test_night_hours_are_frost() {
        let weather = seed_weather(Utc::now(), DEFAULT_FROST_THRESHOLD);
        assert!(!weather[10].is_frost_risk);
        assert!(weather[11].is_frost_risk);
        assert_eq!(weather[11].condition, WeatherCondition::Frost);
        assert!(weather[17].is_frost_risk);
        assert!(!weather[18].is_frost_risk);
        assert_eq!(weather[0].temperature_celsius, Decimal::from(12));
        assert_eq!(weather[2].temperature_celsius, Decimal::from(14));
    }
}
