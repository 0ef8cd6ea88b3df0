//! Notification derivation
//!
//! Notifications are a read-only projection of the weather forecast and
//! the sensor fleet, recomputed whenever they are requested.

use crate::models::{
    find_field, Field, Notification, NotificationKind, Sensor, SensorStatus, WeatherSample,
};

/// Number of upcoming forecast samples scanned for frost
pub const DEFAULT_FROST_LOOKAHEAD: usize = 12;

const UNKNOWN_FIELD: &str = "Unknown field";
const UNKNOWN_FIELD_DE: &str = "Unbekanntes Feld";

/// Derive the notification list.
///
/// One frost alert when any of the first `lookahead` samples is flagged,
/// quoting the first flagged sample, followed by one entry per sensor in
/// warning or offline state, in sensor order.
pub fn derive_notifications(
    weather: &[WeatherSample],
    sensors: &[Sensor],
    fields: &[Field],
    lookahead: usize,
) -> Vec<Notification> {
    let mut notifications = Vec::new();

    if let Some(frost) = weather.iter().take(lookahead).find(|w| w.is_frost_risk) {
        notifications.push(frost_notification(frost));
    }

    notifications.extend(
        sensors
            .iter()
            .filter(|s| s.status.needs_attention())
            .map(|s| sensor_notification(s, fields)),
    );

    notifications
}

fn frost_notification(sample: &WeatherSample) -> Notification {
    Notification {
        id: "weather-frost".to_string(),
        title: "Frost warning".to_string(),
        title_de: "Frost Warnung".to_string(),
        message: format!("Temperature drops to {}°C.", sample.temperature_celsius),
        message_de: format!("Temperatur fällt auf {}°C.", sample.temperature_celsius),
        time: "1 h ago".to_string(),
        kind: NotificationKind::Alert,
        read: false,
        link: "/weather".to_string(),
    }
}

fn sensor_notification(sensor: &Sensor, fields: &[Field]) -> Notification {
    let field = find_field(fields, &sensor.field_id);
    let field_name = field.map_or(UNKNOWN_FIELD, |f| f.name.as_str());
    let field_name_de = field.map_or(UNKNOWN_FIELD_DE, |f| f.name.as_str());
    let status = sensor.status.as_str().to_uppercase();

    let (title, title_de, kind) = match sensor.status {
        SensorStatus::Offline => ("Sensor offline", "Sensor Offline", NotificationKind::Info),
        _ => ("Critical value", "Kritischer Wert", NotificationKind::Warning),
    };

    Notification {
        id: format!("sensor-{}", sensor.id),
        title: title.to_string(),
        title_de: title_de.to_string(),
        message: format!("{} in \"{}\" reports status: {}", sensor.name, field_name, status),
        message_de: format!("{} in \"{}\" meldet Status: {}", sensor.name, field_name_de, status),
        time: "10 min ago".to_string(),
        kind,
        read: false,
        link: format!("/fields/{}", sensor.field_id),
    }
}
