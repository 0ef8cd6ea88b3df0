//! In-memory dashboard state
//!
//! The whole dashboard lives in one `DashboardData` value behind an async
//! lock. Nothing is persisted: a restart reseeds the store.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use shared::{BbchRecord, Field, GrowthSample, Sensor, Settings, ViewState, WeatherSample};
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Everything the dashboard shows
#[derive(Debug, Clone)]
pub struct DashboardData {
    pub fields: Vec<Field>,
    pub sensors: Vec<Sensor>,
    pub bbch: HashMap<String, BbchRecord>,
    pub growth: HashMap<String, Vec<GrowthSample>>,
    pub weather: Vec<WeatherSample>,
    pub settings: Settings,
    pub view: ViewState,
    pub seeded_at: DateTime<Utc>,
}

impl DashboardData {
    pub fn field(&self, id: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.id == id)
    }

    pub fn sensor(&self, id: &str) -> Option<&Sensor> {
        self.sensors.iter().find(|s| s.id == id)
    }

    /// Generate an identifier `<prefix>-<millis>` not used by any field or sensor
    pub fn next_id(&self, prefix: &str, now: DateTime<Utc>) -> String {
        let mut stamp = now.timestamp_millis();
        loop {
            let candidate = format!("{}-{}", prefix, stamp);
            if self.field(&candidate).is_none() && self.sensor(&candidate).is_none() {
                return candidate;
            }
            stamp += 1;
        }
    }
}

/// Shared handle to the dashboard state
#[derive(Debug, Clone)]
pub struct DashboardStore {
    inner: Arc<RwLock<DashboardData>>,
}

impl DashboardStore {
    pub fn new(data: DashboardData) -> Self {
        Self {
            inner: Arc::new(RwLock::new(data)),
        }
    }

    pub async fn read(&self) -> RwLockReadGuard<'_, DashboardData> {
        self.inner.read().await
    }

    pub async fn write(&self) -> RwLockWriteGuard<'_, DashboardData> {
        self.inner.write().await
    }
}
