//! Weather forecast and frost monitor

use shared::{FrostOutlook, WeatherSample};

use crate::error::AppResult;
use crate::store::DashboardStore;

/// Weather service
#[derive(Clone)]
pub struct WeatherService {
    store: DashboardStore,
}

impl WeatherService {
    pub fn new(store: DashboardStore) -> Self {
        Self { store }
    }

    /// Upcoming hourly samples, optionally truncated to `limit`
    pub async fn get_forecast(&self, limit: Option<usize>) -> AppResult<Vec<WeatherSample>> {
        let data = self.store.read().await;
        let limit = limit.unwrap_or(data.weather.len());
        Ok(data.weather.iter().take(limit).cloned().collect())
    }

    /// Minimum temperature, risk level and first frost hour of the forecast
    pub async fn get_frost_outlook(&self) -> AppResult<FrostOutlook> {
        let data = self.store.read().await;
        Ok(FrostOutlook::from_samples(&data.weather))
    }
}
