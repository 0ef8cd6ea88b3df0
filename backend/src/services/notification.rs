//! Notification service
//!
//! Notifications are not stored. They are derived from the forecast and
//! the sensor fleet on every request.

use serde::Serialize;
use shared::{derive_notifications, Notification};

use crate::config::Config;
use crate::error::AppResult;
use crate::store::DashboardStore;

/// Notification service
#[derive(Clone)]
pub struct NotificationService {
    store: DashboardStore,
    frost_lookahead: usize,
}

#[derive(Debug, Serialize)]
pub struct UnreadCount {
    pub unread: usize,
}

impl NotificationService {
    pub fn new(store: DashboardStore, config: &Config) -> Self {
        Self {
            store,
            frost_lookahead: config.alerts.frost_lookahead,
        }
    }

    pub async fn get_notifications(&self) -> AppResult<Vec<Notification>> {
        let data = self.store.read().await;
        Ok(derive_notifications(
            &data.weather,
            &data.sensors,
            &data.fields,
            self.frost_lookahead,
        ))
    }

    /// Badge count shown on the bell icon
    pub async fn get_unread_count(&self) -> AppResult<UnreadCount> {
        let unread = self
            .get_notifications()
            .await?
            .iter()
            .filter(|n| !n.read)
            .count();
        Ok(UnreadCount { unread })
    }
}
