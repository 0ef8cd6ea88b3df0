//! View shell: current view, field selection and sidebar metadata

use serde::{Deserialize, Serialize};
use shared::{DashboardView, FieldSelector};

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::services::NotificationService;
use crate::store::DashboardStore;

/// View service
#[derive(Clone)]
pub struct ViewService {
    store: DashboardStore,
    notifications: NotificationService,
}

/// Sidebar entry
#[derive(Debug, Serialize)]
pub struct NavigationItem {
    pub view: DashboardView,
    pub label_de: String,
    pub active: bool,
}

/// Everything the shell around the views renders
#[derive(Debug, Serialize)]
pub struct ViewShell {
    pub current_view: DashboardView,
    pub selected_field: FieldSelector,
    /// Name of the selected field, `None` for all fields
    pub selected_field_name: Option<String>,
    pub navigation: Vec<NavigationItem>,
    pub unread_notifications: usize,
}

/// Navigation change; omitted values are kept
#[derive(Debug, Default, Deserialize)]
pub struct UpdateViewInput {
    pub current_view: Option<DashboardView>,
    pub selected_field: Option<FieldSelector>,
}

impl ViewService {
    pub fn new(store: DashboardStore, config: &Config) -> Self {
        Self {
            notifications: NotificationService::new(store.clone(), config),
            store,
        }
    }

    pub async fn get_view(&self) -> AppResult<ViewShell> {
        let unread = self.notifications.get_unread_count().await?.unread;
        let data = self.store.read().await;
        let view = &data.view;

        Ok(ViewShell {
            current_view: view.current_view,
            selected_field: view.selected_field.clone(),
            selected_field_name: view
                .selected_field
                .field_id()
                .and_then(|id| data.field(id))
                .map(|f| f.name.clone()),
            navigation: DashboardView::ALL
                .into_iter()
                .map(|v| NavigationItem {
                    view: v,
                    label_de: v.label_de().to_string(),
                    active: v == view.current_view,
                })
                .collect(),
            unread_notifications: unread,
        })
    }

    /// Switch view and/or selected field
    pub async fn update_view(&self, input: UpdateViewInput) -> AppResult<ViewShell> {
        {
            let mut data = self.store.write().await;

            if let Some(FieldSelector::Field(id)) = &input.selected_field {
                if data.field(id).is_none() {
                    return Err(AppError::NotFound(format!("Field {}", id)));
                }
            }

            if let Some(view) = input.current_view {
                data.view.current_view = view;
            }
            if let Some(selector) = input.selected_field {
                tracing::debug!(selected_field = %selector, "Field selection changed");
                data.view.selected_field = selector;
            }
        }

        self.get_view().await
    }
}
