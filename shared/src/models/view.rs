//! Navigation state of the view shell

use serde::{Deserialize, Serialize};

use crate::types::{FieldSelector, ModelError};

/// Top-level views reachable from the sidebar
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DashboardView {
    #[default]
    Dashboard,
    Map,
    Fields,
    Plants,
    Weather,
    Reports,
    Settings,
}

impl DashboardView {
    pub const ALL: [DashboardView; 7] = [
        DashboardView::Dashboard,
        DashboardView::Map,
        DashboardView::Fields,
        DashboardView::Plants,
        DashboardView::Weather,
        DashboardView::Reports,
        DashboardView::Settings,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DashboardView::Dashboard => "dashboard",
            DashboardView::Map => "map",
            DashboardView::Fields => "fields",
            DashboardView::Plants => "plants",
            DashboardView::Weather => "weather",
            DashboardView::Reports => "reports",
            DashboardView::Settings => "settings",
        }
    }

    /// Sidebar label
    pub fn label_de(&self) -> &'static str {
        match self {
            DashboardView::Dashboard => "Übersicht",
            DashboardView::Map => "Karte",
            DashboardView::Fields => "Feldverwaltung",
            DashboardView::Plants => "Pflanzenanalyse",
            DashboardView::Weather => "Wetter",
            DashboardView::Reports => "Berichte",
            DashboardView::Settings => "Einstellungen",
        }
    }
}

impl std::str::FromStr for DashboardView {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DashboardView::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| ModelError::UnknownView(s.to_string()))
    }
}

/// Current view and field selection
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ViewState {
    pub current_view: DashboardView,
    pub selected_field: FieldSelector,
}
