//! Sensor history report models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{Reading, SensorStatus, SensorType};

/// Column headers of the exported report, in order
pub const REPORT_COLUMNS: [&str; 6] = ["Date", "Time", "Sensor", "Type", "Value", "Status"];

/// One historical reading shown in the reports table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportRow {
    /// `<sensor id>-<day index>`
    pub id: String,
    pub date: NaiveDate,
    pub time: String,
    pub field_id: String,
    pub sensor_name: String,
    #[serde(rename = "type")]
    pub sensor_type: SensorType,
    pub value: Reading,
    pub unit: String,
    pub status: SensorStatus,
}

impl ReportRow {
    /// Cells in `REPORT_COLUMNS` order
    pub fn cells(&self) -> [String; 6] {
        [
            self.date.format("%Y-%m-%d").to_string(),
            self.time.clone(),
            self.sensor_name.clone(),
            self.sensor_type.as_str().to_string(),
            self.value.to_string(),
            self.status.as_str().to_string(),
        ]
    }
}

/// Filters applied to the reports table
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ReportFilter {
    /// Case-insensitive substring of the sensor name
    pub search: Option<String>,
    /// `None` selects every type
    pub sensor_type: Option<SensorType>,
}

impl ReportFilter {
    pub fn matches(&self, row: &ReportRow) -> bool {
        let matches_search = match self.search.as_deref() {
            Some(term) if !term.is_empty() => row
                .sensor_name
                .to_lowercase()
                .contains(&term.to_lowercase()),
            _ => true,
        };
        let matches_type = self.sensor_type.map_or(true, |t| t == row.sensor_type);
        matches_search && matches_type
    }

    pub fn apply(&self, rows: Vec<ReportRow>) -> Vec<ReportRow> {
        rows.into_iter().filter(|r| self.matches(r)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn row(name: &str, sensor_type: SensorType) -> ReportRow {
        ReportRow {
            id: "s-001-0".into(),
            date: NaiveDate::from_ymd_opt(2025, 5, 1).unwrap(),
            time: "12:00".into(),
            field_id: "f-001".into(),
            sensor_name: name.into(),
            sensor_type,
            value: Reading::Numeric(Decimal::new(45, 2)),
            unit: "mm growth".into(),
            status: SensorStatus::Online,
        }
    }

    #[test]
    fn test_cells_follow_column_order() {
        let cells = row("Dendrometer Nord", SensorType::Dendrometer).cells();
        assert_eq!(
            cells,
            [
                "2025-05-01".to_string(),
                "12:00".to_string(),
                "Dendrometer Nord".to_string(),
                "dendrometer".to_string(),
                "0.45".to_string(),
                "online".to_string(),
            ]
        );
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let filter = ReportFilter {
            search: Some("NORD".into()),
            sensor_type: None,
        };
        assert!(filter.matches(&row("Dendrometer Nord", SensorType::Dendrometer)));
        assert!(!filter.matches(&row("Klima Station", SensorType::Temperature)));
    }

    #[test]
    fn test_search_term_is_used_verbatim() {
        let filter = ReportFilter {
            search: Some("nord ".into()),
            sensor_type: None,
        };
        assert!(!filter.matches(&row("Dendrometer Nord", SensorType::Dendrometer)));
        assert!(filter.matches(&row("Nord Ost", SensorType::Dendrometer)));

        let empty = ReportFilter {
            search: Some(String::new()),
            sensor_type: None,
        };
        assert!(empty.matches(&row("Klima Station", SensorType::Temperature)));
    }

    #[test]
    fn test_type_filter() {
        let filter = ReportFilter {
            search: None,
            sensor_type: Some(SensorType::Temperature),
        };
        assert!(filter.matches(&row("Klima Station", SensorType::Temperature)));
        assert!(!filter.matches(&row("Dendrometer Nord", SensorType::Dendrometer)));
        assert!(ReportFilter::default().matches(&row("x", SensorType::Camera)));
    }
}
