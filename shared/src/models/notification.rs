//! Dashboard notification models

use serde::{Deserialize, Serialize};

/// Severity of a notification, drives its icon and colour
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Info,
    Warning,
    Alert,
}

/// An entry in the top bar notification list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub title_de: String,
    pub message: String,
    pub message_de: String,
    /// Relative time label
    pub time: String,
    pub kind: NotificationKind,
    pub read: bool,
    /// Dashboard route opened when the notification is clicked
    pub link: String,
}
