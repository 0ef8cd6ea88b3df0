//! Error handling for the AgriDash server
//!
//! Provides consistent error responses in English and German

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Authentication errors
    #[error("Invalid credentials")]
    InvalidCredentials,

    // Validation errors
    #[error("Validation error: {message}")]
    Validation {
        field: String,
        message: String,
        message_de: String,
    },

    #[error("Resource not found: {0}")]
    NotFound(String),

    // Placement errors
    #[error("No field selected")]
    NoFieldSelected,

    #[error("Location outside field {field_id}")]
    OutsideFieldBoundary { field_id: String },

    // Export errors
    #[error("Export error: {0}")]
    Export(String),

    // Internal errors
    #[error("Internal server error")]
    InternalError(#[from] anyhow::Error),
}

impl AppError {
    /// Validation failure on a single form field
    pub fn validation(field: &str, message: &str, message_de: &str) -> Self {
        AppError::Validation {
            field: field.to_string(),
            message: message.to_string(),
            message_de: message_de.to_string(),
        }
    }

    /// Wrap a message from `shared::validation`
    pub fn invalid(field: &str, message: &str) -> Self {
        AppError::Validation {
            field: field.to_string(),
            message: message.to_string(),
            message_de: format!("Ungültiger Wert für {}", field),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let field = errors
            .field_errors()
            .keys()
            .next()
            .map(|k| k.to_string())
            .unwrap_or_default();
        AppError::Validation {
            message: format!("Invalid value for {}", field),
            message_de: format!("Ungültiger Wert für {}", field),
            field,
        }
    }
}

/// Error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message_en: String,
    pub message_de: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_detail) = match &self {
            AppError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                ErrorDetail {
                    code: "INVALID_CREDENTIALS".to_string(),
                    message_en: "Invalid credentials. (Try: demo@agri.com / demo)".to_string(),
                    message_de: "Ungültige Anmeldedaten. (Versuche: demo@agri.com / demo)"
                        .to_string(),
                    field: None,
                },
            ),
            AppError::Validation { field, message, message_de } => (
                StatusCode::BAD_REQUEST,
                ErrorDetail {
                    code: "VALIDATION_ERROR".to_string(),
                    message_en: message.clone(),
                    message_de: message_de.clone(),
                    field: Some(field.clone()),
                },
            ),
            AppError::NotFound(resource) => (
                StatusCode::NOT_FOUND,
                ErrorDetail {
                    code: "NOT_FOUND".to_string(),
                    message_en: format!("{} not found", resource),
                    message_de: format!("{} nicht gefunden", resource),
                    field: None,
                },
            ),
            AppError::NoFieldSelected => (
                StatusCode::BAD_REQUEST,
                ErrorDetail {
                    code: "NO_FIELD_SELECTED".to_string(),
                    message_en: "Please select a field first".to_string(),
                    message_de: "Bitte wählen Sie zuerst ein Feld aus".to_string(),
                    field: Some("selected_field".to_string()),
                },
            ),
            AppError::OutsideFieldBoundary { field_id } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorDetail {
                    code: "OUTSIDE_FIELD_BOUNDARY".to_string(),
                    message_en: format!("The location lies outside field {}", field_id),
                    message_de: format!("Der Standort liegt außerhalb von Feld {}", field_id),
                    field: Some("location".to_string()),
                },
            ),
            AppError::Export(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail {
                    code: "EXPORT_ERROR".to_string(),
                    message_en: format!("Export failed: {}", msg),
                    message_de: format!("Export fehlgeschlagen: {}", msg),
                    field: None,
                },
            ),
            AppError::InternalError(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail {
                    code: "INTERNAL_ERROR".to_string(),
                    message_en: "An internal server error occurred".to_string(),
                    message_de: "Ein interner Fehler ist aufgetreten".to_string(),
                    field: None,
                },
            ),
        };

        if status.is_server_error() {
            tracing::error!("Error: {:?}", self);
        } else {
            tracing::warn!("Request rejected: {}", self);
        }

        (status, Json(ErrorResponse { error: error_detail })).into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;
