//! HTTP API tests
//!
//! Drive the full router with `tower::ServiceExt::oneshot` against a
//! freshly seeded store.

use agridash_backend::config::{AuthConfig, Config};
use agridash_backend::{create_app, AppState};
use axum::body::Body;
use axum::http::{header, HeaderMap, Method, Request, StatusCode};
use axum::Router;
use rust_decimal::Decimal;
use serde_json::{json, Value};
use std::str::FromStr;
use tower::ServiceExt;

fn test_app() -> Router {
    create_app(AppState::new(Config {
        auth: AuthConfig { login_delay_ms: 0 },
        ..Config::default()
    }))
}

struct TestResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: Vec<u8>,
}

impl TestResponse {
    fn json(&self) -> Value {
        serde_json::from_slice(&self.body).unwrap()
    }
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec();

    TestResponse {
        status,
        headers,
        body,
    }
}

async fn get(app: &Router, uri: &str) -> TestResponse {
    send(app, Method::GET, uri, None).await
}

/// Decimals may be serialized as strings or numbers
fn decimal(value: &Value) -> Decimal {
    match value {
        Value::String(s) => Decimal::from_str(s).unwrap(),
        other => Decimal::from_str(&other.to_string()).unwrap(),
    }
}

// ============================================================================
// Shell, Health and Login
// ============================================================================

#[tokio::test]
async fn test_health_endpoints() {
    let app = test_app();

    let response = get(&app, "/health").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, b"OK");

    let response = get(&app, "/api/v1/health").await;
    assert_eq!(response.status, StatusCode::OK);
    let body = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["fields"], 4);
    assert_eq!(body["sensors"], 7);
}

#[tokio::test]
async fn test_login() {
    let app = test_app();

    let response = send(
        &app,
        Method::POST,
        "/api/v1/auth/login",
        Some(json!({ "email": "demo@agri.com", "password": "demo" })),
    )
    .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json(), json!({ "success": true, "redirect": "/" }));

    let response = send(
        &app,
        Method::POST,
        "/api/v1/auth/login",
        Some(json!({ "email": "demo@agri.com", "password": "nope" })),
    )
    .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    let body = response.json();
    assert_eq!(body["error"]["code"], "INVALID_CREDENTIALS");
    assert!(body["error"]["message_en"]
        .as_str()
        .unwrap()
        .contains("demo@agri.com"));
    assert!(body.get("redirect").is_none());
}

#[tokio::test]
async fn test_view_shell() {
    let app = test_app();

    let body = get(&app, "/api/v1/view").await.json();
    assert_eq!(body["current_view"], "dashboard");
    assert_eq!(body["selected_field"], "all");
    assert_eq!(body["navigation"].as_array().unwrap().len(), 7);
    assert_eq!(body["unread_notifications"], 3);

    let response = send(
        &app,
        Method::PUT,
        "/api/v1/view",
        Some(json!({ "current_view": "map", "selected_field": "f-002" })),
    )
    .await;
    assert_eq!(response.status, StatusCode::OK);
    let body = response.json();
    assert_eq!(body["current_view"], "map");
    assert_eq!(body["selected_field"], "f-002");
    assert_eq!(body["selected_field_name"], "Obstplantage Süd (Wachau)");
    assert_eq!(body["navigation"][1]["active"], true);
}

#[tokio::test]
async fn test_select_unknown_field_is_not_found() {
    let app = test_app();

    let response = send(
        &app,
        Method::PUT,
        "/api/v1/view",
        Some(json!({ "selected_field": "f-999" })),
    )
    .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.json()["error"]["code"], "NOT_FOUND");

    // Selection unchanged
    assert_eq!(get(&app, "/api/v1/view").await.json()["selected_field"], "all");
}

// ============================================================================
// Fields and Sensors
// ============================================================================

#[tokio::test]
async fn test_field_lifecycle() {
    let app = test_app();

    let body = get(&app, "/api/v1/fields").await.json();
    assert_eq!(body["fields"].as_array().unwrap().len(), 4);

    let response = send(
        &app,
        Method::POST,
        "/api/v1/fields",
        Some(json!({ "location": { "latitude": 51.3, "longitude": 12.3 } })),
    )
    .await;
    assert_eq!(response.status, StatusCode::CREATED);
    let field = response.json();
    assert_eq!(field["name"], "Neues Feld 5");
    assert_eq!(field["color"], "#10b981");
    assert_eq!(field["polygon"].as_array().unwrap().len(), 4);
    assert_eq!(decimal(&field["polygon"][0]["latitude"]), Decimal::new(51301, 3));
    let id = field["id"].as_str().unwrap().to_string();

    let response = send(
        &app,
        Method::PUT,
        &format!("/api/v1/fields/{}", id),
        Some(json!({ "name": "Kirschgarten" })),
    )
    .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json()["name"], "Kirschgarten");

    let response = send(&app, Method::DELETE, &format!("/api/v1/fields/{}", id), None).await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);

    let response = get(&app, &format!("/api/v1/fields/{}", id)).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_field_edit_validation() {
    let app = test_app();

    let response = send(
        &app,
        Method::PUT,
        "/api/v1/fields/f-002",
        Some(json!({ "name": "  " })),
    )
    .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let body = response.json();
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(body["error"]["field"], "name");
}

#[tokio::test]
async fn test_delete_selected_field_resets_view() {
    let app = test_app();

    send(
        &app,
        Method::PUT,
        "/api/v1/view",
        Some(json!({ "selected_field": "f-001" })),
    )
    .await;
    let response = send(&app, Method::DELETE, "/api/v1/fields/f-001", None).await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);

    assert_eq!(get(&app, "/api/v1/view").await.json()["selected_field"], "all");
}

#[tokio::test]
async fn test_sensor_placement() {
    let app = test_app();

    // Nothing selected yet
    let response = send(
        &app,
        Method::POST,
        "/api/v1/sensors",
        Some(json!({ "name": "Neu", "type": "temperature" })),
    )
    .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["error"]["code"], "NO_FIELD_SELECTED");

    send(
        &app,
        Method::PUT,
        "/api/v1/view",
        Some(json!({ "selected_field": "f-001" })),
    )
    .await;

    let response = send(
        &app,
        Method::POST,
        "/api/v1/sensors",
        Some(json!({
            "type": "soil_moisture",
            "location": { "latitude": 52.0, "longitude": 13.0 }
        })),
    )
    .await;
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.json()["error"]["code"], "OUTSIDE_FIELD_BOUNDARY");

    let response = send(
        &app,
        Method::POST,
        "/api/v1/sensors",
        Some(json!({
            "type": "soil_moisture",
            "location": { "latitude": 51.4055, "longitude": 12.4005 }
        })),
    )
    .await;
    assert_eq!(response.status, StatusCode::CREATED);
    let sensor = response.json();
    assert_eq!(sensor["field_id"], "f-001");
    assert_eq!(sensor["unit"], "%");
    assert_eq!(sensor["name"], "Neuer Sensor 8");

    // Listing defaults to the selected field
    let body = get(&app, "/api/v1/sensors").await.json();
    assert_eq!(body["sensors"].as_array().unwrap().len(), 3);

    let body = get(&app, "/api/v1/sensors?field=all").await.json();
    assert_eq!(body["sensors"].as_array().unwrap().len(), 8);
}

#[tokio::test]
async fn test_sensor_readings_keep_their_json_kind() {
    let app = test_app();

    let body = get(&app, "/api/v1/sensors/s-003").await.json();
    assert!(body["value"].is_number());
    assert_eq!(body["value"].as_f64(), Some(14.2));

    let body = get(&app, "/api/v1/sensors/s-001").await.json();
    assert_eq!(body["value"].as_f64(), Some(0.45));

    let body = get(&app, "/api/v1/sensors/s-005").await.json();
    assert!(body["value"].is_string());
}

#[tokio::test]
async fn test_get_and_delete_sensor() {
    let app = test_app();

    let body = get(&app, "/api/v1/sensors/s-004").await.json();
    assert_eq!(body["status"], "offline");
    assert_eq!(body["type"], "camera");
    assert_eq!(body["value"], "No Signal");
    assert_eq!(body["photo_url"], "/uploads/sensor-1.jpg");

    let response = send(&app, Method::DELETE, "/api/v1/sensors/s-004", None).await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);
    assert_eq!(get(&app, "/api/v1/sensors/s-004").await.status, StatusCode::NOT_FOUND);

    // One notification fewer
    assert_eq!(
        get(&app, "/api/v1/notifications/unread-count").await.json()["unread"],
        2
    );
}

// ============================================================================
// Weather, Phenology and Analysis
// ============================================================================

#[tokio::test]
async fn test_weather_endpoints() {
    let app = test_app();

    let body = get(&app, "/api/v1/weather/forecast?limit=6").await.json();
    assert_eq!(body.as_array().unwrap().len(), 6);

    let body = get(&app, "/api/v1/weather/forecast").await.json();
    assert_eq!(body.as_array().unwrap().len(), 24);

    let body = get(&app, "/api/v1/weather/frost").await.json();
    assert_eq!(body["level"], "critical");
    assert_eq!(body["frost_hours"], 7);
    assert_eq!(decimal(&body["min_temperature_celsius"]), Decimal::new(-15, 1));
    assert_eq!(body["first_frost"]["condition"], "frost");
}

#[tokio::test]
async fn test_phenology_fallback() {
    let app = test_app();

    let body = get(&app, "/api/v1/phenology/bbch?field=f-002").await.json();
    assert_eq!(body["field_id"], "f-002");
    assert_eq!(body["current_stage"], 71);
    assert_eq!(body["confidence_percent"], 92);
    assert_eq!(body["high_confidence"], true);

    // No BBCH data for f-004
    let body = get(&app, "/api/v1/phenology/bbch?field=f-004").await.json();
    assert_eq!(body["field_id"], "f-001");
    assert_eq!(body["stage_name"], "Vollblüte");

    let body = get(&app, "/api/v1/phenology/growth?field=all").await.json();
    assert_eq!(body["field_id"], "f-001");
    assert_eq!(body["samples"].as_array().unwrap().len(), 14);
}

#[tokio::test]
async fn test_bbch_feedback() {
    let app = test_app();

    let response = send(
        &app,
        Method::POST,
        "/api/v1/phenology/bbch/feedback",
        Some(json!({ "field_id": "f-002", "stage": 120 })),
    )
    .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = send(
        &app,
        Method::POST,
        "/api/v1/phenology/bbch/feedback",
        Some(json!({ "field_id": "f-002", "stage": 69, "comment": "Noch Blüte" })),
    )
    .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json()["accepted"], true);

    // The estimate is unchanged
    let body = get(&app, "/api/v1/phenology/bbch?field=f-002").await.json();
    assert_eq!(body["current_stage"], 71);
}

#[tokio::test]
async fn test_plant_analysis_follows_settings() {
    let app = test_app();

    let body = get(&app, "/api/v1/analysis?field=f-001").await.json();
    assert_eq!(decimal(&body["cumulative_growth_mm"]), Decimal::new(65, 2));
    assert_eq!(body["stress_days"], 0);
    assert_eq!(body["current_stage"], 65);

    let body = get(&app, "/api/v1/analysis?field=f-003").await.json();
    assert_eq!(body["stress_days"], 14);

    let response = send(
        &app,
        Method::PUT,
        "/api/v1/settings",
        Some(json!({ "moisture_threshold_percent": 25 })),
    )
    .await;
    assert_eq!(response.status, StatusCode::OK);

    let body = get(&app, "/api/v1/analysis?field=f-001").await.json();
    assert_eq!(body["stress_days"], 2);
    assert_eq!(body["moisture_threshold_percent"], 25);
}

// ============================================================================
// Settings
// ============================================================================

#[tokio::test]
async fn test_settings_validation() {
    let app = test_app();

    let body = get(&app, "/api/v1/settings").await.json();
    assert_eq!(body["moisture_threshold_percent"], 20);
    assert_eq!(body["map_type"], "standard");
    assert_eq!(body["email_notifications"], true);

    let response = send(
        &app,
        Method::PUT,
        "/api/v1/settings",
        Some(json!({ "moisture_threshold_percent": 150 })),
    )
    .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["error"]["field"], "moisture_threshold_percent");

    let response = send(
        &app,
        Method::PUT,
        "/api/v1/settings",
        Some(json!({ "frost_threshold_celsius": 3.5, "map_type": "satellite" })),
    )
    .await;
    assert_eq!(response.status, StatusCode::OK);
    let body = response.json();
    assert_eq!(decimal(&body["frost_threshold_celsius"]), Decimal::new(35, 1));
    assert_eq!(body["map_type"], "satellite");
    assert_eq!(body["moisture_threshold_percent"], 20);
}

// ============================================================================
// Reports
// ============================================================================

#[tokio::test]
async fn test_report_filters() {
    let app = test_app();

    let body = get(&app, "/api/v1/reports").await.json();
    assert_eq!(body["total"], 35);

    let body = get(&app, "/api/v1/reports?type=camera").await.json();
    assert_eq!(body["total"], 10);

    let body = get(&app, "/api/v1/reports?search=klima&type=all").await.json();
    assert_eq!(body["total"], 5);

    let response = get(&app, "/api/v1/reports?type=barometer").await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_csv_export() {
    let app = test_app();

    let response = get(&app, "/api/v1/reports/export.csv?type=temperature").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.headers[header::CONTENT_TYPE],
        "text/csv; charset=utf-8"
    );
    assert!(response.headers[header::CONTENT_DISPOSITION]
        .to_str()
        .unwrap()
        .starts_with("attachment"));

    assert!(response.body.starts_with(&[0xEF, 0xBB, 0xBF]));
    let text = String::from_utf8(response.body).unwrap();
    let lines: Vec<&str> = text.trim_start_matches('\u{feff}').lines().collect();
    assert_eq!(lines[0], "Date,Time,Sensor,Type,Value,Status");
    assert_eq!(lines.len(), 11);
}

#[tokio::test]
async fn test_pdf_export() {
    let app = test_app();

    let response = get(&app, "/api/v1/reports/export.pdf").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.headers[header::CONTENT_TYPE], "application/pdf");
    assert!(response.body.starts_with(b"%PDF"));
}
