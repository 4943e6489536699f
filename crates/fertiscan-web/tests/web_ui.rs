//! Integration tests: form page, warning state, and the prediction flow.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use tower::ServiceExt;

use fertiscan_core::{FertilityModel, NUM_FEATURES, Nutrient};
use fertiscan_web::{AppState, create_router};
use smartcore::linalg::basic::matrix::DenseMatrix;

// Per-class bands with pH (feature index 3) kept inside 0..=14 so the
// submitted samples pass server-side validation.
fn class_row(label: u32, jitter: f64) -> Vec<f64> {
    let (band, ph) = match label {
        0 => (5.0, 3.5),
        1 => (150.0, 7.0),
        _ => (400.0, 11.0),
    };

    let mut row = vec![band + jitter; NUM_FEATURES];
    row[3] = ph + jitter * 0.01;
    row
}

fn trained_model() -> FertilityModel {
    let mut rows = Vec::new();
    let mut labels = Vec::new();
    for i in 0..10 {
        for label in 0..3u32 {
            rows.push(class_row(label, i as f64 * 0.3));
            labels.push(label);
        }
    }

    let x = DenseMatrix::from_2d_vec(&rows).unwrap();
    FertilityModel::fit(&x, &labels, 20, 42).unwrap()
}

fn app_with_model() -> axum::Router {
    create_router(Arc::new(AppState::with_model(trained_model())))
}

fn app_without_model() -> axum::Router {
    create_router(Arc::new(AppState::without_model()))
}

fn form_body(features: &[f64]) -> String {
    Nutrient::ALL
        .iter()
        .zip(features.iter())
        .map(|(nutrient, value)| format!("{}={}", nutrient.key(), value))
        .collect::<Vec<_>>()
        .join("&")
}

async fn get(app: axum::Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

async fn post_form(app: axum::Router, body: String) -> (StatusCode, String) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/predict")
                .header(
                    header::CONTENT_TYPE,
                    "application/x-www-form-urlencoded",
                )
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn index_renders_all_twelve_inputs() {
    let (status, html) = get(app_with_model(), "/").await;
    assert_eq!(status, StatusCode::OK);

    for nutrient in Nutrient::ALL {
        assert!(
            html.contains(&format!("name=\"{}\"", nutrient.key())),
            "missing input: {}",
            nutrient.key()
        );
    }
    assert!(html.contains("Predict Fertility Level"));
}

#[tokio::test]
async fn index_without_model_shows_warning() {
    let (status, html) = get(app_without_model(), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Model file not found"));
    assert!(!html.contains("Predict Fertility Level"));
}

#[tokio::test]
async fn predict_without_model_shows_warning() {
    let (status, html) = post_form(app_without_model(), form_body(&class_row(0, 0.0))).await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Model file not found"));
    assert!(!html.contains("Recommended Crops"));
}

#[tokio::test]
async fn predict_low_fertility_sample() {
    let (status, html) = post_form(app_with_model(), form_body(&class_row(0, 0.1))).await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Low Fertility"));
    assert!(html.contains("Millets"));
    assert!(html.contains("Horse Gram"));
}

#[tokio::test]
async fn predict_high_fertility_sample() {
    let (status, html) = post_form(app_with_model(), form_body(&class_row(2, 0.1))).await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("High Fertility"));
    assert!(html.contains("Sugarcane"));
}

#[tokio::test]
async fn predict_retains_submitted_values() {
    let row = class_row(1, 0.0);
    let (_, html) = post_form(app_with_model(), form_body(&row)).await;
    assert!(html.contains("value=\"150\""));
    assert!(html.contains("value=\"7\""));
}

#[tokio::test]
async fn out_of_range_reading_gets_error_panel() {
    let mut row = class_row(1, 0.0);
    row[3] = 20.0; // pH beyond its bound
    let (status, html) = post_form(app_with_model(), form_body(&row)).await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("outside"));
    assert!(!html.contains("Recommended Crops"));
}

#[tokio::test]
async fn malformed_form_is_rejected() {
    let (status, _) = post_form(app_with_model(), "nitrogen=1.0".to_string()).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn health_reports_model_state() {
    let (status, body) = get(app_with_model(), "/health").await;
    assert_eq!(status, StatusCode::OK);

    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["model_loaded"], true);

    let (_, body) = get(app_without_model(), "/health").await;
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["model_loaded"], false);
}
