//! HTTP-level tests driving the router directly with `oneshot`.

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use chrono::NaiveDate;
use household_energy_estimator::{
    api::{self, AppState},
    config::Config,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

fn app() -> Router {
    let clock = Arc::new(|| {
        NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap()
    });
    api::router(AppState::with_clock(clock), &Config::default()).unwrap()
}

async fn post(path: &str, body: Value) -> (StatusCode, axum::http::HeaderMap, Vec<u8>) {
    let response = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(path)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, headers, bytes.to_vec())
}

async fn get(path: &str) -> (StatusCode, Vec<u8>) {
    let response = app()
        .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec())
}

fn scenario_one() -> Value {
    json!({
        "housing_configuration": "2BHK",
        "has_ac": true,
        "has_fridge": true,
        "has_washing_machine": false
    })
}

fn export_body() -> Value {
    json!({
        "profile": {
            "name": "Asha Rao",
            "age": 34,
            "city": "Mumbai",
            "area": "Andheri West",
            "dwelling_type": "Flat"
        },
        "inputs": scenario_one()
    })
}

#[tokio::test]
async fn test_estimate_endpoint() {
    let (status, _, body) = post("/api/v1/estimate", scenario_one()).await;
    assert_eq!(status, StatusCode::OK);

    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["base_energy_kwh_per_day"], 3.6);
    assert_eq!(json["data"]["appliances_energy_kwh_per_day"], 6.0);
    assert_eq!(json["data"]["total_energy_kwh_per_day"], 9.6);
    assert_eq!(json["data"]["active_appliances"], json!(["AC", "Fridge"]));
}

#[tokio::test]
async fn test_estimate_defaults_missing_flags() {
    let (status, _, body) =
        post("/api/v1/estimate", json!({ "housing_configuration": "1BHK" })).await;
    assert_eq!(status, StatusCode::OK);

    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["data"]["total_energy_kwh_per_day"], 2.4);
    assert_eq!(json["data"]["active_appliances"], json!([]));
}

#[tokio::test]
async fn test_estimate_accepts_lowercase_configuration() {
    let (status, _, body) = post(
        "/api/v1/estimate",
        json!({ "housing_configuration": "2bhk", "has_ac": true }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["data"]["housing_configuration"], "2BHK");
    assert_eq!(json["data"]["total_energy_kwh_per_day"], 6.6);
}

#[tokio::test]
async fn test_estimate_rejects_unknown_configuration() {
    let (status, _, _) =
        post("/api/v1/estimate", json!({ "housing_configuration": "5BHK" })).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_insights_endpoint() {
    let (status, _, body) = post("/api/v1/insights", scenario_one()).await;
    assert_eq!(status, StatusCode::OK);

    let json: Value = serde_json::from_slice(&body).unwrap();
    let data = &json["data"];
    assert_eq!(data["summary"]["monthly_kwh"], 288.0);
    assert_eq!(data["summary"]["annual_kwh"], 3504.0);
    assert_eq!(data["summary"]["monthly_cost"], 1728.0);
    assert_eq!(data["summary"]["annual_cost"], 21024.0);
    assert_eq!(data["monthly_projection"].as_array().unwrap().len(), 12);
    assert_eq!(data["comparison"][0]["category"], "Your Consumption");
    assert_eq!(data["tips"].as_array().unwrap().len(), 8);
}

#[tokio::test]
async fn test_tips_endpoint() {
    let (status, body) = get("/api/v1/tips").await;
    assert_eq!(status, StatusCode::OK);
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["data"].as_array().unwrap().len(), 8);
}

#[tokio::test]
async fn test_csv_export() {
    let (status, headers, body) = post("/api/v1/export/csv", export_body()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers[header::CONTENT_TYPE], "text/csv; charset=utf-8");
    assert_eq!(
        headers[header::CONTENT_DISPOSITION],
        "attachment; filename=\"energy_report_Asha_Rao.csv\""
    );

    let csv = String::from_utf8(body).unwrap();
    assert!(csv.starts_with("Parameter,Value\n"));
    assert!(csv.contains("Total Energy (kWh/day),9.6\n"));
    assert!(csv.contains("Monthly Cost (₹),1728\n"));
}

#[tokio::test]
async fn test_summary_export_uses_clock() {
    let (status, headers, body) = post("/api/v1/export/summary", export_body()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        headers[header::CONTENT_DISPOSITION],
        "attachment; filename=\"energy_summary_Asha_Rao.txt\""
    );

    let text = String::from_utf8(body).unwrap();
    assert!(text.contains("Housing: 2BHK Flat\n"));
    assert!(text.contains("Estimated Monthly Cost: ₹1728\n"));
    assert!(text.contains("Generated on: 2024-05-01 09:30:00"));
}

#[tokio::test]
async fn test_export_rejects_underage_profile() {
    let mut body = export_body();
    body["profile"]["age"] = json!(15);

    let (status, _, body) = post("/api/v1/export/csv", body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["error"], "ValidationError");
}

#[tokio::test]
async fn test_export_without_profile_uses_defaults() {
    let (status, _, body) =
        post("/api/v1/export/csv", json!({ "inputs": scenario_one() })).await;
    assert_eq!(status, StatusCode::OK);

    let csv = String::from_utf8(body).unwrap();
    assert!(csv.contains("Age,30\n"));
    assert!(csv.contains("Housing Type,Flat\n"));
}

#[tokio::test]
async fn test_health_endpoints() {
    let (status, body) = get("/api/v1/health").await;
    assert_eq!(status, StatusCode::OK);
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["estimator"]["status"], "healthy");

    assert_eq!(get("/api/v1/health/live").await.0, StatusCode::OK);
    assert_eq!(get("/api/v1/health/ready").await.0, StatusCode::OK);
}

#[tokio::test]
async fn test_export_accepts_lowercase_dwelling_type() {
    let mut body = export_body();
    body["profile"]["dwelling_type"] = json!("tenement");

    let (status, _, body) = post("/api/v1/export/csv", body).await;
    assert_eq!(status, StatusCode::OK);
    assert!(String::from_utf8(body).unwrap().contains("Housing Type,Tenement\n"));
}

async fn export_disposition(path: &str, name: &str) -> (StatusCode, String) {
    let mut body = export_body();
    body["profile"]["name"] = json!(name);

    let (status, headers, _) = post(path, body).await;
    let disposition = headers
        .get(header::CONTENT_DISPOSITION)
        .map(|v| v.to_str().unwrap().to_string())
        .unwrap_or_default();
    (status, disposition)
}

#[tokio::test]
async fn test_export_name_with_quote() {
    let (status, disposition) = export_disposition("/api/v1/export/csv", "O\"Brien").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        disposition,
        "attachment; filename=\"energy_report_O_Brien.csv\"; filename*=UTF-8''energy_report_O%22Brien.csv"
    );
}

#[tokio::test]
async fn test_export_name_with_newline() {
    for path in ["/api/v1/export/csv", "/api/v1/export/summary"] {
        let (status, disposition) = export_disposition(path, "Asha\nRao").await;
        assert_eq!(status, StatusCode::OK, "{path}");
        assert!(disposition.contains("_Asha_Rao."), "{disposition}");
        assert!(disposition.contains("Asha%0ARao"), "{disposition}");
    }
}

#[tokio::test]
async fn test_export_non_ascii_name() {
    let (status, disposition) =
        export_disposition("/api/v1/export/summary", "आशा राव").await;
    assert_eq!(status, StatusCode::OK);
    assert!(disposition.is_ascii());
    assert!(disposition.starts_with("attachment; filename=\"energy_summary________.txt\""));
    assert!(disposition.contains("filename*=UTF-8''energy_summary_%E0%A4%86"));
}
