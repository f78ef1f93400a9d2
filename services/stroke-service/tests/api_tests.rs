//! HTTP-level tests for the stroke risk endpoints

use actix_web::{http::StatusCode, test, web, App};
use serde_json::{json, Value};
use std::sync::Arc;
use stroke_service::{handlers, metrics, middleware::RateLimiter, models::StartTime, RiskScorer};

const FALLBACK: &str = "No major aggravating factors identified from the provided data.";

macro_rules! app {
    () => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(Arc::new(RiskScorer::new())))
                .app_data(web::Data::new(metrics::build_registry().unwrap()))
                .app_data(web::Data::new(StartTime::now()))
                .configure(handlers::configure_routes),
        )
        .await
    };
}

fn predict(body: impl Into<actix_web::web::Bytes>) -> test::TestRequest {
    test::TestRequest::post()
        .uri("/api/predict-stroke/")
        .insert_header(("content-type", "application/json"))
        .set_payload(body.into())
}

#[actix_web::test]
async fn test_empty_object_scores_baseline() {
    let app = app!();

    let resp = test::call_service(&app, predict("{}").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["risk_score"].as_f64(), Some(0.05));
    assert_eq!(body["risk_level"], "low");
    assert_eq!(body["aggravating_factors"], json!([FALLBACK]));
    assert_eq!(body["suggestions"].as_array().unwrap().len(), 4);
}

#[actix_web::test]
async fn test_full_profile() {
    let app = app!();
    let payload = json!({
        "age": 70,
        "hypertension": 1,
        "heart_disease": 1,
        "bmi": 32,
        "avg_glucose_level": 150,
        "smoking_status": "smokes",
        "gender": "Male",
        "marital_status": "Yes"
    });

    let resp = test::call_service(&app, predict(payload.to_string()).to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    let score = body["risk_score"].as_f64().unwrap();
    assert!((score - 0.179).abs() < 1e-9);
    assert_eq!(body["risk_level"], "low");
    assert_eq!(
        body["aggravating_factors"],
        json!([
            "History of hypertension",
            "Existing heart disease",
            "Obese body mass index",
            "Elevated average glucose level",
            "Active smoking"
        ])
    );

    let keys: Vec<&String> = body.as_object().unwrap().keys().collect();
    assert_eq!(keys.len(), 4);
}

#[actix_web::test]
async fn test_partial_and_malformed_fields_are_lenient() {
    let app = app!();
    let payload = json!({"bmi": "27", "age": null, "smoking_status": "formerly smoked"});

    let resp = test::call_service(&app, predict(payload.to_string()).to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body["aggravating_factors"],
        json!(["Overweight body mass index", "Past smoking history"])
    );
}

#[actix_web::test]
async fn test_get_not_allowed() {
    let app = app!();

    let req = test::TestRequest::get().uri("/api/predict-stroke/").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "POST required");
}

#[actix_web::test]
async fn test_other_routes_post_only() {
    let app = app!();

    for uri in ["/api/prediction-summary/", "/api/risk-percentages/"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED, "{}", uri);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "POST required");
    }

    let req = test::TestRequest::put().uri("/api/risk-percentages/").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[actix_web::test]
async fn test_out_of_range_numbers_saturate() {
    let app = app!();

    for payload in [r#"{"age": 1e400}"#, r#"{"bmi": "1e400"}"#] {
        let resp = test::call_service(&app, predict(payload).to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK, "{}", payload);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["risk_score"].as_f64(), Some(0.99));
        assert_eq!(body["risk_level"], "high");
    }
}

#[actix_web::test]
async fn test_fractional_flag_not_set() {
    let app = app!();

    let resp = test::call_service(&app, predict(r#"{"hypertension": 0.5}"#).to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["risk_score"].as_f64(), Some(0.05));
    assert_eq!(body["aggravating_factors"], json!([FALLBACK]));
}

#[actix_web::test]
async fn test_invalid_json_rejected() {
    let app = app!();

    let resp = test::call_service(&app, predict("age=70&bmi=31").to_request()).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Invalid JSON");
}

#[actix_web::test]
async fn test_non_object_rejected() {
    let app = app!();

    let resp = test::call_service(&app, predict("[70, 1]").to_request()).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_prediction_summary() {
    let app = app!();
    let payload = json!({"age": 80, "hypertension": 1, "avg_glucose_level": 200});

    let req = test::TestRequest::post()
        .uri("/api/prediction-summary/")
        .set_payload(payload.to_string())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    // 0.05 + 0.035 + 0.02 + 0.045 = 0.15
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["risk_level"], "low");
    assert_eq!(body["risk_percent"], 15);
    assert_eq!(
        body["factor_chips"],
        json!(["Hypertension", "High glucose", "Age ≥ 65"])
    );
}

#[actix_web::test]
async fn test_risk_percentages_batch() {
    let app = app!();

    let req = test::TestRequest::post()
        .uri("/api/risk-percentages/")
        .insert_header(("content-type", "text/csv"))
        .set_payload("stroke_risk_percent\n4.2\n\n91\n")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["count"], 2);
    assert_eq!(body["results"][0]["id"], "Patient 1");
    assert_eq!(body["results"][0]["band"], "Low");
    assert_eq!(body["results"][1]["id"], "Patient 3");
    assert_eq!(body["results"][1]["band"], "High");
}

#[actix_web::test]
async fn test_risk_percentages_rejects_binary() {
    let app = app!();

    let req = test::TestRequest::post()
        .uri("/api/risk-percentages/")
        .set_payload(vec![0xff, 0xfe, 0x00])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_health() {
    let app = app!();

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "healthy");
}

#[actix_web::test]
async fn test_metrics_exposed() {
    let app = app!();

    test::call_service(&app, predict("{}").to_request()).await;

    let req = test::TestRequest::get().uri("/metrics").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = test::read_body(resp).await;
    let text = std::str::from_utf8(&body).unwrap();
    assert!(text.contains("stroke_predictions_total"));
}

#[actix_web::test]
async fn test_rate_limit() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(Arc::new(RiskScorer::new())))
            .app_data(web::Data::new(StartTime::now()))
            .wrap(RateLimiter::new(1))
            .configure(handlers::configure_routes),
    )
    .await;

    let first = test::call_service(&app, predict("{}").to_request()).await;
    assert_eq!(first.status(), StatusCode::OK);

    let second = test::try_call_service(&app, predict("{}").to_request()).await;
    let err = second.err().expect("second request should be throttled");
    assert_eq!(
        err.as_response_error().status_code(),
        StatusCode::TOO_MANY_REQUESTS
    );

    let req = test::TestRequest::get().uri("/health").to_request();
    let health = test::call_service(&app, req).await;
    assert_eq!(health.status(), StatusCode::OK);
}
