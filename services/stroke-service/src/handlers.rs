use crate::errors::{ServiceError, ServiceResult};
use crate::metrics;
use crate::models::*;
use actix_web::{web, HttpResponse};
use prometheus::Registry;
use std::sync::Arc;
use stroke_risk::{parse_request_body, read_risk_percentages, PredictionSummary, RiskScorer};
use tracing::{info, warn};

/// Count and log a request turned away before scoring
fn reject(err: impl Into<ServiceError>) -> ServiceError {
    let err = err.into();
    metrics::record_rejection(err.reason());
    warn!(reason = err.reason(), "Request rejected: {}", err);
    err
}

// ===== Health Check =====
pub async fn health_check(start: web::Data<StartTime>) -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: start.uptime_seconds(),
    })
}

// ===== Predict Stroke Risk =====
pub async fn predict_stroke(
    body: web::Bytes,
    scorer: web::Data<Arc<RiskScorer>>,
) -> ServiceResult<HttpResponse> {
    let patient = parse_request_body(&body).map_err(reject)?;
    let assessment = scorer.assess(&patient);

    metrics::record_prediction(assessment.risk_level.as_str(), assessment.risk_score);
    info!(
        risk_level = %assessment.risk_level,
        risk_score = assessment.risk_score,
        factors = assessment.aggravating_factors.len(),
        "Stroke risk assessed"
    );

    Ok(HttpResponse::Ok().json(assessment))
}

// ===== Prediction Summary =====
pub async fn prediction_summary(
    body: web::Bytes,
    scorer: web::Data<Arc<RiskScorer>>,
) -> ServiceResult<HttpResponse> {
    let patient = parse_request_body(&body).map_err(reject)?;
    let assessment = scorer.assess(&patient);

    metrics::record_prediction(assessment.risk_level.as_str(), assessment.risk_score);

    Ok(HttpResponse::Ok().json(PredictionSummary::new(&patient, &assessment)))
}

// ===== Batch Risk Percentages =====
pub async fn risk_percentages(body: web::Bytes) -> ServiceResult<HttpResponse> {
    let csv = std::str::from_utf8(&body).map_err(|_| reject(ServiceError::InvalidEncoding))?;
    let entries = read_risk_percentages(csv);

    metrics::BATCH_ROWS_TOTAL.inc_by(entries.len() as u64);
    info!(rows = entries.len(), "Risk percentage batch read");

    Ok(HttpResponse::Ok().json(BatchRiskResponse::from(entries)))
}

// ===== Metrics =====
pub async fn metrics_endpoint(registry: web::Data<Registry>) -> ServiceResult<HttpResponse> {
    let body = metrics::render(registry.get_ref())
        .map_err(|e| ServiceError::InternalError(e.to_string()))?;

    Ok(HttpResponse::Ok()
        .content_type("text/plain; version=0.0.4")
        .body(body))
}

pub async fn method_not_allowed() -> ServiceResult<HttpResponse> {
    Err(reject(ServiceError::MethodNotAllowed))
}

// ===== Configure Routes =====
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/api/predict-stroke/")
            .route(web::post().to(predict_stroke))
            .default_service(web::to(method_not_allowed)),
    )
    .service(
        web::resource("/api/prediction-summary/")
            .route(web::post().to(prediction_summary))
            .default_service(web::to(method_not_allowed)),
    )
    .service(
        web::resource("/api/risk-percentages/")
            .route(web::post().to(risk_percentages))
            .default_service(web::to(method_not_allowed)),
    )
    .route("/health", web::get().to(health_check))
    .route("/metrics", web::get().to(metrics_endpoint));
}
