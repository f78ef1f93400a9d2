use prometheus::{
    Encoder, Histogram, HistogramOpts, IntCounter, IntCounterVec, Opts, Registry, TextEncoder,
};
use lazy_static::lazy_static;

lazy_static! {
    // Prediction metrics
    pub static ref PREDICTIONS_TOTAL: IntCounterVec = IntCounterVec::new(
        Opts::new("stroke_predictions_total", "Total stroke risk predictions"),
        &["risk_level"]
    ).expect("metric can be created");

    pub static ref RISK_SCORE: Histogram = Histogram::with_opts(
        HistogramOpts::new("stroke_risk_score", "Distribution of stroke risk scores")
            .buckets(vec![0.05, 0.1, 0.15, 0.2, 0.25, 0.33, 0.5, 0.66, 0.8, 0.99])
    ).expect("metric can be created");

    // Request rejections
    pub static ref REJECTED_REQUESTS_TOTAL: IntCounterVec = IntCounterVec::new(
        Opts::new("stroke_rejected_requests_total", "Requests rejected before scoring"),
        &["reason"]
    ).expect("metric can be created");

    // Batch uploads
    pub static ref BATCH_ROWS_TOTAL: IntCounter = IntCounter::new(
        "stroke_batch_rows_total",
        "Total risk percentage rows read from batch uploads"
    ).expect("metric can be created");
}

/// Register all metrics with the given registry
pub fn register_metrics(registry: &Registry) -> Result<(), prometheus::Error> {
    registry.register(Box::new(PREDICTIONS_TOTAL.clone()))?;
    registry.register(Box::new(RISK_SCORE.clone()))?;
    registry.register(Box::new(REJECTED_REQUESTS_TOTAL.clone()))?;
    registry.register(Box::new(BATCH_ROWS_TOTAL.clone()))?;

    Ok(())
}

/// Fresh registry with every service metric registered
pub fn build_registry() -> Result<Registry, prometheus::Error> {
    let registry = Registry::new();
    register_metrics(&registry)?;
    Ok(registry)
}

pub fn record_prediction(risk_level: &str, risk_score: f64) {
    PREDICTIONS_TOTAL.with_label_values(&[risk_level]).inc();
    RISK_SCORE.observe(risk_score);
}

pub fn record_rejection(reason: &str) {
    REJECTED_REQUESTS_TOTAL.with_label_values(&[reason]).inc();
}

/// Generate metrics output in Prometheus text format
pub fn render(registry: &Registry) -> Result<String, Box<dyn std::error::Error>> {
    let encoder = TextEncoder::new();
    let metric_families = registry.gather();
    let mut buffer = vec![];
    encoder.encode(&metric_families, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}
