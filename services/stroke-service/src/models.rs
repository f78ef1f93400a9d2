use serde::{Deserialize, Serialize};
use std::time::Instant;
use stroke_risk::BatchRiskEntry;

// ===== Batch Upload =====
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct BatchRiskResponse {
    pub count: usize,
    pub results: Vec<BatchRiskEntry>,
}

impl From<Vec<BatchRiskEntry>> for BatchRiskResponse {
    fn from(results: Vec<BatchRiskEntry>) -> Self {
        Self {
            count: results.len(),
            results,
        }
    }
}

// ===== Health Check =====
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
}

/// Moment the service started, shared as app data
#[derive(Debug, Clone, Copy)]
pub struct StartTime(pub Instant);

impl StartTime {
    pub fn now() -> Self {
        StartTime(Instant::now())
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.0.elapsed().as_secs()
    }
}
