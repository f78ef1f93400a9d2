pub mod config;
pub mod errors;
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod models;

// Re-exports for convenience
pub use errors::{ServiceError, ServiceResult};
pub use stroke_risk::RiskScorer;
