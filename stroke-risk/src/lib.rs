//! Stroke risk scoring
//!
//! Heuristic stroke-risk assessment from a handful of patient attributes

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod batch;
pub mod error;
pub mod intake;
pub mod profile;
pub mod scoring;
pub mod types;

pub use batch::{read_risk_percentages, risk_color, BatchRiskEntry, PercentBand};
pub use error::{Error, Result};
pub use intake::parse_request_body;
pub use profile::{factor_chips, PredictionSummary};
pub use scoring::{assess, RiskScorer};
pub use types::*;
