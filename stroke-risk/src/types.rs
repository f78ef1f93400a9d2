//! Core types for stroke risk scoring

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lower bound of the medium tier
pub const MEDIUM_RISK_THRESHOLD: f64 = 0.33;

/// Lower bound of the high tier
pub const HIGH_RISK_THRESHOLD: f64 = 0.66;

/// Upper clamp applied to every score
pub const MAX_RISK_SCORE: f64 = 0.99;

/// Smoking history label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SmokingStatus {
    /// Current smoker
    #[serde(rename = "smokes")]
    Smokes,
    /// Former smoker
    #[serde(rename = "formerly smoked")]
    FormerlySmoked,
    /// Never smoked
    #[serde(rename = "never smoked")]
    NeverSmoked,
    /// Not reported, or an unrecognized label
    #[default]
    #[serde(rename = "Unknown")]
    Unknown,
}

impl SmokingStatus {
    /// Map a wire label to a status. Matching is exact; anything else is `Unknown`.
    pub fn from_label(label: &str) -> Self {
        match label {
            "smokes" => SmokingStatus::Smokes,
            "formerly smoked" => SmokingStatus::FormerlySmoked,
            "never smoked" => SmokingStatus::NeverSmoked,
            _ => SmokingStatus::Unknown,
        }
    }

    /// Wire label
    pub fn label(&self) -> &'static str {
        match self {
            SmokingStatus::Smokes => "smokes",
            SmokingStatus::FormerlySmoked => "formerly smoked",
            SmokingStatus::NeverSmoked => "never smoked",
            SmokingStatus::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for SmokingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Typed patient record consumed by the scorer
///
/// Every field already carries its default; see [`crate::intake`] for how
/// partial or malformed request data is coerced into this shape.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PatientAttributes {
    /// Age in years
    pub age: f64,
    /// Body mass index
    pub bmi: f64,
    /// Diagnosed hypertension
    pub hypertension: bool,
    /// Diagnosed heart disease
    pub heart_disease: bool,
    /// Average blood glucose level (mg/dL)
    pub avg_glucose_level: f64,
    /// Smoking history
    pub smoking_status: SmokingStatus,
}

/// Risk tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    /// score < 0.33
    Low,
    /// 0.33 <= score < 0.66
    Medium,
    /// score >= 0.66
    High,
}

impl RiskLevel {
    /// Tier for a (clamped) risk score
    pub fn from_score(score: f64) -> Self {
        if score < MEDIUM_RISK_THRESHOLD {
            RiskLevel::Low
        } else if score < HIGH_RISK_THRESHOLD {
            RiskLevel::Medium
        } else {
            RiskLevel::High
        }
    }

    /// Lowercase wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Risk assessment result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// Risk tier
    pub risk_level: RiskLevel,

    /// Heuristic score in [0.0, 0.99]
    pub risk_score: f64,

    /// Conditions that raised the score, or a single fallback message
    pub aggravating_factors: Vec<String>,

    /// Static recommendations
    pub suggestions: Vec<String>,
}

impl RiskAssessment {
    /// Score as a whole percentage, rounded half away from zero
    pub fn risk_percent(&self) -> u8 {
        (self.risk_score * 100.0).round() as u8
    }
}
