//! Short profile labels shown next to a prediction

use crate::{PatientAttributes, RiskAssessment, RiskLevel, SmokingStatus};
use serde::{Deserialize, Serialize};

const SENIOR_AGE: f64 = 65.0;

/// Chip labels for the notable parts of a patient profile, in display order.
///
/// Unlike aggravating factors this list may be empty, and it also flags age.
pub fn factor_chips(patient: &PatientAttributes) -> Vec<&'static str> {
    let mut chips = Vec::new();

    if patient.hypertension {
        chips.push("Hypertension");
    }
    if patient.heart_disease {
        chips.push("Heart disease");
    }
    if patient.bmi >= 30.0 {
        chips.push("Obese BMI");
    } else if patient.bmi >= 25.0 {
        chips.push("Overweight BMI");
    }
    if patient.avg_glucose_level >= 126.0 {
        chips.push("High glucose");
    }
    match patient.smoking_status {
        SmokingStatus::Smokes => chips.push("Active smoker"),
        SmokingStatus::FormerlySmoked => chips.push("Past smoker"),
        _ => {}
    }
    if patient.age >= SENIOR_AGE {
        chips.push("Age ≥ 65");
    }

    chips
}

/// Compact view of an assessment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionSummary {
    /// Risk tier
    pub risk_level: RiskLevel,
    /// Score as a whole percentage
    pub risk_percent: u8,
    /// Profile chips
    pub factor_chips: Vec<String>,
}

impl PredictionSummary {
    /// Build from a patient and the assessment computed for it
    pub fn new(patient: &PatientAttributes, assessment: &RiskAssessment) -> Self {
        Self {
            risk_level: assessment.risk_level,
            risk_percent: assessment.risk_percent(),
            factor_chips: factor_chips(patient).into_iter().map(String::from).collect(),
        }
    }
}
