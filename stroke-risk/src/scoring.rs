//! Risk scoring engine

use crate::{
    PatientAttributes, RiskAssessment, RiskLevel, SmokingStatus, MAX_RISK_SCORE,
};

const BASE_SCORE: f64 = 0.05;

const AGE_THRESHOLD: f64 = 45.0;
const BMI_OVERWEIGHT: f64 = 25.0;
const BMI_OBESE: f64 = 30.0;
const GLUCOSE_THRESHOLD: f64 = 110.0;
const GLUCOSE_ELEVATED: f64 = 126.0;

const HYPERTENSION_WEIGHT: f64 = 0.02;
const HEART_DISEASE_WEIGHT: f64 = 0.02;
const SMOKES_WEIGHT: f64 = 0.03;
const FORMERLY_SMOKED_WEIGHT: f64 = 0.01;

/// Substituted when no aggravating factor applies
pub const NO_FACTORS_MESSAGE: &str =
    "No major aggravating factors identified from the provided data.";

/// Recommendations returned with every assessment
pub const SUGGESTIONS: [&str; 4] = [
    "Review blood pressure control and antihypertensive therapy.",
    "Assess glycemic control and lifestyle factors.",
    "Encourage regular physical activity and weight management.",
    "Consider comprehensive cardiovascular risk assessment.",
];

/// Risk scorer
#[derive(Debug, Clone, Copy, Default)]
pub struct RiskScorer {}

impl RiskScorer {
    /// Create new risk scorer
    pub fn new() -> Self {
        Self {}
    }

    /// Assess stroke risk for a patient record
    pub fn assess(&self, patient: &PatientAttributes) -> RiskAssessment {
        let risk_score = self.score(patient);

        RiskAssessment {
            risk_level: RiskLevel::from_score(risk_score),
            risk_score,
            aggravating_factors: self.aggravating_factors(patient),
            suggestions: SUGGESTIONS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Clamped heuristic score.
    ///
    /// Terms are summed in a fixed order so the float result is reproducible.
    pub fn score(&self, patient: &PatientAttributes) -> f64 {
        let mut base = BASE_SCORE;

        base += 0.01 * (patient.age - AGE_THRESHOLD).max(0.0) / 10.0;
        if patient.hypertension {
            base += HYPERTENSION_WEIGHT;
        }
        if patient.heart_disease {
            base += HEART_DISEASE_WEIGHT;
        }
        base += 0.01 * (patient.bmi - BMI_OVERWEIGHT).max(0.0) / 5.0;
        base += 0.01 * (patient.avg_glucose_level - GLUCOSE_THRESHOLD).max(0.0) / 20.0;

        match patient.smoking_status {
            SmokingStatus::Smokes => base += SMOKES_WEIGHT,
            SmokingStatus::FormerlySmoked => base += FORMERLY_SMOKED_WEIGHT,
            SmokingStatus::NeverSmoked | SmokingStatus::Unknown => {}
        }

        base.clamp(0.0, MAX_RISK_SCORE)
    }

    fn aggravating_factors(&self, patient: &PatientAttributes) -> Vec<String> {
        let mut factors = Vec::new();

        if patient.hypertension {
            factors.push("History of hypertension".to_string());
        }
        if patient.heart_disease {
            factors.push("Existing heart disease".to_string());
        }

        if patient.bmi >= BMI_OBESE {
            factors.push("Obese body mass index".to_string());
        } else if patient.bmi >= BMI_OVERWEIGHT {
            factors.push("Overweight body mass index".to_string());
        }

        if patient.avg_glucose_level >= GLUCOSE_ELEVATED {
            factors.push("Elevated average glucose level".to_string());
        }

        match patient.smoking_status {
            SmokingStatus::Smokes => factors.push("Active smoking".to_string()),
            SmokingStatus::FormerlySmoked => factors.push("Past smoking history".to_string()),
            SmokingStatus::NeverSmoked | SmokingStatus::Unknown => {}
        }

        if factors.is_empty() {
            factors.push(NO_FACTORS_MESSAGE.to_string());
        }

        factors
    }
}

/// Assess a patient with the default scorer
pub fn assess(patient: &PatientAttributes) -> RiskAssessment {
    RiskScorer::new().assess(patient)
}
