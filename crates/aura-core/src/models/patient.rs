use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::risk::{RiskAssessment, RiskLevel};

/// A patient assessment recorded by an ASHA worker during a village visit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PatientRecord {
    pub id: Uuid,
    pub village: String,
    pub risk_level: RiskLevel,
    pub score: u32,
    pub assessed_at: jiff::Timestamp,
}

impl PatientRecord {
    pub fn from_assessment(
        village: impl Into<String>,
        assessment: &RiskAssessment,
        assessed_at: jiff::Timestamp,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            village: village.into(),
            risk_level: assessment.risk_level,
            score: assessment.score,
            assessed_at,
        }
    }
}
