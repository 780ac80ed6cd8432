use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::risk::RiskAssessment;
use super::symptom::SymptomReport;

/// One day's entry in the cycle tracker.
///
/// Logs are appended in the order they were recorded and capped by the
/// storage layer, so older entries fall off first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyLog {
    pub id: Uuid,
    pub date: jiff::Timestamp,
    #[serde(default)]
    pub is_period: bool,
    #[serde(default)]
    pub symptoms: SymptomReport,
    /// Assessment computed when the entry was made, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assessment: Option<RiskAssessment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl DailyLog {
    pub fn new(date: jiff::Timestamp, is_period: bool, symptoms: SymptomReport) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            is_period,
            symptoms,
            assessment: None,
            notes: None,
        }
    }

    pub fn with_assessment(mut self, assessment: RiskAssessment) -> Self {
        self.assessment = Some(assessment);
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}
