use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Escalation tier. The absence of escalation is modelled as `None` by the
/// classifier rather than a third variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export)]
pub enum EmergencyLevel {
    Warning,
    Critical,
}

impl EmergencyLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            EmergencyLevel::Warning => "WARNING",
            EmergencyLevel::Critical => "CRITICAL",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EmergencyClassification {
    pub level: EmergencyLevel,
    pub message: String,
    /// Number for the UI to display or dial. Nothing here dials it.
    pub hotline: String,
    pub color: String,
}
