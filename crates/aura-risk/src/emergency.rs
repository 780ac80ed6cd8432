use aura_core::models::emergency::{EmergencyClassification, EmergencyLevel};
use aura_core::models::locale::Locale;
use aura_core::models::risk::RiskLevel;
use aura_core::models::symptom::SymptomReport;

use crate::messages;
use crate::table::{COMMUNITY_HOTLINE, EMERGENCY_HOTLINE, ORANGE, RED};

/// Decide whether an assessment needs escalation, with English text.
///
/// A High tier or any critical symptom is enough for `Critical`; the two
/// triggers are independent. Otherwise Medium gives `Warning`, and Low gives
/// no escalation.
pub fn classify_emergency(
    risk_level: RiskLevel,
    report: &SymptomReport,
) -> Option<EmergencyClassification> {
    classify_emergency_localized(risk_level, report, Locale::En)
}

pub fn classify_emergency_localized(
    risk_level: RiskLevel,
    report: &SymptomReport,
    locale: Locale,
) -> Option<EmergencyClassification> {
    let (level, hotline, color) = if risk_level == RiskLevel::High || report.has_critical() {
        (EmergencyLevel::Critical, EMERGENCY_HOTLINE, RED)
    } else if risk_level == RiskLevel::Medium {
        (EmergencyLevel::Warning, COMMUNITY_HOTLINE, ORANGE)
    } else {
        return None;
    };

    Some(EmergencyClassification {
        level,
        message: messages::emergency_message(level, locale).to_string(),
        hotline: hotline.to_string(),
        color: color.to_string(),
    })
}
