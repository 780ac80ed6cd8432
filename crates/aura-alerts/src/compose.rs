use aura_core::models::emergency::{EmergencyClassification, EmergencyLevel};
use aura_core::models::locale::Locale;
use aura_core::models::risk::RiskAssessment;
use serde_json::json;

use crate::error::AlertError;
use crate::events::AlertEvent;
use crate::sender::{AlertReceipt, AlertSender};

/// Format the alert text sent to a health worker.
///
/// `subject` names the person assessed (a patient id or name).
pub fn compose_alert(
    classification: &EmergencyClassification,
    assessment: &RiskAssessment,
    locale: Locale,
    subject: &str,
) -> String {
    let (prefix, score_label, call_label) = match (locale, classification.level) {
        (Locale::En, EmergencyLevel::Critical) => ("[AURA CRITICAL]", "risk score", "Call"),
        (Locale::En, EmergencyLevel::Warning) => ("[AURA WARNING]", "risk score", "Call"),
        (Locale::Hi, EmergencyLevel::Critical) => ("[AURA गंभीर]", "जोखिम स्कोर", "कॉल करें"),
        (Locale::Hi, EmergencyLevel::Warning) => ("[AURA चेतावनी]", "जोखिम स्कोर", "कॉल करें"),
    };

    format!(
        "{prefix} {subject}: {score_label} {} ({}). {} {call_label} {}.",
        assessment.score, assessment.risk_level, classification.message, classification.hotline,
    )
}

/// Send an alert when there is something to escalate.
///
/// Returns `Ok(None)` without touching the sender when `classification` is
/// `None`.
pub fn dispatch<S: AlertSender + ?Sized>(
    sender: &S,
    recipient: &str,
    classification: Option<&EmergencyClassification>,
    assessment: &RiskAssessment,
    locale: Locale,
    subject: &str,
) -> Result<Option<AlertReceipt>, AlertError> {
    let Some(classification) = classification else {
        return Ok(None);
    };

    let message = compose_alert(classification, assessment, locale, subject);
    let receipt = sender.send_alert(recipient, &message)?;

    AlertEvent::new(
        classification.level,
        &receipt.recipient,
        &classification.hotline,
        receipt.sent,
    )
    .with_details(json!({
        "score": assessment.score,
        "risk_level": assessment.risk_level,
        "simulated": receipt.simulated,
    }))
    .emit();

    Ok(Some(receipt))
}

/// Dial URI for the platform telephony handler.
pub fn dial_uri(hotline: &str) -> String {
    let digits: String = hotline
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();
    format!("tel:{digits}")
}
