use std::sync::Mutex;

use aura_alerts::{AlertError, AlertReceipt, AlertSender, SimulatedSms, compose_alert, dial_uri, dispatch};
use aura_core::models::locale::Locale;
use aura_core::models::symptom::SymptomReport;
use aura_risk::{classify_emergency, compute_risk};

#[derive(Default)]
struct RecordingSender {
    sent: Mutex<Vec<(String, String)>>,
}

impl AlertSender for RecordingSender {
    fn send_alert(&self, recipient: &str, message: &str) -> Result<AlertReceipt, AlertError> {
        self.sent
            .lock()
            .unwrap()
            .push((recipient.to_string(), message.to_string()));
        Ok(AlertReceipt {
            sent: true,
            simulated: false,
            recipient: recipient.to_string(),
            message: message.to_string(),
        })
    }
}

#[test]
fn simulated_sms_acknowledges() {
    let receipt = SimulatedSms.send_alert(" 9876543210 ", "hello").unwrap();
    assert!(receipt.sent);
    assert!(receipt.simulated);
    assert_eq!(receipt.recipient, "9876543210");
}

#[test]
fn simulated_sms_rejects_empty_recipient() {
    let err = SimulatedSms.send_alert("  ", "hello").unwrap_err();
    assert!(matches!(err, AlertError::EmptyRecipient));
}

#[test]
fn critical_alert_mentions_score_and_hotline() {
    let report = SymptomReport::from_ids(["fever"]);
    let assessment = compute_risk(&report);
    let classification = classify_emergency(assessment.risk_level, &report).unwrap();

    let text = compose_alert(&classification, &assessment, Locale::En, "Patient #001");
    assert!(text.starts_with("[AURA CRITICAL] Patient #001"));
    assert!(text.contains("risk score 15 (Low)"));
    assert!(text.contains("Seek medical help immediately."));
    assert!(text.ends_with("Call 108."));
}

#[test]
fn dispatch_sends_when_classified() {
    let sender = RecordingSender::default();
    let report = SymptomReport::from_ids(["heavy_bleeding", "irregular_cycle"]);
    let assessment = compute_risk(&report);
    let classification = classify_emergency(assessment.risk_level, &report);

    let receipt = dispatch(
        &sender,
        "9876543210",
        classification.as_ref(),
        &assessment,
        Locale::En,
        "Priya",
    )
    .unwrap()
    .expect("should send");

    assert!(receipt.sent);
    let sent = sender.sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].0, "9876543210");
    assert!(sent[0].1.contains("Priya"));
}

#[test]
fn dispatch_skips_without_classification() {
    let sender = RecordingSender::default();
    let report = SymptomReport::from_ids(["bloating"]);
    let assessment = compute_risk(&report);
    let classification = classify_emergency(assessment.risk_level, &report);
    assert!(classification.is_none());

    let receipt = dispatch(&sender, "9876543210", None, &assessment, Locale::En, "Priya").unwrap();
    assert!(receipt.is_none());
    assert!(sender.sent.lock().unwrap().is_empty());
}

#[test]
fn dial_uri_strips_formatting() {
    assert_eq!(dial_uri("108"), "tel:108");
    assert_eq!(dial_uri("+91 98765-43210"), "tel:+919876543210");
}
