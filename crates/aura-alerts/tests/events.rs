use std::io::Write;
use std::sync::{Arc, Mutex};

use aura_alerts::events::AlertEvent;
use aura_core::models::emergency::EmergencyLevel;
use serde_json::json;

#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

fn capture(f: impl FnOnce()) -> String {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    let bytes = logs.0.lock().unwrap().clone();
    String::from_utf8(bytes).unwrap()
}

#[test]
fn emitted_event_carries_details() {
    let out = capture(|| {
        AlertEvent::new(EmergencyLevel::Critical, "9876543210", "108", true)
            .with_details(json!({ "score": 15, "risk_level": "Low" }))
            .emit();
    });
    assert!(out.contains("alert dispatched"));
    assert!(out.contains("alert.level=\"CRITICAL\"") || out.contains("alert.level=CRITICAL"));
    assert!(out.contains(r#""risk_level":"Low""#));
    assert!(out.contains(r#""score":15"#));
}

#[test]
fn undelivered_event_logs_at_warn() {
    let out = capture(|| {
        AlertEvent::new(EmergencyLevel::Warning, "9876543210", "104", false).emit();
    });
    assert!(out.contains("WARN"));
    assert!(out.contains("alert not delivered"));
    assert!(out.contains("alert.hotline=104"));
}
