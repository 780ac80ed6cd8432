use aura_core::models::daily_log::DailyLog;
use aura_core::models::patient::PatientRecord;
use aura_core::models::profile::UserProfile;
use aura_core::models::symptom::SymptomReport;
use aura_core::storage_keys;
use aura_storage::health::MAX_DAILY_LOGS;
use aura_storage::{FileStore, HealthStore, KeyValueStore, MemoryStore, StorageError};
use jiff::{Timestamp, ToSpan};

fn log_at(offset_days: i64) -> DailyLog {
    let base: Timestamp = "2026-01-01T08:00:00Z".parse().unwrap();
    let date = base.checked_add((offset_days * 24).hours()).unwrap();
    DailyLog::new(date, offset_days % 28 == 0, SymptomReport::from_ids(["fatigue"]))
}

#[test]
fn profile_is_validated_and_stamped() {
    let health = HealthStore::new(MemoryStore::new());
    assert!(health.get_user_profile().unwrap().is_none());

    let saved = health.save_user_profile(&UserProfile::new("Priya", 24)).unwrap();
    assert!(saved.updated_at.is_some());
    assert_eq!(health.get_user_profile().unwrap(), Some(saved));

    let err = health.save_user_profile(&UserProfile::new("Priya", 5)).unwrap_err();
    assert!(matches!(err, StorageError::Core(_)));
}

#[test]
fn daily_logs_append_in_order() {
    let health = HealthStore::new(MemoryStore::new());
    health.save_daily_log(log_at(0)).unwrap();
    let logs = health.save_daily_log(log_at(1)).unwrap();
    assert_eq!(logs.len(), 2);
    assert!(logs[0].date < logs[1].date);
    assert_eq!(health.get_daily_logs().unwrap(), logs);
}

#[test]
fn daily_logs_keep_most_recent_ninety() {
    let health = HealthStore::new(MemoryStore::new());
    let mut last = Vec::new();
    for day in 0..(MAX_DAILY_LOGS as i64 + 10) {
        last = health.save_daily_log(log_at(day)).unwrap();
    }
    assert_eq!(last.len(), MAX_DAILY_LOGS);
    assert_eq!(last[0].date, log_at(10).date);
    assert_eq!(last.last().unwrap().date, log_at(99).date);
}

#[test]
fn clear_all_data_wipes_everything() {
    let dir = tempfile::tempdir().unwrap();
    let health = HealthStore::new(FileStore::open(dir.path()).unwrap());
    health.save_user_profile(&UserProfile::new("Priya", 24)).unwrap();
    health.save_daily_log(log_at(0)).unwrap();

    let assessment = aura_core::models::risk::RiskAssessment {
        score: 40,
        risk_level: aura_core::models::risk::RiskLevel::Medium,
        message: String::new(),
        color: String::new(),
    };
    health
        .add_patient_record(PatientRecord::from_assessment("Rampur", &assessment, Timestamp::now()))
        .unwrap();

    health.clear_all_data().unwrap();
    assert!(health.get_user_profile().unwrap().is_none());
    assert!(health.get_daily_logs().unwrap().is_empty());
    assert!(health.get_patient_records().unwrap().is_empty());
    assert_eq!(
        health.inner().get_raw(storage_keys::DAILY_LOGS).unwrap().as_deref(),
        Some("[]")
    );
}

#[test]
fn malformed_symptom_entry_keeps_log_history() {
    let health = HealthStore::new(MemoryStore::new());
    health.save_daily_log(log_at(0)).unwrap();

    let mut stored: serde_json::Value =
        serde_json::from_str(&health.inner().get_raw(storage_keys::DAILY_LOGS).unwrap().unwrap())
            .unwrap();
    stored[0]["symptoms"] = serde_json::json!(["fever", 7]);
    health
        .inner()
        .put_raw(storage_keys::DAILY_LOGS, &stored.to_string())
        .unwrap();

    let logs = health.save_daily_log(log_at(1)).unwrap();
    assert_eq!(logs.len(), 2);
    assert_eq!(
        logs[0].symptoms,
        aura_core::models::symptom::SymptomReport::from_ids(["fever"])
    );
}
