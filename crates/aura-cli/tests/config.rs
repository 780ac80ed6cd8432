use aura_cli::config::{AuraConfig, load_config_from, migrate, redact_phone, save_config_to};
use aura_core::models::locale::Locale;
use serde_json::json;

#[test]
fn unversioned_config_is_read_as_v1() {
    let migrated = migrate(
        json!({
            "language": "hi",
            "asha_phone": "9876543210",
            "created_at": "2026-03-01T08:00:00Z",
        }),
        0,
    )
    .unwrap();
    assert_eq!(migrated["config_version"], 1);

    let config: AuraConfig = serde_json::from_value(migrated).unwrap();
    assert_eq!(config.language, Locale::Hi);
    assert_eq!(config.asha_phone.as_deref(), Some("9876543210"));
}

#[test]
fn current_config_passes_through_unchanged() {
    let raw = json!({ "config_version": 1, "created_at": "2026-03-01T08:00:00Z" });
    assert_eq!(migrate(raw.clone(), 1).unwrap(), raw);
}

#[test]
fn unversioned_non_object_is_rejected() {
    assert!(migrate(json!(["not", "an", "object"]), 0).is_err());
}

#[test]
fn newer_config_is_rejected() {
    assert!(migrate(json!({ "config_version": 7 }), 7).is_err());
}

#[test]
fn save_then_load_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let config = AuraConfig {
        language: Locale::Hi,
        asha_phone: Some("104".to_string()),
        ..AuraConfig::default()
    };
    let path = save_config_to(&config, dir.path()).unwrap();
    assert_eq!(load_config_from(&path).unwrap(), config);
}

#[test]
fn phone_numbers_are_redacted() {
    assert_eq!(redact_phone("+91 98765 43210"), "******3210");
    assert_eq!(redact_phone("108"), "****");
}
