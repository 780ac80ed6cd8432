use aura_core::models::locale::Locale;
use aura_core::models::risk::RiskLevel;
use aura_core::models::symptom::{Symptom, SymptomReport};

#[test]
fn ids_round_trip_through_from_str() {
    for symptom in Symptom::ALL {
        assert_eq!(symptom.id().parse::<Symptom>().unwrap(), symptom);
    }
    assert!("Heavy Bleeding".parse::<Symptom>().is_err());
}

#[test]
fn critical_subset_is_bleeding_cramps_fever() {
    let critical: Vec<_> = Symptom::ALL.into_iter().filter(|s| s.is_critical()).collect();
    assert_eq!(
        critical,
        vec![Symptom::HeavyBleeding, Symptom::SevereCramps, Symptom::Fever]
    );
}

#[test]
fn partition_reports_unknown_ids() {
    let (report, unknown) =
        SymptomReport::partition_ids(["nausea", "toothache", "nausea", "bloating"]);
    assert_eq!(report.len(), 2);
    assert!(report.contains(Symptom::Nausea));
    assert!(report.contains(Symptom::Bloating));
    assert_eq!(unknown, vec!["toothache".to_string()]);
}

#[test]
fn report_deserializes_leniently() {
    let report: SymptomReport =
        serde_json::from_str(r#"["fever", "sneezing", "fever", "headache"]"#).unwrap();
    assert_eq!(report.len(), 2);
    assert!(report.has_critical());

    let json = serde_json::to_string(&report).unwrap();
    assert_eq!(json, r#"["fever","headache"]"#);
}

#[test]
fn risk_level_parses_exact_names() {
    assert_eq!("Low".parse::<RiskLevel>().unwrap(), RiskLevel::Low);
    assert_eq!("High".parse::<RiskLevel>().unwrap(), RiskLevel::High);
    assert!("HIGH".parse::<RiskLevel>().is_err());
}

#[test]
fn locale_toggles_between_english_and_hindi() {
    assert_eq!(Locale::default(), Locale::En);
    assert_eq!(Locale::En.toggle(), Locale::Hi);
    assert_eq!(Locale::Hi.toggle(), Locale::En);
    assert_eq!(" HI ".parse::<Locale>().unwrap(), Locale::Hi);
    assert!("fr".parse::<Locale>().is_err());
}

#[test]
fn report_skips_non_string_entries() {
    let report: SymptomReport =
        serde_json::from_str(r#"["fever", 1, null, {"id": "nausea"}, ["bloating"], true]"#)
            .unwrap();
    assert_eq!(report.len(), 1);
    assert!(report.contains(Symptom::Fever));
}
