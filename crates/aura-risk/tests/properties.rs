use aura_core::models::symptom::{Symptom, SymptomReport};
use aura_risk::{classify_emergency, compute_risk, compute_risk_from_ids};
use proptest::prelude::*;

fn any_report() -> impl Strategy<Value = SymptomReport> {
    proptest::sample::subsequence(Symptom::ALL.to_vec(), 0..=Symptom::ALL.len())
        .prop_map(|symptoms| symptoms.into_iter().collect())
}

proptest! {
    #[test]
    fn adding_symptoms_never_lowers_score(
        base in any_report(),
        extra in any_report(),
    ) {
        let superset: SymptomReport = base.iter().chain(extra.iter()).collect();
        prop_assert!(base.is_subset(&superset));
        prop_assert!(compute_risk(&base).score <= compute_risk(&superset).score);
        prop_assert!(compute_risk(&base).risk_level <= compute_risk(&superset).risk_level);
    }

    #[test]
    fn repeated_calls_are_identical(report in any_report()) {
        let first = compute_risk(&report);
        let second = compute_risk(&report);
        prop_assert_eq!(&first, &second);

        let level = first.risk_level;
        prop_assert_eq!(
            classify_emergency(level, &report),
            classify_emergency(level, &report)
        );
    }

    #[test]
    fn arbitrary_ids_never_fail(ids in proptest::collection::vec(".{0,20}", 0..12)) {
        let result = compute_risk_from_ids(&ids);
        prop_assert!(result.score <= 125);
    }

    #[test]
    fn critical_symptom_always_escalates(report in any_report()) {
        let level = compute_risk(&report).risk_level;
        if report.has_critical() {
            prop_assert!(classify_emergency(level, &report).is_some());
        }
    }
}
