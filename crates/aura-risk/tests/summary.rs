use aura_core::models::risk::RiskLevel;
use aura_risk::summary::RiskSummary;

#[test]
fn empty_tally_is_zero() {
    assert_eq!(RiskSummary::tally([]), RiskSummary::default());
}

#[test]
fn counts_each_tier() {
    let summary = RiskSummary::tally([
        RiskLevel::High,
        RiskLevel::Medium,
        RiskLevel::Low,
        RiskLevel::High,
        RiskLevel::Medium,
    ]);
    assert_eq!(summary.assessed, 5);
    assert_eq!(summary.high, 2);
    assert_eq!(summary.medium, 2);
    assert_eq!(summary.low, 1);
    assert_eq!(summary.flagged(), 4);
}
