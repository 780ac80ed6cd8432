use aura_core::models::locale::Locale;
use aura_core::models::risk::{RiskAssessment, RiskLevel};
use aura_core::models::symptom::SymptomReport;
use tracing::debug;

use crate::messages;
use crate::table::{self, HIGH_THRESHOLD, MEDIUM_THRESHOLD};

/// Map a score to its tier. Guards run top-down so each boundary value
/// belongs to the higher tier.
pub fn tier_for_score(score: u32) -> RiskLevel {
    if score >= HIGH_THRESHOLD {
        RiskLevel::High
    } else if score >= MEDIUM_THRESHOLD {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

/// Sum of weights for the distinct symptoms in the report.
pub fn total_weight(report: &SymptomReport) -> u32 {
    report.iter().map(table::weight).sum()
}

/// Score a report and attach English guidance.
pub fn compute_risk(report: &SymptomReport) -> RiskAssessment {
    assess(report, Locale::En)
}

/// Score a report and attach guidance in the given locale.
pub fn assess(report: &SymptomReport, locale: Locale) -> RiskAssessment {
    let score = total_weight(report);
    let risk_level = tier_for_score(score);
    RiskAssessment {
        score,
        risk_level,
        message: messages::risk_message(risk_level, locale).to_string(),
        color: table::tier_color(risk_level).to_string(),
    }
}

/// Score raw identifiers. Unknown ids contribute nothing and never fail.
pub fn compute_risk_from_ids<I, S>(ids: I) -> RiskAssessment
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let (report, unknown) = SymptomReport::partition_ids(ids);
    if !unknown.is_empty() {
        debug!(?unknown, "ignoring unrecognized symptom ids");
    }
    compute_risk(&report)
}
