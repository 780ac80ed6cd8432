use aura_core::models::risk::RiskLevel;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Per-tier counts shown on the ASHA dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RiskSummary {
    pub assessed: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl RiskSummary {
    pub fn tally<I>(levels: I) -> Self
    where
        I: IntoIterator<Item = RiskLevel>,
    {
        levels.into_iter().fold(Self::default(), |mut acc, level| {
            acc.assessed += 1;
            match level {
                RiskLevel::High => acc.high += 1,
                RiskLevel::Medium => acc.medium += 1,
                RiskLevel::Low => acc.low += 1,
            }
            acc
        })
    }

    /// Patients needing follow-up (High and Medium).
    pub fn flagged(&self) -> usize {
        self.high + self.medium
    }
}
