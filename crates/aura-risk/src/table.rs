use aura_core::models::risk::RiskLevel;
use aura_core::models::symptom::Symptom;

/// Canonical weight of a symptom. The single source of truth for scoring.
pub const fn weight(symptom: Symptom) -> u32 {
    match symptom {
        Symptom::HeavyBleeding => 20,
        Symptom::SevereCramps => 15,
        Symptom::Fever => 15,
        Symptom::IrregularCycle => 20,
        Symptom::Discharge => 15,
        Symptom::Fatigue => 10,
        Symptom::Nausea => 10,
        Symptom::Headache => 10,
        Symptom::Bloating => 5,
        Symptom::MoodSwings => 5,
    }
}

/// The weight table in display order.
pub const SYMPTOM_WEIGHTS: [(Symptom, u32); 10] = {
    let mut table = [(Symptom::HeavyBleeding, 0); 10];
    let mut i = 0;
    while i < Symptom::ALL.len() {
        let symptom = Symptom::ALL[i];
        table[i] = (symptom, weight(symptom));
        i += 1;
    }
    table
};

/// Lowest score classified as High.
pub const HIGH_THRESHOLD: u32 = 50;
/// Lowest score classified as Medium.
pub const MEDIUM_THRESHOLD: u32 = 25;

/// National ambulance line (India).
pub const EMERGENCY_HOTLINE: &str = "108";
/// Health helpline routed to the community health worker network.
pub const COMMUNITY_HOTLINE: &str = "104";

pub const RED: &str = "#FF3B30";
pub const ORANGE: &str = "#FF9500";
pub const GREEN: &str = "#34C759";

/// Presentation color for a risk tier.
pub fn tier_color(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::High => RED,
        RiskLevel::Medium => ORANGE,
        RiskLevel::Low => GREEN,
    }
}
