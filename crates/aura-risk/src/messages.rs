//! Localized guidance text. Only these strings vary by locale; scores and
//! tiers never do.

use aura_core::models::emergency::EmergencyLevel;
use aura_core::models::locale::Locale;
use aura_core::models::risk::RiskLevel;

pub fn risk_message(level: RiskLevel, locale: Locale) -> &'static str {
    match (locale, level) {
        (Locale::En, RiskLevel::High) => "Please consult a doctor immediately.",
        (Locale::En, RiskLevel::Medium) => {
            "Monitor your symptoms and see a doctor if they persist."
        }
        (Locale::En, RiskLevel::Low) => "You appear to be healthy. Keep tracking!",
        (Locale::Hi, RiskLevel::High) => "कृपया तुरंत डॉक्टर से परामर्श लें।",
        (Locale::Hi, RiskLevel::Medium) => {
            "अपने लक्षणों पर नज़र रखें और बने रहें तो डॉक्टर से मिलें।"
        }
        (Locale::Hi, RiskLevel::Low) => "आप स्वस्थ लग रही हैं। ट्रैकिंग जारी रखें!",
    }
}

pub fn emergency_message(level: EmergencyLevel, locale: Locale) -> &'static str {
    match (locale, level) {
        (Locale::En, EmergencyLevel::Critical) => "Seek medical help immediately.",
        (Locale::En, EmergencyLevel::Warning) => "Contact your ASHA worker or local clinic.",
        (Locale::Hi, EmergencyLevel::Critical) => "तुरंत चिकित्सा सहायता लें।",
        (Locale::Hi, EmergencyLevel::Warning) => {
            "अपनी आशा कार्यकर्ता या नज़दीकी क्लिनिक से संपर्क करें।"
        }
    }
}

/// Badge label for a tier, e.g. "HIGH RISK".
pub fn risk_label(level: RiskLevel, locale: Locale) -> &'static str {
    match (locale, level) {
        (Locale::En, RiskLevel::High) => "HIGH RISK",
        (Locale::En, RiskLevel::Medium) => "MODERATE RISK",
        (Locale::En, RiskLevel::Low) => "LOW RISK",
        (Locale::Hi, RiskLevel::High) => "उच्च जोखिम",
        (Locale::Hi, RiskLevel::Medium) => "मध्यम जोखिम",
        (Locale::Hi, RiskLevel::Low) => "कम जोखिम",
    }
}
