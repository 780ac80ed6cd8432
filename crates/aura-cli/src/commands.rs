use std::fmt::Write as _;

use aura_alerts::{SimulatedSms, dial_uri, dispatch};
use aura_core::cycle::predict_next;
use aura_core::models::daily_log::DailyLog;
use aura_core::models::emergency::EmergencyClassification;
use aura_core::models::locale::Locale;
use aura_core::models::patient::PatientRecord;
use aura_core::models::profile::{Role, UserProfile};
use aura_core::models::risk::RiskAssessment;
use aura_core::models::symptom::{Symptom, SymptomReport};
use aura_risk::messages::risk_label;
use aura_risk::summary::RiskSummary;
use aura_risk::table;
use aura_risk::{assess, classify_emergency_localized};
use serde::Serialize;
use tracing::{info, warn};

use crate::config::redact_phone;
use crate::state::AppState;

/// Options for `aura assess`.
#[derive(Debug, Clone, Default)]
pub struct AssessOptions {
    pub symptoms: Vec<String>,
    pub json: bool,
    /// Send an alert to the ASHA worker when the result escalates.
    pub alert: bool,
    /// Alert recipient; falls back to the profile, then the config.
    pub to: Option<String>,
    /// Append the result to the daily log.
    pub log: bool,
}

#[derive(Debug, Serialize)]
struct AssessOutput<'a> {
    symptoms: &'a SymptomReport,
    ignored: &'a [String],
    assessment: &'a RiskAssessment,
    emergency: Option<&'a EmergencyClassification>,
}

/// List recognized symptoms with their weights.
pub fn list_symptoms() -> String {
    let mut out = String::new();
    for symptom in Symptom::ALL {
        let marker = if symptom.is_critical() { " (critical)" } else { "" };
        let _ = writeln!(out, "{:<16} {:>3}{marker}", symptom.id(), table::weight(symptom));
    }
    out
}

pub fn assess_symptoms(state: &AppState, opts: &AssessOptions) -> eyre::Result<String> {
    let (report, ignored) = SymptomReport::partition_ids(&opts.symptoms);
    for id in &ignored {
        warn!(symptom = %id, "unrecognized symptom ignored");
    }

    let assessment = assess(&report, state.locale);
    let emergency = classify_emergency_localized(assessment.risk_level, &report, state.locale);
    info!(
        score = assessment.score,
        risk_level = %assessment.risk_level,
        escalated = emergency.is_some(),
        "assessment complete"
    );

    let mut out = if opts.json {
        serde_json::to_string_pretty(&AssessOutput {
            symptoms: &report,
            ignored: &ignored,
            assessment: &assessment,
            emergency: emergency.as_ref(),
        })?
    } else {
        render_assessment(&assessment, emergency.as_ref(), state.locale)
    };

    if opts.alert {
        match &emergency {
            None => {
                let _ = write!(out, "\nNo alert needed");
            }
            Some(classification) => {
                let profile = state.health.get_user_profile()?;
                let recipient = opts
                    .to
                    .clone()
                    .or_else(|| profile.as_ref().and_then(|p| p.asha_phone.clone()))
                    .or_else(|| state.config.asha_phone.clone())
                    .ok_or_else(|| {
                        eyre::eyre!(
                            "no alert recipient: pass --to or set asha_phone in the profile or config"
                        )
                    })?;
                let subject = profile.map(|p| p.name).unwrap_or_else(|| "User".to_string());

                let receipt = dispatch(
                    &SimulatedSms,
                    &recipient,
                    Some(classification),
                    &assessment,
                    state.locale,
                    &subject,
                )?;
                match receipt {
                    Some(receipt) if receipt.sent => {
                        let _ = write!(out, "\nAlert sent to {}", redact_phone(&receipt.recipient));
                    }
                    _ => {
                        let _ = write!(out, "\nAlert was not delivered");
                    }
                }
            }
        }
    }

    if opts.log {
        let entry = DailyLog::new(jiff::Timestamp::now(), false, report).with_assessment(assessment);
        let logs = state.health.save_daily_log(entry)?;
        let _ = write!(out, "\nSaved to daily log ({} entries)", logs.len());
    }

    Ok(out)
}

/// Human-readable assessment card.
pub fn render_assessment(
    assessment: &RiskAssessment,
    emergency: Option<&EmergencyClassification>,
    locale: Locale,
) -> String {
    let mut out = format!(
        "{} (score {})\n{}",
        risk_label(assessment.risk_level, locale),
        assessment.score,
        assessment.message,
    );
    if let Some(emergency) = emergency {
        let _ = write!(
            out,
            "\n{}: {} [{}]",
            emergency.level.as_str(),
            emergency.message,
            dial_uri(&emergency.hotline),
        );
    }
    out
}

pub fn log_day(
    state: &AppState,
    is_period: bool,
    symptoms: &[String],
    note: Option<String>,
) -> eyre::Result<String> {
    let report = SymptomReport::from_ids(symptoms);
    let mut entry = DailyLog::new(jiff::Timestamp::now(), is_period, report);
    if let Some(note) = note {
        entry = entry.with_notes(note);
    }
    let logs = state.health.save_daily_log(entry)?;
    Ok(format!("Logged ({} entries kept)", logs.len()))
}

pub fn predict(state: &AppState) -> eyre::Result<String> {
    let logs = state.health.get_daily_logs()?;
    let tz = jiff::tz::TimeZone::system();
    Ok(match predict_next(&logs, jiff::Timestamp::now(), &tz) {
        Some(p) => format!(
            "Last period: {}\nNext period: {} (in {} days)",
            p.last_period, p.next_period, p.days_until
        ),
        None => "No period logged yet".to_string(),
    })
}

pub fn set_profile(
    state: &AppState,
    name: String,
    age: u8,
    role: Role,
    asha_phone: Option<String>,
) -> eyre::Result<String> {
    let mut profile = UserProfile::new(name, age);
    profile.role = role;
    profile.language = state.locale;
    profile.asha_phone = asha_phone;
    let saved = state.health.save_user_profile(&profile)?;
    Ok(format!("Profile saved for {}", saved.name))
}

pub fn show_profile(state: &AppState) -> eyre::Result<String> {
    Ok(match state.health.get_user_profile()? {
        Some(p) => {
            let phone = p
                .asha_phone
                .as_deref()
                .map(redact_phone)
                .unwrap_or_else(|| "-".to_string());
            format!(
                "{} ({}), role {}, language {}, ASHA {}",
                p.name, p.age, p.role, p.language, phone
            )
        }
        None => "No profile saved".to_string(),
    })
}

pub fn record_patient(state: &AppState, village: &str, symptoms: &[String]) -> eyre::Result<String> {
    let report = SymptomReport::from_ids(symptoms);
    let assessment = assess(&report, state.locale);
    let emergency = classify_emergency_localized(assessment.risk_level, &report, state.locale);
    let record = PatientRecord::from_assessment(village, &assessment, jiff::Timestamp::now());
    let records = state.health.add_patient_record(record)?;
    info!(village, risk_level = %assessment.risk_level, "patient recorded");

    Ok(format!(
        "{}\nRecorded patient #{:03} in {village}",
        render_assessment(&assessment, emergency.as_ref(), state.locale),
        records.len(),
    ))
}

pub fn asha_summary(state: &AppState) -> eyre::Result<String> {
    let records = state.health.get_patient_records()?;
    let summary = RiskSummary::tally(records.iter().map(|r| r.risk_level));
    let mut out = format!(
        "Assessed: {}  High: {}  Moderate: {}  Low: {}",
        summary.assessed, summary.high, summary.medium, summary.low
    );
    for (i, record) in records.iter().enumerate() {
        let _ = write!(
            out,
            "\n#{:03} {:<12} {:<14} {:>3}",
            i + 1,
            record.village,
            risk_label(record.risk_level, state.locale),
            record.score,
        );
    }
    Ok(out)
}

pub fn clear(state: &AppState) -> eyre::Result<String> {
    state.health.clear_all_data()?;
    Ok("All data cleared".to_string())
}
