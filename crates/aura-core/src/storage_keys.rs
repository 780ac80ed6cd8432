//! Storage key conventions.
//!
//! Pure string constants — no storage dependency. These define the canonical
//! keys under which the app persists user data.

pub const PROFILE: &str = "aura_profile";
pub const DAILY_LOGS: &str = "aura_daily_logs";
pub const PATIENT_RECORDS: &str = "aura_patient_records";
