//! aura-risk
//!
//! Rule-based symptom risk scoring and emergency classification. Pure
//! functions over static tables — no I/O, no shared state, safe to call from
//! any thread.

pub mod emergency;
pub mod messages;
pub mod scoring;
pub mod summary;
pub mod table;

pub use emergency::{classify_emergency, classify_emergency_localized};
pub use scoring::{assess, compute_risk, compute_risk_from_ids, tier_for_score};
