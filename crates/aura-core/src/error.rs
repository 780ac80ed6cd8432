use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown symptom: {0}")]
    UnknownSymptom(String),

    #[error("unknown risk level: {0} (expected Low, Medium or High)")]
    UnknownRiskLevel(String),

    #[error("unknown locale: {0}")]
    UnknownLocale(String),

    #[error("unknown role: {0}")]
    UnknownRole(String),

    #[error("invalid profile: {0}")]
    InvalidProfile(String),
}
