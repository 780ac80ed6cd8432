use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::locale::Locale;
use crate::error::CoreError;

pub const MIN_AGE: u8 = 10;
pub const MAX_AGE: u8 = 80;

/// Who is using the app.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Role {
    #[default]
    Woman,
    /// Community health worker collecting assessments for a village.
    Asha,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Woman => f.write_str("woman"),
            Role::Asha => f.write_str("asha"),
        }
    }
}

impl FromStr for Role {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "woman" => Ok(Role::Woman),
            "asha" => Ok(Role::Asha),
            other => Err(CoreError::UnknownRole(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UserProfile {
    pub name: String,
    pub age: u8,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub language: Locale,
    /// Phone number of the assigned ASHA worker, used as the alert recipient.
    #[serde(default)]
    pub asha_phone: Option<String>,
    /// Stamped by the storage layer on every save.
    #[serde(default)]
    pub updated_at: Option<jiff::Timestamp>,
}

impl UserProfile {
    pub fn new(name: impl Into<String>, age: u8) -> Self {
        Self {
            name: name.into(),
            age,
            role: Role::default(),
            language: Locale::default(),
            asha_phone: None,
            updated_at: None,
        }
    }

    /// Check the fields the setup form requires.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.name.trim().is_empty() {
            return Err(CoreError::InvalidProfile("name must not be empty".to_string()));
        }
        if !(MIN_AGE..=MAX_AGE).contains(&self.age) {
            return Err(CoreError::InvalidProfile(format!(
                "age {} is outside [{MIN_AGE}, {MAX_AGE}]",
                self.age
            )));
        }
        Ok(())
    }
}
