use aura_core::models::emergency::EmergencyLevel;
use tracing::{info, warn};

/// A structured record of one alert dispatch, logged via `tracing`.
#[derive(Debug, Clone)]
pub struct AlertEvent {
    pub level: EmergencyLevel,
    pub recipient: String,
    pub hotline: String,
    pub sent: bool,
    pub details: Option<serde_json::Value>,
}

impl AlertEvent {
    pub fn new(
        level: EmergencyLevel,
        recipient: impl Into<String>,
        hotline: impl Into<String>,
        sent: bool,
    ) -> Self {
        Self {
            level,
            recipient: recipient.into(),
            hotline: hotline.into(),
            sent,
            details: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Emit this event via tracing. Undelivered alerts log at `warn`.
    pub fn emit(&self) {
        let details = self
            .details
            .as_ref()
            .map(|d| d.to_string())
            .unwrap_or_default();
        if self.sent {
            info!(
                alert.level = self.level.as_str(),
                alert.recipient = %self.recipient,
                alert.hotline = %self.hotline,
                alert.details = %details,
                "alert dispatched"
            );
        } else {
            warn!(
                alert.level = self.level.as_str(),
                alert.recipient = %self.recipient,
                alert.hotline = %self.hotline,
                alert.details = %details,
                "alert not delivered"
            );
        }
    }
}
