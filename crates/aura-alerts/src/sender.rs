use serde::Serialize;
use tracing::info;

use crate::error::AlertError;

/// Acknowledgment returned by a transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlertReceipt {
    pub sent: bool,
    /// True when nothing actually left the device.
    pub simulated: bool,
    pub recipient: String,
    pub message: String,
}

/// A notification transport: takes a recipient and formatted text, reports
/// whether it went out.
pub trait AlertSender: Send + Sync {
    fn send_alert(&self, recipient: &str, message: &str) -> Result<AlertReceipt, AlertError>;
}

/// Log-only SMS transport. A real gateway would replace this.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedSms;

impl AlertSender for SimulatedSms {
    fn send_alert(&self, recipient: &str, message: &str) -> Result<AlertReceipt, AlertError> {
        let recipient = recipient.trim();
        if recipient.is_empty() {
            return Err(AlertError::EmptyRecipient);
        }
        if message.trim().is_empty() {
            return Err(AlertError::EmptyMessage);
        }

        info!(sms.to = %recipient, sms.body = %message, "simulated SMS");

        Ok(AlertReceipt {
            sent: true,
            simulated: true,
            recipient: recipient.to_string(),
            message: message.to_string(),
        })
    }
}
