//! aura-alerts
//!
//! Boundary to the notification collaborator. Composes alert text from an
//! emergency classification and hands it to an [`AlertSender`]. The only
//! shipped transport is [`sender::SimulatedSms`], which logs instead of
//! sending.

pub mod compose;
pub mod error;
pub mod events;
pub mod sender;

pub use compose::{compose_alert, dial_uri, dispatch};
pub use error::AlertError;
pub use sender::{AlertReceipt, AlertSender, SimulatedSms};
