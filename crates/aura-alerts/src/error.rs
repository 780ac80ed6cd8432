use thiserror::Error;

#[derive(Debug, Error)]
pub enum AlertError {
    #[error("alert recipient is empty")]
    EmptyRecipient,

    #[error("alert message is empty")]
    EmptyMessage,
}
