use thiserror::Error;

pub type Result<T> = std::result::Result<T, NotifierError>;

#[derive(Debug, Error)]
pub enum NotifierError {
    #[error("Configuration error: {message}")]
    Configuration {
        message: String,
        key: Option<String>,
    },

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("SMTP transport error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),

    #[error("Invalid mail address: {0}")]
    Address(#[from] lettre::address::AddressError),

    #[error("Failed to build message: {0}")]
    Message(#[from] lettre::error::Error),

    #[error("Failed to send email: {0}")]
    SendFailed(String),

    #[error("Mail relay refused the connection")]
    RelayUnavailable,
}
