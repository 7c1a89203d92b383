//! Configuration loading for the notifier
//!
//! All settings come from environment variables, with optional .env file
//! support via dotenvy. Every configuration struct is loaded with
//! `from_env()` and checked with `validate()` before anything connects;
//! a missing or malformed value fails the run with the offending key named.
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection URL
//! - `DATABASE_MAX_CONNECTIONS` (optional): pool size (default: 5)
//! - `DATABASE_ACQUIRE_TIMEOUT` (optional): pool acquire timeout in seconds (default: 30)
//! - `EMAIL_USER` (required): SMTP username, also the default sender address
//! - `EMAIL_PASS` (required): SMTP password
//! - `SMTP_HOST` (optional): relay host (default: "smtp.gmail.com")
//! - `SMTP_PORT` (optional): relay port (default: 587)
//! - `SMTP_FROM` (optional): sender address (default: `EMAIL_USER`)
//! - `SMTP_FROM_NAME` (optional): sender display name (default: "Security Team")
//! - `REMINDER_WINDOW_DAYS` (optional): reminder lead time (default: 5)
//! - `REMINDER_MAIL_BACKEND` (optional): "smtp" or "console" (default: "smtp")

use crate::error::{NotifierError, Result};
use std::time::Duration;
use url::Url;

const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";
const DEFAULT_SMTP_PORT: u16 = 587;
const DEFAULT_FROM_NAME: &str = "Security Team";
const DEFAULT_WINDOW_DAYS: i32 = 5;

/// Configuration loader trait
///
/// Provides standardized methods for loading and validating configuration
/// from environment variables.
pub trait ConfigLoader: Sized {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error if a required variable is missing or
    /// a value cannot be parsed.
    fn from_env() -> Result<Self>;

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error if any validation check fails.
    fn validate(&self) -> Result<()>;
}

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// PostgreSQL connection URL
    pub url: String,
    /// Maximum number of connections in the pool
    pub max_connections: u32,
    /// Pool acquire timeout
    pub acquire_timeout: Duration,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "postgresql://localhost/world".to_string(),
            max_connections: 5,
            acquire_timeout: Duration::from_secs(30),
        }
    }
}

impl ConfigLoader for DatabaseConfig {
    fn from_env() -> Result<Self> {
        let url = std::env::var("DATABASE_URL").map_err(|_| NotifierError::Configuration {
            message: "DATABASE_URL must be set".to_string(),
            key: Some("DATABASE_URL".to_string()),
        })?;

        let max_connections = parse_env_var(
            "DATABASE_MAX_CONNECTIONS",
            DatabaseConfig::default().max_connections,
        )?;

        let acquire_timeout_secs = parse_env_var("DATABASE_ACQUIRE_TIMEOUT", 30u64)?;

        Ok(Self {
            url,
            max_connections,
            acquire_timeout: Duration::from_secs(acquire_timeout_secs),
        })
    }

    fn validate(&self) -> Result<()> {
        Url::parse(&self.url).map_err(|e| NotifierError::Configuration {
            message: format!("Invalid DATABASE_URL: {}", e),
            key: Some("DATABASE_URL".to_string()),
        })?;

        if self.max_connections == 0 {
            return Err(NotifierError::Configuration {
                message: "max_connections must be greater than 0".to_string(),
                key: Some("DATABASE_MAX_CONNECTIONS".to_string()),
            });
        }

        if self.acquire_timeout.as_secs() == 0 {
            return Err(NotifierError::Configuration {
                message: "acquire_timeout must be greater than 0 seconds".to_string(),
                key: Some("DATABASE_ACQUIRE_TIMEOUT".to_string()),
            });
        }

        Ok(())
    }
}

/// Outbound mail relay configuration
///
/// Credentials are required; the relay host and port default to the Gmail
/// submission endpoint and the sender address defaults to the username.
#[derive(Debug, Clone)]
pub struct SmtpConfig {
    /// Relay hostname
    pub host: String,
    /// Relay port (STARTTLS submission)
    pub port: u16,
    /// Authentication username
    pub username: String,
    /// Authentication password
    pub password: String,
    /// Sender address
    pub from: String,
    /// Sender display name, used to sign the reminder body
    pub from_name: String,
}

impl ConfigLoader for SmtpConfig {
    fn from_env() -> Result<Self> {
        let username = std::env::var("EMAIL_USER").map_err(|_| NotifierError::Configuration {
            message: "EMAIL_USER must be set".to_string(),
            key: Some("EMAIL_USER".to_string()),
        })?;

        let password = std::env::var("EMAIL_PASS").map_err(|_| NotifierError::Configuration {
            message: "EMAIL_PASS must be set".to_string(),
            key: Some("EMAIL_PASS".to_string()),
        })?;

        let host = std::env::var("SMTP_HOST").unwrap_or_else(|_| DEFAULT_SMTP_HOST.to_string());
        let port = parse_env_var("SMTP_PORT", DEFAULT_SMTP_PORT)?;

        let from = std::env::var("SMTP_FROM").unwrap_or_else(|_| username.clone());
        let from_name =
            std::env::var("SMTP_FROM_NAME").unwrap_or_else(|_| DEFAULT_FROM_NAME.to_string());

        Ok(Self {
            host,
            port,
            username,
            password,
            from,
            from_name,
        })
    }

    fn validate(&self) -> Result<()> {
        if self.host.is_empty() {
            return Err(NotifierError::Configuration {
                message: "SMTP host must not be empty".to_string(),
                key: Some("SMTP_HOST".to_string()),
            });
        }

        if self.port == 0 {
            return Err(NotifierError::Configuration {
                message: "SMTP port must be greater than 0".to_string(),
                key: Some("SMTP_PORT".to_string()),
            });
        }

        if self.username.is_empty() {
            return Err(NotifierError::Configuration {
                message: "EMAIL_USER must not be empty".to_string(),
                key: Some("EMAIL_USER".to_string()),
            });
        }

        if self.password.is_empty() {
            return Err(NotifierError::Configuration {
                message: "EMAIL_PASS must not be empty".to_string(),
                key: Some("EMAIL_PASS".to_string()),
            });
        }

        if self.from.is_empty() {
            return Err(NotifierError::Configuration {
                message: "Sender address must not be empty".to_string(),
                key: Some("SMTP_FROM".to_string()),
            });
        }

        Ok(())
    }
}

/// Mail backend selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MailBackend {
    /// Authenticated SMTP relay with STARTTLS
    Smtp,
    /// Print messages to stdout, for development runs
    Console,
}

/// Reminder pass configuration
#[derive(Debug, Clone)]
pub struct ReminderConfig {
    /// Lead time in days before expiry during which a reminder is sent
    pub window_days: i32,
    /// Which mail backend to use
    pub mail_backend: MailBackend,
}

impl Default for ReminderConfig {
    fn default() -> Self {
        Self {
            window_days: DEFAULT_WINDOW_DAYS,
            mail_backend: MailBackend::Smtp,
        }
    }
}

impl ConfigLoader for ReminderConfig {
    fn from_env() -> Result<Self> {
        let window_days = parse_env_var(
            "REMINDER_WINDOW_DAYS",
            ReminderConfig::default().window_days,
        )?;

        let backend =
            std::env::var("REMINDER_MAIL_BACKEND").unwrap_or_else(|_| "smtp".to_string());
        let mail_backend = match backend.to_lowercase().as_str() {
            "smtp" => MailBackend::Smtp,
            "console" => MailBackend::Console,
            other => {
                return Err(NotifierError::Configuration {
                    message: format!(
                        "Invalid REMINDER_MAIL_BACKEND '{}'. Must be one of: smtp, console",
                        other
                    ),
                    key: Some("REMINDER_MAIL_BACKEND".to_string()),
                })
            }
        };

        Ok(Self {
            window_days,
            mail_backend,
        })
    }

    fn validate(&self) -> Result<()> {
        if self.window_days <= 0 {
            return Err(NotifierError::Configuration {
                message: format!(
                    "window_days must be greater than 0, got {}",
                    self.window_days
                ),
                key: Some("REMINDER_WINDOW_DAYS".to_string()),
            });
        }

        Ok(())
    }
}

/// Helper function to parse an environment variable with a default value
///
/// # Errors
///
/// Returns a `Configuration` error if the value cannot be parsed.
fn parse_env_var<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    std::env::var(key)
        .ok()
        .map(|v| {
            v.parse::<T>().map_err(|e| NotifierError::Configuration {
                message: format!("Failed to parse {}: {}", key, e),
                key: Some(key.to_string()),
            })
        })
        .unwrap_or(Ok(default))
}

/// Load .env file if present
///
/// Does not return an error if the .env file is not found.
pub fn load_dotenv() {
    if let Err(e) = dotenvy::dotenv() {
        if !e.to_string().contains("not found") {
            eprintln!("Warning: Failed to load .env file: {}", e);
        }
    }
}
