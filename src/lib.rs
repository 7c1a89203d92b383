//! # Password Expiry Notifier
//!
//! Scans the user directory for passwords expiring inside the reminder
//! window and sends each affected account a plain-text email over
//! authenticated SMTP.
//!
//! ## Modules
//!
//! - `accounts`: row model, window arithmetic, and the Postgres repository
//! - `config`: environment configuration loading and validation
//! - `database`: PostgreSQL connection pool setup
//! - `email`: mail backends and the reminder template
//! - `error`: error types and handling
//! - `notifier`: the notification pass

pub mod accounts;
pub mod config;
pub mod database;
pub mod email;
pub mod error;
pub mod notifier;

// Re-export commonly used types
pub use accounts::{days_until, AccountRepository, ExpiringAccount, PostgresAccountRepository};
pub use config::{
    load_dotenv, ConfigLoader, DatabaseConfig, MailBackend, ReminderConfig, SmtpConfig,
};
pub use email::{ConsoleMailer, EmailTemplate, Mailer, SmtpMailer, TemplateEngine};
pub use error::{NotifierError, Result};
pub use notifier::{run, RunReport};
