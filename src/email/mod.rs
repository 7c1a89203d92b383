pub mod console;
pub mod smtp;
pub mod templates;

pub use console::ConsoleMailer;
pub use smtp::SmtpMailer;
pub use templates::{EmailTemplate, TemplateEngine};

use crate::error::Result;
use async_trait::async_trait;

/// Outbound mail seam.
///
/// One implementation per backend; the backend is chosen once at startup
/// from configuration and used for every message in the run.
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Perform the connection handshake so credential problems surface
    /// before any messages are attempted.
    async fn verify(&self) -> Result<()>;

    /// Deliver one rendered message to `to`.
    async fn send(&self, to: &str, template: &EmailTemplate) -> Result<()>;
}
