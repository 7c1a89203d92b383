use super::templates::EmailTemplate;
use super::Mailer;
use crate::config::SmtpConfig;
use crate::error::{NotifierError, Result};
use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::debug;

/// SMTP backend: STARTTLS upgrade and password authentication against the
/// configured relay. The transport is built once and reused for every
/// message in the run.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpMailer {
    pub fn new(config: &SmtpConfig) -> Result<Self> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)?
            .port(config.port)
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ))
            .build();

        let from = Mailbox::new(Some(config.from_name.clone()), config.from.parse()?);

        Ok(Self { transport, from })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn verify(&self) -> Result<()> {
        if !self.transport.test_connection().await? {
            return Err(NotifierError::RelayUnavailable);
        }
        Ok(())
    }

    async fn send(&self, to: &str, template: &EmailTemplate) -> Result<()> {
        let message = Message::builder()
            .from(self.from.clone())
            .to(to.parse()?)
            .subject(template.subject.as_str())
            .header(ContentType::TEXT_PLAIN)
            .body(template.text_body.clone())?;

        self.transport
            .send(message)
            .await
            .map_err(|e| NotifierError::SendFailed(e.to_string()))?;

        debug!(recipient = to, "Message accepted by relay");
        Ok(())
    }
}
