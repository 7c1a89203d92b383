use super::templates::EmailTemplate;
use super::Mailer;
use crate::error::Result;
use async_trait::async_trait;

/// Development backend: prints each message to stdout instead of talking
/// to a relay.
pub struct ConsoleMailer {
    from: String,
}

impl ConsoleMailer {
    pub fn new(from: String) -> Self {
        Self { from }
    }

    fn print_email(&self, to: &str, template: &EmailTemplate) {
        println!("\n{:=<60}", "");
        println!("EMAIL SENT (console backend)");
        println!("{:=<60}", "");
        println!("From: {}", self.from);
        println!("To: {}", to);
        println!("Subject: {}", template.subject);
        println!("{:-<60}", "");
        println!("{}", template.text_body);
        println!("{:=<60}\n", "");
    }
}

#[async_trait]
impl Mailer for ConsoleMailer {
    async fn verify(&self) -> Result<()> {
        Ok(())
    }

    async fn send(&self, to: &str, template: &EmailTemplate) -> Result<()> {
        self.print_email(to, template);
        Ok(())
    }
}
