use anyhow::Context;
use expiry_notifier::{
    config::{load_dotenv, ConfigLoader, DatabaseConfig, MailBackend, ReminderConfig, SmtpConfig},
    database,
    email::{ConsoleMailer, Mailer, SmtpMailer, TemplateEngine},
    notifier, PostgresAccountRepository,
};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .json()
        .init();

    info!("Starting password expiry notifier");

    // Fail fast on configuration before touching the network.
    let db_config = DatabaseConfig::from_env()?;
    db_config.validate()?;
    let smtp_config = SmtpConfig::from_env()?;
    smtp_config.validate()?;
    let reminder_config = ReminderConfig::from_env()?;
    reminder_config.validate()?;

    let pool = database::connect(&db_config).await?;

    let mailer: Box<dyn Mailer> = match reminder_config.mail_backend {
        MailBackend::Smtp => Box::new(SmtpMailer::new(&smtp_config)?),
        MailBackend::Console => Box::new(ConsoleMailer::new(smtp_config.from.clone())),
    };
    mailer
        .verify()
        .await
        .context("mail relay handshake failed")?;

    let repository = PostgresAccountRepository::new(pool.clone());
    let templates = TemplateEngine::new(smtp_config.from_name.clone());

    let result = notifier::run(
        &repository,
        mailer.as_ref(),
        &templates,
        reminder_config.window_days,
    )
    .await;

    // The pool is released on every exit path, including a failed pass.
    pool.close().await;

    let report = result?;
    info!(
        selected = report.selected,
        sent = report.sent,
        failed = report.failed,
        "Notification pass complete"
    );

    Ok(())
}
