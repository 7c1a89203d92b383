//! The notification pass
//!
//! One query, then one message per selected account. A failure for one
//! recipient is logged and counted; it never aborts the remaining sends.

use crate::accounts::{days_until, AccountRepository};
use crate::email::{Mailer, TemplateEngine};
use crate::error::Result;
use chrono::Utc;
use tracing::{info, warn};

/// Outcome of a single notification pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Accounts inside the reminder window
    pub selected: usize,
    /// Reminders accepted by the mail backend
    pub sent: usize,
    /// Reminders that failed to send
    pub failed: usize,
}

/// Run one notification pass.
///
/// Selects the accounts whose password expires inside the reminder window,
/// renders the reminder for each, and sends it through `mailer`.
pub async fn run(
    repository: &dyn AccountRepository,
    mailer: &dyn Mailer,
    templates: &TemplateEngine,
    window_days: i32,
) -> Result<RunReport> {
    let accounts = repository.due_for_reminder(window_days).await?;
    let today = Utc::now().date_naive();

    let mut report = RunReport {
        selected: accounts.len(),
        ..RunReport::default()
    };

    for account in &accounts {
        let days_left = days_until(account.password_expiry, today);
        let template =
            templates.render_expiry_reminder(&account.username, days_left, account.password_expiry);

        match mailer.send(&account.email, &template).await {
            Ok(()) => {
                info!(
                    recipient = %account.email,
                    days_left,
                    "Sent password expiry reminder"
                );
                report.sent += 1;
            }
            Err(e) => {
                warn!(
                    recipient = %account.email,
                    error = %e,
                    "Failed to send password expiry reminder"
                );
                report.failed += 1;
            }
        }
    }

    Ok(report)
}
