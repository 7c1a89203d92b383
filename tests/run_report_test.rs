//! Run-loop behavior over mock repository and mailer backends.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use expiry_notifier::{
    notifier, AccountRepository, EmailTemplate, ExpiringAccount, Mailer, NotifierError, Result,
    RunReport, TemplateEngine,
};
use std::collections::HashSet;
use std::sync::Mutex;

struct FixedAccountRepository {
    accounts: Vec<ExpiringAccount>,
}

#[async_trait]
impl AccountRepository for FixedAccountRepository {
    async fn due_for_reminder(&self, _window_days: i32) -> Result<Vec<ExpiringAccount>> {
        Ok(self.accounts.clone())
    }
}

#[derive(Default)]
struct RecordingMailer {
    fail_for: HashSet<String>,
    sent: Mutex<Vec<(String, EmailTemplate)>>,
}

impl RecordingMailer {
    fn failing_for(addresses: &[&str]) -> Self {
        Self {
            fail_for: addresses.iter().map(|a| a.to_string()).collect(),
            sent: Mutex::new(Vec::new()),
        }
    }

    fn sent(&self) -> Vec<(String, EmailTemplate)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn verify(&self) -> Result<()> {
        Ok(())
    }

    async fn send(&self, to: &str, template: &EmailTemplate) -> Result<()> {
        if self.fail_for.contains(to) {
            return Err(NotifierError::SendFailed(
                "simulated relay failure".to_string(),
            ));
        }
        self.sent
            .lock()
            .unwrap()
            .push((to.to_string(), template.clone()));
        Ok(())
    }
}

fn account(username: &str, email: &str, days_out: i64) -> ExpiringAccount {
    ExpiringAccount {
        username: username.to_string(),
        email: email.to_string(),
        password_expiry: Utc::now().date_naive() + Duration::days(days_out),
    }
}

#[tokio::test]
async fn test_failure_for_one_recipient_does_not_stop_the_rest() {
    let repository = FixedAccountRepository {
        accounts: vec![
            account("alice", "alice@x.com", 2),
            account("dave", "dave@x.com", 4),
        ],
    };
    let mailer = RecordingMailer::failing_for(&["alice@x.com"]);
    let templates = TemplateEngine::new("Security Team".to_string());

    let report = notifier::run(&repository, &mailer, &templates, 5)
        .await
        .unwrap();

    assert_eq!(
        report,
        RunReport {
            selected: 2,
            sent: 1,
            failed: 1,
        }
    );

    let sent = mailer.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].0, "dave@x.com");
}

#[tokio::test]
async fn test_zero_matching_accounts_sends_nothing() {
    let repository = FixedAccountRepository {
        accounts: Vec::new(),
    };
    let mailer = RecordingMailer::default();
    let templates = TemplateEngine::new("Security Team".to_string());

    let report = notifier::run(&repository, &mailer, &templates, 5)
        .await
        .unwrap();

    assert_eq!(report, RunReport::default());
    assert!(mailer.sent().is_empty());
}

#[tokio::test]
async fn test_reminder_body_reflects_days_left() {
    let repository = FixedAccountRepository {
        accounts: vec![account("alice", "alice@x.com", 2)],
    };
    let mailer = RecordingMailer::default();
    let templates = TemplateEngine::new("Security Team".to_string());

    let report = notifier::run(&repository, &mailer, &templates, 5)
        .await
        .unwrap();

    assert_eq!(report.sent, 1);

    let sent = mailer.sent();
    let (recipient, template) = &sent[0];
    assert_eq!(recipient, "alice@x.com");
    assert_eq!(template.subject, "Your Password Will Expire Soon");
    assert!(template.text_body.contains("Hi alice,"));
    assert!(template.text_body.contains("expire in 2 day(s)"));
}

#[tokio::test]
async fn test_every_selected_account_gets_one_message() {
    let repository = FixedAccountRepository {
        accounts: vec![
            account("alice", "alice@x.com", 2),
            account("dave", "dave@x.com", 1),
            account("erin", "erin@x.com", 4),
        ],
    };
    let mailer = RecordingMailer::default();
    let templates = TemplateEngine::new("Security Team".to_string());

    let report = notifier::run(&repository, &mailer, &templates, 5)
        .await
        .unwrap();

    assert_eq!(report.selected, 3);
    assert_eq!(report.sent, 3);
    assert_eq!(report.failed, 0);

    let recipients: Vec<String> = mailer.sent().into_iter().map(|(to, _)| to).collect();
    assert_eq!(recipients, vec!["alice@x.com", "dave@x.com", "erin@x.com"]);
}
