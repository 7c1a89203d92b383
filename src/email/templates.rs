use chrono::NaiveDate;

/// A rendered reminder message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailTemplate {
    pub subject: String,
    pub text_body: String,
}

/// Renders the fixed plain-text reminder.
pub struct TemplateEngine {
    from_name: String,
}

impl TemplateEngine {
    pub fn new(from_name: String) -> Self {
        Self { from_name }
    }

    pub fn render_expiry_reminder(
        &self,
        username: &str,
        days_left: i64,
        expiry: NaiveDate,
    ) -> EmailTemplate {
        let subject = "Your Password Will Expire Soon".to_string();

        let text_body = format!(
            r#"Hi {username},

Just a quick reminder: your password will expire in {days_left} day(s) on {expiry}.
Please log in and update your password to avoid getting locked out.

Thanks,
{from_name}
"#,
            username = username,
            days_left = days_left,
            expiry = expiry.format("%Y-%m-%d"),
            from_name = self.from_name,
        );

        EmailTemplate { subject, text_body }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_expiry_reminder() {
        let engine = TemplateEngine::new("Security Team".to_string());
        let expiry = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();

        let template = engine.render_expiry_reminder("alice", 2, expiry);

        assert_eq!(template.subject, "Your Password Will Expire Soon");
        assert!(template.text_body.contains("Hi alice,"));
        assert!(template.text_body.contains("expire in 2 day(s)"));
        assert!(template.text_body.contains("on 2026-08-06"));
        assert!(template.text_body.contains("Security Team"));
    }

    #[test]
    fn test_render_signs_with_configured_name() {
        let engine = TemplateEngine::new("IT Operations".to_string());
        let expiry = NaiveDate::from_ymd_opt(2026, 12, 31).unwrap();

        let template = engine.render_expiry_reminder("bob", 1, expiry);

        assert!(template.text_body.ends_with("IT Operations\n"));
    }
}
