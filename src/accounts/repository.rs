use super::ExpiringAccount;
use crate::error::Result;
use async_trait::async_trait;
use sqlx::PgPool;

#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// All unlocked accounts with an email address whose password expires
    /// strictly within the next `window_days` days.
    ///
    /// An expiry exactly `window_days` out is excluded (the lower bound is
    /// exclusive), as is anything already elapsed. No ordering guarantees.
    async fn due_for_reminder(&self, window_days: i32) -> Result<Vec<ExpiringAccount>>;
}

pub struct PostgresAccountRepository {
    pool: PgPool,
}

impl PostgresAccountRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccountRepository for PostgresAccountRepository {
    async fn due_for_reminder(&self, window_days: i32) -> Result<Vec<ExpiringAccount>> {
        let accounts = sqlx::query_as::<_, ExpiringAccount>(
            r#"
            SELECT username, email, password_expiry
            FROM user_chk
            WHERE password_expiry - make_interval(days => $1) < NOW()
              AND password_expiry > NOW()
              AND email IS NOT NULL
              AND account_locked = FALSE
            "#,
        )
        .bind(window_days)
        .fetch_all(&self.pool)
        .await?;

        Ok(accounts)
    }
}
