//! Account model and expiry-window arithmetic

pub mod repository;

pub use repository::{AccountRepository, PostgresAccountRepository};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An account whose password expires inside the reminder window.
///
/// Read-only row sourced from the user directory. Rows without an email
/// address or with a locked account never reach the program; filtering
/// happens in the selection query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct ExpiringAccount {
    pub username: String,
    pub email: String,
    pub password_expiry: NaiveDate,
}

/// Calendar-day difference between the expiry date and `today`.
pub fn days_until(expiry: NaiveDate, today: NaiveDate) -> i64 {
    (expiry - today).num_days()
}
