use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Validity window for a login code.
pub const OTP_VALIDITY_MINUTES: i64 = 5;

/// A one-time login code. Rows are append-only history: a code is either
/// consumed once (used, used_at set) or ages past expires_at, and in both
/// cases the row stays behind for the statistics page. Several codes may
/// coexist for one user; only an unused, unexpired one can log in.
#[derive(Debug, Clone, FromRow)]
pub struct OneTimeCode {
    pub id: String,
    pub user_id: String,
    pub code: String,
    pub used: bool,
    pub used_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}
