use chrono::{Duration, Utc};
use rand::Rng;
use uuid::Uuid;

use crate::config::DbPool;
use crate::modules::auth::model::{OneTimeCode, OTP_VALIDITY_MINUTES};

/// Uniform 6-digit code, 100000..=999999.
pub fn generate_code() -> String {
    let mut rng = rand::rng();
    rng.random_range(100_000..=999_999).to_string()
}

pub struct OtpCrud {
    pool: DbPool,
}

impl OtpCrud {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Inserts a fresh code for the user. Earlier codes are left untouched;
    /// they expire on their own and feed the login statistics.
    pub async fn issue(&self, user_id: &str) -> Result<OneTimeCode, sqlx::Error> {
        let now = Utc::now();
        let otp = OneTimeCode {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            code: generate_code(),
            used: false,
            used_at: None,
            created_at: now,
            expires_at: now + Duration::minutes(OTP_VALIDITY_MINUTES),
        };

        sqlx::query(
            r#"
            INSERT INTO one_time_codes (id, user_id, code, used, used_at, created_at, expires_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&otp.id)
        .bind(&otp.user_id)
        .bind(&otp.code)
        .bind(otp.used)
        .bind(otp.used_at)
        .bind(otp.created_at)
        .bind(otp.expires_at)
        .execute(&self.pool)
        .await?;

        Ok(otp)
    }

    pub async fn find_valid(
        &self,
        user_id: &str,
        code: &str,
    ) -> Result<Option<OneTimeCode>, sqlx::Error> {
        sqlx::query_as::<_, OneTimeCode>(
            r#"
            SELECT * FROM one_time_codes
            WHERE user_id = ? AND code = ? AND used = FALSE AND expires_at > ?
            ORDER BY created_at DESC
            LIMIT 1
            "#,
        )
        .bind(user_id)
        .bind(code)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await
    }

    /// Marks a code consumed. The `used = FALSE` predicate plus the affected-
    /// rows check make concurrent verifications of the same code settle on a
    /// single winner without any application-side locking.
    pub async fn consume(&self, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE one_time_codes SET used = TRUE, used_at = ? WHERE id = ? AND used = FALSE",
        )
        .bind(Utc::now())
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() == 1)
    }
}
