use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;

/// Daily-work journal entry, owned by its author.
#[derive(Debug, Clone, FromRow)]
pub struct WorkLog {
    pub id: String,
    pub author_id: String,
    pub log_date: NaiveDate,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
