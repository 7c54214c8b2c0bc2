use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// One line of the organizational CV showcase (agréments, références,
/// réalisations...), grouped by free-form section.
#[derive(Debug, Clone, FromRow)]
pub struct CvEntry {
    pub id: String,
    pub section: String,
    pub title: String,
    pub description: Option<String>,
    pub year: Option<String>,
    pub position: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
