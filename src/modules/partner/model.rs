use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct Partner {
    pub id: String,
    pub name: String,
    pub website: Option<String>,
    pub logo_url: Option<String>,
    pub position: i32,
    pub created_at: DateTime<Utc>,
}
