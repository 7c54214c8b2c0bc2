use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Hard cap on gallery images per project.
pub const MAX_GALLERY_IMAGES: usize = 10;

#[derive(Debug, Clone, FromRow)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: Option<String>,
    pub status: String,
    pub cover_url: Option<String>,
    pub cover_public_id: Option<String>,
    pub position: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow)]
pub struct ProjectObjective {
    pub id: String,
    pub project_id: String,
    pub content: String,
    pub position: i32,
}

#[derive(Debug, Clone, FromRow)]
pub struct ProjectImage {
    pub id: String,
    pub project_id: String,
    pub url: String,
    pub public_id: String,
    pub position: i32,
}
