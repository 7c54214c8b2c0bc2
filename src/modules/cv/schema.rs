use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::model::CvEntry;

#[derive(Debug, Deserialize)]
pub struct CvEntryPayload {
    pub section: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default)]
    pub position: i32,
}

#[derive(Debug, Serialize)]
pub struct CvEntryResponse {
    pub id: String,
    pub section: String,
    pub title: String,
    pub description: Option<String>,
    pub year: Option<String>,
    pub position: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<CvEntry> for CvEntryResponse {
    fn from(entry: CvEntry) -> Self {
        Self {
            id: entry.id,
            section: entry.section,
            title: entry.title,
            description: entry.description,
            year: entry.year,
            position: entry.position,
            created_at: entry.created_at,
            updated_at: entry.updated_at,
        }
    }
}
