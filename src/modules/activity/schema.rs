use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::model::Activity;

#[derive(Debug, Deserialize)]
pub struct ActivityPayload {
    pub title: String,
    pub description: String,
    pub activity_date: NaiveDate,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub cover_url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ActivityResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    pub activity_date: NaiveDate,
    pub location: Option<String>,
    pub cover_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Activity> for ActivityResponse {
    fn from(activity: Activity) -> Self {
        Self {
            id: activity.id,
            title: activity.title,
            description: activity.description,
            activity_date: activity.activity_date,
            location: activity.location,
            cover_url: activity.cover_url,
            created_at: activity.created_at,
            updated_at: activity.updated_at,
        }
    }
}
