use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::model::WorkLog;

#[derive(Debug, Deserialize)]
pub struct WorkLogPayload {
    pub log_date: NaiveDate,
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct WorkLogResponse {
    pub id: String,
    pub author_id: String,
    pub log_date: NaiveDate,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<WorkLog> for WorkLogResponse {
    fn from(log: WorkLog) -> Self {
        Self {
            id: log.id,
            author_id: log.author_id,
            log_date: log.log_date,
            content: log.content,
            created_at: log.created_at,
            updated_at: log.updated_at,
        }
    }
}
