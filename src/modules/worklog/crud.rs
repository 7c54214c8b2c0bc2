use chrono::Utc;
use uuid::Uuid;

use crate::config::DbPool;
use crate::modules::worklog::model::WorkLog;
use crate::modules::worklog::schema::WorkLogPayload;

pub struct WorkLogCrud {
    pool: DbPool,
}

impl WorkLogCrud {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub async fn list_for_author(&self, author_id: &str) -> Result<Vec<WorkLog>, sqlx::Error> {
        sqlx::query_as::<_, WorkLog>(
            "SELECT * FROM work_logs WHERE author_id = ? ORDER BY log_date DESC",
        )
        .bind(author_id)
        .fetch_all(&self.pool)
        .await
    }

    pub async fn list_all(&self) -> Result<Vec<WorkLog>, sqlx::Error> {
        sqlx::query_as::<_, WorkLog>("SELECT * FROM work_logs ORDER BY log_date DESC")
            .fetch_all(&self.pool)
            .await
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<WorkLog>, sqlx::Error> {
        sqlx::query_as::<_, WorkLog>("SELECT * FROM work_logs WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn create(
        &self,
        author_id: &str,
        req: &WorkLogPayload,
    ) -> Result<WorkLog, sqlx::Error> {
        let now = Utc::now();
        let log = WorkLog {
            id: Uuid::new_v4().to_string(),
            author_id: author_id.to_string(),
            log_date: req.log_date,
            content: req.content.clone(),
            created_at: now,
            updated_at: now,
        };

        sqlx::query(
            r#"
            INSERT INTO work_logs (id, author_id, log_date, content, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&log.id)
        .bind(&log.author_id)
        .bind(log.log_date)
        .bind(&log.content)
        .bind(log.created_at)
        .bind(log.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(log)
    }

    pub async fn update(&self, log: &WorkLog) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE work_logs SET log_date = ?, content = ?, updated_at = ? WHERE id = ?")
            .bind(log.log_date)
            .bind(&log.content)
            .bind(log.updated_at)
            .bind(&log.id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn delete(&self, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM work_logs WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
