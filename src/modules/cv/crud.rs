use chrono::Utc;
use uuid::Uuid;

use crate::config::DbPool;
use crate::modules::cv::model::CvEntry;
use crate::modules::cv::schema::CvEntryPayload;

pub struct CvCrud {
    pool: DbPool,
}

impl CvCrud {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<CvEntry>, sqlx::Error> {
        sqlx::query_as::<_, CvEntry>("SELECT * FROM cv_entries ORDER BY section, position")
            .fetch_all(&self.pool)
            .await
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<CvEntry>, sqlx::Error> {
        sqlx::query_as::<_, CvEntry>("SELECT * FROM cv_entries WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn create(&self, req: &CvEntryPayload) -> Result<CvEntry, sqlx::Error> {
        let now = Utc::now();
        let entry = CvEntry {
            id: Uuid::new_v4().to_string(),
            section: req.section.clone(),
            title: req.title.clone(),
            description: req.description.clone(),
            year: req.year.clone(),
            position: req.position,
            created_at: now,
            updated_at: now,
        };

        sqlx::query(
            r#"
            INSERT INTO cv_entries (id, section, title, description, year, position, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&entry.id)
        .bind(&entry.section)
        .bind(&entry.title)
        .bind(&entry.description)
        .bind(&entry.year)
        .bind(entry.position)
        .bind(entry.created_at)
        .bind(entry.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(entry)
    }

    pub async fn update(
        &self,
        id: &str,
        req: &CvEntryPayload,
    ) -> Result<Option<CvEntry>, sqlx::Error> {
        let Some(mut entry) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        entry.section = req.section.clone();
        entry.title = req.title.clone();
        entry.description = req.description.clone();
        entry.year = req.year.clone();
        entry.position = req.position;
        entry.updated_at = Utc::now();

        sqlx::query(
            r#"
            UPDATE cv_entries
            SET section = ?, title = ?, description = ?, year = ?, position = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&entry.section)
        .bind(&entry.title)
        .bind(&entry.description)
        .bind(&entry.year)
        .bind(entry.position)
        .bind(entry.updated_at)
        .bind(&entry.id)
        .execute(&self.pool)
        .await?;

        Ok(Some(entry))
    }

    pub async fn delete(&self, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM cv_entries WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
