use chrono::Utc;
use uuid::Uuid;

use crate::config::DbPool;
use crate::modules::activity::model::Activity;
use crate::modules::activity::schema::ActivityPayload;

pub struct ActivityCrud {
    pool: DbPool,
}

impl ActivityCrud {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Activity>, sqlx::Error> {
        sqlx::query_as::<_, Activity>("SELECT * FROM activities ORDER BY activity_date DESC")
            .fetch_all(&self.pool)
            .await
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<Activity>, sqlx::Error> {
        sqlx::query_as::<_, Activity>("SELECT * FROM activities WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn create(&self, req: &ActivityPayload) -> Result<Activity, sqlx::Error> {
        let now = Utc::now();
        let activity = Activity {
            id: Uuid::new_v4().to_string(),
            title: req.title.clone(),
            description: req.description.clone(),
            activity_date: req.activity_date,
            location: req.location.clone(),
            cover_url: req.cover_url.clone(),
            created_at: now,
            updated_at: now,
        };

        sqlx::query(
            r#"
            INSERT INTO activities (id, title, description, activity_date, location, cover_url, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&activity.id)
        .bind(&activity.title)
        .bind(&activity.description)
        .bind(activity.activity_date)
        .bind(&activity.location)
        .bind(&activity.cover_url)
        .bind(activity.created_at)
        .bind(activity.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(activity)
    }

    pub async fn update(
        &self,
        id: &str,
        req: &ActivityPayload,
    ) -> Result<Option<Activity>, sqlx::Error> {
        let Some(mut activity) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        activity.title = req.title.clone();
        activity.description = req.description.clone();
        activity.activity_date = req.activity_date;
        activity.location = req.location.clone();
        activity.cover_url = req.cover_url.clone();
        activity.updated_at = Utc::now();

        sqlx::query(
            r#"
            UPDATE activities
            SET title = ?, description = ?, activity_date = ?, location = ?, cover_url = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&activity.title)
        .bind(&activity.description)
        .bind(activity.activity_date)
        .bind(&activity.location)
        .bind(&activity.cover_url)
        .bind(activity.updated_at)
        .bind(&activity.id)
        .execute(&self.pool)
        .await?;

        Ok(Some(activity))
    }

    pub async fn delete(&self, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM activities WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
