use chrono::Utc;
use uuid::Uuid;

use crate::config::DbPool;
use crate::modules::team::model::TeamMember;
use crate::modules::team::schema::TeamMemberPayload;

pub struct TeamCrud {
    pool: DbPool,
}

impl TeamCrud {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<TeamMember>, sqlx::Error> {
        sqlx::query_as::<_, TeamMember>("SELECT * FROM team_members ORDER BY position, last_name")
            .fetch_all(&self.pool)
            .await
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<TeamMember>, sqlx::Error> {
        sqlx::query_as::<_, TeamMember>("SELECT * FROM team_members WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn create(&self, req: &TeamMemberPayload) -> Result<TeamMember, sqlx::Error> {
        let now = Utc::now();
        let member = TeamMember {
            id: Uuid::new_v4().to_string(),
            first_name: req.first_name.clone(),
            last_name: req.last_name.clone(),
            title: req.title.clone(),
            bio: req.bio.clone(),
            photo_url: req.photo_url.clone(),
            position: req.position,
            created_at: now,
            updated_at: now,
        };

        sqlx::query(
            r#"
            INSERT INTO team_members (id, first_name, last_name, title, bio, photo_url, position, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&member.id)
        .bind(&member.first_name)
        .bind(&member.last_name)
        .bind(&member.title)
        .bind(&member.bio)
        .bind(&member.photo_url)
        .bind(member.position)
        .bind(member.created_at)
        .bind(member.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(member)
    }

    pub async fn update(
        &self,
        id: &str,
        req: &TeamMemberPayload,
    ) -> Result<Option<TeamMember>, sqlx::Error> {
        let Some(mut member) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        member.first_name = req.first_name.clone();
        member.last_name = req.last_name.clone();
        member.title = req.title.clone();
        member.bio = req.bio.clone();
        member.photo_url = req.photo_url.clone();
        member.position = req.position;
        member.updated_at = Utc::now();

        sqlx::query(
            r#"
            UPDATE team_members
            SET first_name = ?, last_name = ?, title = ?, bio = ?, photo_url = ?, position = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&member.first_name)
        .bind(&member.last_name)
        .bind(&member.title)
        .bind(&member.bio)
        .bind(&member.photo_url)
        .bind(member.position)
        .bind(member.updated_at)
        .bind(&member.id)
        .execute(&self.pool)
        .await?;

        Ok(Some(member))
    }

    pub async fn delete(&self, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM team_members WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
