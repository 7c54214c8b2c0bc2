use chrono::Utc;
use uuid::Uuid;

use crate::config::DbPool;
use crate::modules::project::model::{Project, ProjectImage, ProjectObjective};
use crate::modules::project::schema::{CreateProjectRequest, UpdateProjectRequest};

pub struct ProjectCrud {
    pool: DbPool,
}

impl ProjectCrud {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Project>, sqlx::Error> {
        sqlx::query_as::<_, Project>("SELECT * FROM projects ORDER BY position, created_at")
            .fetch_all(&self.pool)
            .await
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<Project>, sqlx::Error> {
        sqlx::query_as::<_, Project>("SELECT * FROM projects WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn objectives(&self, project_id: &str) -> Result<Vec<ProjectObjective>, sqlx::Error> {
        sqlx::query_as::<_, ProjectObjective>(
            "SELECT * FROM project_objectives WHERE project_id = ? ORDER BY position",
        )
        .bind(project_id)
        .fetch_all(&self.pool)
        .await
    }

    pub async fn images(&self, project_id: &str) -> Result<Vec<ProjectImage>, sqlx::Error> {
        sqlx::query_as::<_, ProjectImage>(
            "SELECT * FROM project_images WHERE project_id = ? ORDER BY position",
        )
        .bind(project_id)
        .fetch_all(&self.pool)
        .await
    }

    pub async fn create(&self, req: &CreateProjectRequest) -> Result<Project, sqlx::Error> {
        let now = Utc::now();
        let project = Project {
            id: Uuid::new_v4().to_string(),
            title: req.title.clone(),
            description: req.description.clone(),
            category: req.category.clone(),
            status: req.status.clone(),
            cover_url: req.cover_url.clone(),
            cover_public_id: req.cover_public_id.clone(),
            position: req.position,
            created_at: now,
            updated_at: now,
        };

        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO projects (id, title, description, category, status, cover_url, cover_public_id, position, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&project.id)
        .bind(&project.title)
        .bind(&project.description)
        .bind(&project.category)
        .bind(&project.status)
        .bind(&project.cover_url)
        .bind(&project.cover_public_id)
        .bind(project.position)
        .bind(project.created_at)
        .bind(project.updated_at)
        .execute(&mut *tx)
        .await?;

        for (index, content) in req.objectives.iter().enumerate() {
            sqlx::query(
                "INSERT INTO project_objectives (id, project_id, content, position) VALUES (?, ?, ?, ?)",
            )
            .bind(Uuid::new_v4().to_string())
            .bind(&project.id)
            .bind(content)
            .bind(index as i32)
            .execute(&mut *tx)
            .await?;
        }

        for (index, image) in req.images.iter().enumerate() {
            sqlx::query(
                "INSERT INTO project_images (id, project_id, url, public_id, position) VALUES (?, ?, ?, ?, ?)",
            )
            .bind(Uuid::new_v4().to_string())
            .bind(&project.id)
            .bind(&image.url)
            .bind(&image.public_id)
            .bind(index as i32)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(project)
    }

    /// Replace-set update: the project row is rewritten and both child
    /// collections are replaced from the request arrays in one transaction.
    /// Positions come from array order; either everything lands or nothing
    /// does.
    pub async fn update(
        &self,
        id: &str,
        req: &UpdateProjectRequest,
    ) -> Result<Option<Project>, sqlx::Error> {
        let Some(mut project) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        project.title = req.title.clone();
        project.description = req.description.clone();
        project.category = req.category.clone();
        project.status = req.status.clone();
        project.cover_url = req.cover_url.clone();
        project.cover_public_id = req.cover_public_id.clone();
        project.position = req.position;
        project.updated_at = Utc::now();

        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            UPDATE projects
            SET title = ?, description = ?, category = ?, status = ?, cover_url = ?, cover_public_id = ?, position = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&project.title)
        .bind(&project.description)
        .bind(&project.category)
        .bind(&project.status)
        .bind(&project.cover_url)
        .bind(&project.cover_public_id)
        .bind(project.position)
        .bind(project.updated_at)
        .bind(&project.id)
        .execute(&mut *tx)
        .await?;

        sqlx::query("DELETE FROM project_objectives WHERE project_id = ?")
            .bind(&project.id)
            .execute(&mut *tx)
            .await?;

        for (index, content) in req.objectives.iter().enumerate() {
            sqlx::query(
                "INSERT INTO project_objectives (id, project_id, content, position) VALUES (?, ?, ?, ?)",
            )
            .bind(Uuid::new_v4().to_string())
            .bind(&project.id)
            .bind(content)
            .bind(index as i32)
            .execute(&mut *tx)
            .await?;
        }

        sqlx::query("DELETE FROM project_images WHERE project_id = ?")
            .bind(&project.id)
            .execute(&mut *tx)
            .await?;

        for (index, image) in req.images.iter().enumerate() {
            sqlx::query(
                "INSERT INTO project_images (id, project_id, url, public_id, position) VALUES (?, ?, ?, ?, ?)",
            )
            .bind(Uuid::new_v4().to_string())
            .bind(&project.id)
            .bind(&image.url)
            .bind(&image.public_id)
            .bind(index as i32)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(Some(project))
    }

    pub async fn delete(&self, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
