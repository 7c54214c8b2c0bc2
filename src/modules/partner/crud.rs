use chrono::Utc;
use uuid::Uuid;

use crate::config::DbPool;
use crate::modules::partner::model::Partner;
use crate::modules::partner::schema::PartnerPayload;

pub struct PartnerCrud {
    pool: DbPool,
}

impl PartnerCrud {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Partner>, sqlx::Error> {
        sqlx::query_as::<_, Partner>("SELECT * FROM partners ORDER BY position, name")
            .fetch_all(&self.pool)
            .await
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<Partner>, sqlx::Error> {
        sqlx::query_as::<_, Partner>("SELECT * FROM partners WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn create(&self, req: &PartnerPayload) -> Result<Partner, sqlx::Error> {
        let partner = Partner {
            id: Uuid::new_v4().to_string(),
            name: req.name.clone(),
            website: req.website.clone(),
            logo_url: req.logo_url.clone(),
            position: req.position,
            created_at: Utc::now(),
        };

        sqlx::query(
            r#"
            INSERT INTO partners (id, name, website, logo_url, position, created_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&partner.id)
        .bind(&partner.name)
        .bind(&partner.website)
        .bind(&partner.logo_url)
        .bind(partner.position)
        .bind(partner.created_at)
        .execute(&self.pool)
        .await?;

        Ok(partner)
    }

    pub async fn update(
        &self,
        id: &str,
        req: &PartnerPayload,
    ) -> Result<Option<Partner>, sqlx::Error> {
        let Some(mut partner) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        partner.name = req.name.clone();
        partner.website = req.website.clone();
        partner.logo_url = req.logo_url.clone();
        partner.position = req.position;

        sqlx::query(
            "UPDATE partners SET name = ?, website = ?, logo_url = ?, position = ? WHERE id = ?",
        )
        .bind(&partner.name)
        .bind(&partner.website)
        .bind(&partner.logo_url)
        .bind(partner.position)
        .bind(&partner.id)
        .execute(&self.pool)
        .await?;

        Ok(Some(partner))
    }

    pub async fn delete(&self, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM partners WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
