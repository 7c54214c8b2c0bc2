use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::model::Partner;

#[derive(Debug, Deserialize)]
pub struct PartnerPayload {
    pub name: String,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub position: i32,
}

#[derive(Debug, Serialize)]
pub struct PartnerResponse {
    pub id: String,
    pub name: String,
    pub website: Option<String>,
    pub logo_url: Option<String>,
    pub position: i32,
    pub created_at: DateTime<Utc>,
}

impl From<Partner> for PartnerResponse {
    fn from(partner: Partner) -> Self {
        Self {
            id: partner.id,
            name: partner.name,
            website: partner.website,
            logo_url: partner.logo_url,
            position: partner.position,
            created_at: partner.created_at,
        }
    }
}
