use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::model::TeamMember;

#[derive(Debug, Deserialize)]
pub struct TeamMemberPayload {
    pub first_name: String,
    pub last_name: String,
    pub title: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub position: i32,
}

#[derive(Debug, Serialize)]
pub struct TeamMemberResponse {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub title: String,
    pub bio: Option<String>,
    pub photo_url: Option<String>,
    pub position: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<TeamMember> for TeamMemberResponse {
    fn from(member: TeamMember) -> Self {
        Self {
            id: member.id,
            first_name: member.first_name,
            last_name: member.last_name,
            title: member.title,
            bio: member.bio,
            photo_url: member.photo_url,
            position: member.position,
            created_at: member.created_at,
            updated_at: member.updated_at,
        }
    }
}
