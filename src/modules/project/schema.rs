use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::model::{Project, ProjectImage};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ImagePayload {
    pub url: String,
    pub public_id: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateProjectRequest {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default)]
    pub cover_url: Option<String>,
    #[serde(default)]
    pub cover_public_id: Option<String>,
    #[serde(default)]
    pub position: i32,
    #[serde(default)]
    pub objectives: Vec<String>,
    #[serde(default)]
    pub images: Vec<ImagePayload>,
}

fn default_status() -> String {
    "EN_COURS".to_string()
}

/// Update carries the full child collections: objectives and gallery are
/// replaced wholesale, ordered by array index.
#[derive(Debug, Deserialize)]
pub struct UpdateProjectRequest {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub category: Option<String>,
    pub status: String,
    #[serde(default)]
    pub cover_url: Option<String>,
    #[serde(default)]
    pub cover_public_id: Option<String>,
    #[serde(default)]
    pub position: i32,
    #[serde(default)]
    pub objectives: Vec<String>,
    #[serde(default)]
    pub images: Vec<ImagePayload>,
}

#[derive(Debug, Serialize)]
pub struct ProjectResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: Option<String>,
    pub status: String,
    pub cover_url: Option<String>,
    pub cover_public_id: Option<String>,
    pub position: i32,
    pub objectives: Vec<String>,
    pub images: Vec<ImagePayload>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProjectResponse {
    pub fn from_parts(
        project: Project,
        objectives: Vec<String>,
        images: Vec<ProjectImage>,
    ) -> Self {
        Self {
            id: project.id,
            title: project.title,
            description: project.description,
            category: project.category,
            status: project.status,
            cover_url: project.cover_url,
            cover_public_id: project.cover_public_id,
            position: project.position,
            objectives,
            images: images
                .into_iter()
                .map(|image| ImagePayload {
                    url: image.url,
                    public_id: image.public_id,
                })
                .collect(),
            created_at: project.created_at,
            updated_at: project.updated_at,
        }
    }
}
