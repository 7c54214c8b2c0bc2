use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::error::ApiError;
use crate::modules::auth::extractor::AuthUser;
use crate::modules::project::{
    crud::ProjectCrud,
    model::{Project, MAX_GALLERY_IMAGES},
    schema::{CreateProjectRequest, ProjectResponse, UpdateProjectRequest},
};
use crate::modules::user::model::Role;
use crate::modules::user::schema::MessageResponse;
use crate::AppState;

async fn hydrate(crud: &ProjectCrud, project: Project) -> Result<ProjectResponse, ApiError> {
    let objectives = crud
        .objectives(&project.id)
        .await?
        .into_iter()
        .map(|objective| objective.content)
        .collect();
    let images = crud.images(&project.id).await?;
    Ok(ProjectResponse::from_parts(project, objectives, images))
}

fn check_gallery_cap(count: usize) -> Result<(), ApiError> {
    if count > MAX_GALLERY_IMAGES {
        return Err(ApiError::Validation(format!(
            "La galerie est limitée à {MAX_GALLERY_IMAGES} images"
        )));
    }
    Ok(())
}

pub async fn list_projects(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ProjectResponse>>, ApiError> {
    let crud = ProjectCrud::new(state.db.clone());
    let mut responses = Vec::new();
    for project in crud.list().await? {
        responses.push(hydrate(&crud, project).await?);
    }
    Ok(Json(responses))
}

pub async fn get_project(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ProjectResponse>, ApiError> {
    let crud = ProjectCrud::new(state.db.clone());
    let project = crud
        .find_by_id(&id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Projet introuvable".to_string()))?;
    Ok(Json(hydrate(&crud, project).await?))
}

pub async fn create_project(
    auth: AuthUser,
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateProjectRequest>,
) -> Result<(StatusCode, Json<ProjectResponse>), ApiError> {
    auth.require(Role::Moderator)?;

    if req.title.trim().is_empty() {
        return Err(ApiError::Validation("Le titre est obligatoire".to_string()));
    }
    check_gallery_cap(req.images.len())?;

    let crud = ProjectCrud::new(state.db.clone());
    let project = crud.create(&req).await?;

    Ok((StatusCode::CREATED, Json(hydrate(&crud, project).await?)))
}

pub async fn update_project(
    auth: AuthUser,
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<UpdateProjectRequest>,
) -> Result<Json<ProjectResponse>, ApiError> {
    auth.require(Role::Moderator)?;

    if req.title.trim().is_empty() {
        return Err(ApiError::Validation("Le titre est obligatoire".to_string()));
    }
    check_gallery_cap(req.images.len())?;

    let crud = ProjectCrud::new(state.db.clone());
    let project = crud
        .update(&id, &req)
        .await?
        .ok_or_else(|| ApiError::NotFound("Projet introuvable".to_string()))?;

    Ok(Json(hydrate(&crud, project).await?))
}

pub async fn delete_project(
    auth: AuthUser,
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    auth.require(Role::Admin)?;

    let deleted = ProjectCrud::new(state.db.clone()).delete(&id).await?;
    if !deleted {
        return Err(ApiError::NotFound("Projet introuvable".to_string()));
    }

    Ok(Json(MessageResponse {
        message: "Projet supprimé",
    }))
}
