use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::error::ApiError;
use crate::modules::auth::extractor::AuthUser;
use crate::modules::team::{crud::TeamCrud, schema::{TeamMemberPayload, TeamMemberResponse}};
use crate::modules::user::model::Role;
use crate::modules::user::schema::MessageResponse;
use crate::AppState;

pub async fn list_members(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<TeamMemberResponse>>, ApiError> {
    let members = TeamCrud::new(state.db.clone()).list().await?;
    Ok(Json(members.into_iter().map(Into::into).collect()))
}

pub async fn get_member(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<TeamMemberResponse>, ApiError> {
    let member = TeamCrud::new(state.db.clone())
        .find_by_id(&id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Membre introuvable".to_string()))?;
    Ok(Json(member.into()))
}

pub async fn create_member(
    auth: AuthUser,
    State(state): State<Arc<AppState>>,
    Json(req): Json<TeamMemberPayload>,
) -> Result<(StatusCode, Json<TeamMemberResponse>), ApiError> {
    auth.require(Role::Moderator)?;

    if req.first_name.trim().is_empty() || req.last_name.trim().is_empty() {
        return Err(ApiError::Validation(
            "Le prénom et le nom sont obligatoires".to_string(),
        ));
    }

    let member = TeamCrud::new(state.db.clone()).create(&req).await?;
    Ok((StatusCode::CREATED, Json(member.into())))
}

pub async fn update_member(
    auth: AuthUser,
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<TeamMemberPayload>,
) -> Result<Json<TeamMemberResponse>, ApiError> {
    auth.require(Role::Moderator)?;

    let member = TeamCrud::new(state.db.clone())
        .update(&id, &req)
        .await?
        .ok_or_else(|| ApiError::NotFound("Membre introuvable".to_string()))?;
    Ok(Json(member.into()))
}

pub async fn delete_member(
    auth: AuthUser,
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    auth.require(Role::Moderator)?;

    let deleted = TeamCrud::new(state.db.clone()).delete(&id).await?;
    if !deleted {
        return Err(ApiError::NotFound("Membre introuvable".to_string()));
    }

    Ok(Json(MessageResponse {
        message: "Membre supprimé",
    }))
}
