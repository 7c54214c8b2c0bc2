use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use std::sync::Arc;

use crate::error::ApiError;
use crate::modules::auth::extractor::AuthUser;
use crate::modules::user::model::Role;
use crate::modules::user::schema::MessageResponse;
use crate::modules::worklog::{crud::WorkLogCrud, model::WorkLog, schema::{WorkLogPayload, WorkLogResponse}};
use crate::AppState;

/// Authors edit their own journal; admins can edit anyone's.
fn check_ownership(auth: &AuthUser, log: &WorkLog) -> Result<(), ApiError> {
    if log.author_id == auth.user.id {
        return Ok(());
    }
    if auth.user.role.meets_minimum(Role::Admin) {
        return Ok(());
    }
    Err(ApiError::Forbidden(
        "Vous ne pouvez pas modifier le journal d'un autre membre".to_string(),
    ))
}

pub async fn list_own(
    auth: AuthUser,
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<WorkLogResponse>>, ApiError> {
    auth.require(Role::Moderator)?;

    let logs = WorkLogCrud::new(state.db.clone())
        .list_for_author(&auth.user.id)
        .await?;
    Ok(Json(logs.into_iter().map(Into::into).collect()))
}

pub async fn list_all(
    auth: AuthUser,
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<WorkLogResponse>>, ApiError> {
    auth.require(Role::Admin)?;

    let logs = WorkLogCrud::new(state.db.clone()).list_all().await?;
    Ok(Json(logs.into_iter().map(Into::into).collect()))
}

pub async fn create_log(
    auth: AuthUser,
    State(state): State<Arc<AppState>>,
    Json(req): Json<WorkLogPayload>,
) -> Result<(StatusCode, Json<WorkLogResponse>), ApiError> {
    auth.require(Role::Moderator)?;

    if req.content.trim().is_empty() {
        return Err(ApiError::Validation(
            "Le contenu est obligatoire".to_string(),
        ));
    }

    let log = WorkLogCrud::new(state.db.clone())
        .create(&auth.user.id, &req)
        .await?;
    Ok((StatusCode::CREATED, Json(log.into())))
}

pub async fn update_log(
    auth: AuthUser,
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<WorkLogPayload>,
) -> Result<Json<WorkLogResponse>, ApiError> {
    auth.require(Role::Moderator)?;

    let crud = WorkLogCrud::new(state.db.clone());
    let mut log = crud
        .find_by_id(&id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Journal introuvable".to_string()))?;

    check_ownership(&auth, &log)?;

    log.log_date = req.log_date;
    log.content = req.content;
    log.updated_at = Utc::now();

    crud.update(&log).await?;

    Ok(Json(log.into()))
}

pub async fn delete_log(
    auth: AuthUser,
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    auth.require(Role::Moderator)?;

    let crud = WorkLogCrud::new(state.db.clone());
    let log = crud
        .find_by_id(&id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Journal introuvable".to_string()))?;

    check_ownership(&auth, &log)?;

    crud.delete(&log.id).await?;

    Ok(Json(MessageResponse {
        message: "Journal supprimé",
    }))
}
