use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::error::ApiError;
use crate::modules::auth::extractor::AuthUser;
use crate::modules::cv::{crud::CvCrud, schema::{CvEntryPayload, CvEntryResponse}};
use crate::modules::user::model::Role;
use crate::modules::user::schema::MessageResponse;
use crate::AppState;

pub async fn list_entries(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<CvEntryResponse>>, ApiError> {
    let entries = CvCrud::new(state.db.clone()).list().await?;
    Ok(Json(entries.into_iter().map(Into::into).collect()))
}

pub async fn get_entry(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<CvEntryResponse>, ApiError> {
    let entry = CvCrud::new(state.db.clone())
        .find_by_id(&id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Entrée introuvable".to_string()))?;
    Ok(Json(entry.into()))
}

pub async fn create_entry(
    auth: AuthUser,
    State(state): State<Arc<AppState>>,
    Json(req): Json<CvEntryPayload>,
) -> Result<(StatusCode, Json<CvEntryResponse>), ApiError> {
    auth.require(Role::Moderator)?;

    if req.section.trim().is_empty() || req.title.trim().is_empty() {
        return Err(ApiError::Validation(
            "La section et le titre sont obligatoires".to_string(),
        ));
    }

    let entry = CvCrud::new(state.db.clone()).create(&req).await?;
    Ok((StatusCode::CREATED, Json(entry.into())))
}

pub async fn update_entry(
    auth: AuthUser,
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<CvEntryPayload>,
) -> Result<Json<CvEntryResponse>, ApiError> {
    auth.require(Role::Moderator)?;

    let entry = CvCrud::new(state.db.clone())
        .update(&id, &req)
        .await?
        .ok_or_else(|| ApiError::NotFound("Entrée introuvable".to_string()))?;
    Ok(Json(entry.into()))
}

pub async fn delete_entry(
    auth: AuthUser,
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    auth.require(Role::Moderator)?;

    let deleted = CvCrud::new(state.db.clone()).delete(&id).await?;
    if !deleted {
        return Err(ApiError::NotFound("Entrée introuvable".to_string()));
    }

    Ok(Json(MessageResponse {
        message: "Entrée supprimée",
    }))
}
