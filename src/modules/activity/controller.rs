use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::error::ApiError;
use crate::modules::activity::{crud::ActivityCrud, schema::{ActivityPayload, ActivityResponse}};
use crate::modules::auth::extractor::AuthUser;
use crate::modules::user::model::Role;
use crate::modules::user::schema::MessageResponse;
use crate::AppState;

pub async fn list_activities(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ActivityResponse>>, ApiError> {
    let activities = ActivityCrud::new(state.db.clone()).list().await?;
    Ok(Json(activities.into_iter().map(Into::into).collect()))
}

pub async fn get_activity(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ActivityResponse>, ApiError> {
    let activity = ActivityCrud::new(state.db.clone())
        .find_by_id(&id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Activité introuvable".to_string()))?;
    Ok(Json(activity.into()))
}

pub async fn create_activity(
    auth: AuthUser,
    State(state): State<Arc<AppState>>,
    Json(req): Json<ActivityPayload>,
) -> Result<(StatusCode, Json<ActivityResponse>), ApiError> {
    auth.require(Role::Moderator)?;

    if req.title.trim().is_empty() {
        return Err(ApiError::Validation("Le titre est obligatoire".to_string()));
    }

    let activity = ActivityCrud::new(state.db.clone()).create(&req).await?;
    Ok((StatusCode::CREATED, Json(activity.into())))
}

pub async fn update_activity(
    auth: AuthUser,
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<ActivityPayload>,
) -> Result<Json<ActivityResponse>, ApiError> {
    auth.require(Role::Moderator)?;

    if req.title.trim().is_empty() {
        return Err(ApiError::Validation("Le titre est obligatoire".to_string()));
    }

    let activity = ActivityCrud::new(state.db.clone())
        .update(&id, &req)
        .await?
        .ok_or_else(|| ApiError::NotFound("Activité introuvable".to_string()))?;
    Ok(Json(activity.into()))
}

pub async fn delete_activity(
    auth: AuthUser,
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    auth.require(Role::Moderator)?;

    let deleted = ActivityCrud::new(state.db.clone()).delete(&id).await?;
    if !deleted {
        return Err(ApiError::NotFound("Activité introuvable".to_string()));
    }

    Ok(Json(MessageResponse {
        message: "Activité supprimée",
    }))
}
