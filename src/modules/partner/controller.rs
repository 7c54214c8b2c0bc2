use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::error::ApiError;
use crate::modules::auth::extractor::AuthUser;
use crate::modules::partner::{crud::PartnerCrud, schema::{PartnerPayload, PartnerResponse}};
use crate::modules::user::model::Role;
use crate::modules::user::schema::MessageResponse;
use crate::AppState;

pub async fn list_partners(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<PartnerResponse>>, ApiError> {
    let partners = PartnerCrud::new(state.db.clone()).list().await?;
    Ok(Json(partners.into_iter().map(Into::into).collect()))
}

pub async fn get_partner(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<PartnerResponse>, ApiError> {
    let partner = PartnerCrud::new(state.db.clone())
        .find_by_id(&id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Partenaire introuvable".to_string()))?;
    Ok(Json(partner.into()))
}

pub async fn create_partner(
    auth: AuthUser,
    State(state): State<Arc<AppState>>,
    Json(req): Json<PartnerPayload>,
) -> Result<(StatusCode, Json<PartnerResponse>), ApiError> {
    auth.require(Role::Moderator)?;

    if req.name.trim().is_empty() {
        return Err(ApiError::Validation("Le nom est obligatoire".to_string()));
    }

    let partner = PartnerCrud::new(state.db.clone()).create(&req).await?;
    Ok((StatusCode::CREATED, Json(partner.into())))
}

pub async fn update_partner(
    auth: AuthUser,
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<PartnerPayload>,
) -> Result<Json<PartnerResponse>, ApiError> {
    auth.require(Role::Moderator)?;

    let partner = PartnerCrud::new(state.db.clone())
        .update(&id, &req)
        .await?
        .ok_or_else(|| ApiError::NotFound("Partenaire introuvable".to_string()))?;
    Ok(Json(partner.into()))
}

pub async fn delete_partner(
    auth: AuthUser,
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    auth.require(Role::Moderator)?;

    let deleted = PartnerCrud::new(state.db.clone()).delete(&id).await?;
    if !deleted {
        return Err(ApiError::NotFound("Partenaire introuvable".to_string()));
    }

    Ok(Json(MessageResponse {
        message: "Partenaire supprimé",
    }))
}
