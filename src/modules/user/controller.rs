use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::error::ApiError;
use crate::modules::auth::extractor::AuthUser;
use crate::modules::user::{
    crud::UserCrud,
    model::{Role, User},
    schema::{
        MessageResponse, RegisterRequest, RegisterResponse, UpdateProfileRequest,
        UpdateUserRequest, UserResponse,
    },
};
use crate::AppState;

/// Public registration. New accounts always start as USER and unvalidated;
/// an administrator flips `validated` before the member can log in.
pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), ApiError> {
    req.validate()
        .map_err(|_| ApiError::Validation("Adresse e-mail invalide".to_string()))?;

    if req.first_name.trim().is_empty() || req.last_name.trim().is_empty() {
        return Err(ApiError::Validation(
            "Le prénom et le nom sont obligatoires".to_string(),
        ));
    }

    let crud = UserCrud::new(state.db.clone());

    if crud.email_exists(&req.email).await? {
        return Err(ApiError::Conflict(
            "Un compte existe déjà avec cette adresse e-mail".to_string(),
        ));
    }

    let now = Utc::now();
    let user = User {
        id: Uuid::new_v4().to_string(),
        email: req.email,
        first_name: req.first_name,
        last_name: req.last_name,
        phone: req.phone,
        organization: req.organization,
        role: Role::User,
        validated: false,
        created_at: now,
        updated_at: now,
    };

    crud.create(&user).await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            user: user.into(),
        }),
    ))
}

pub async fn list_users(
    auth: AuthUser,
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    auth.require(Role::Admin)?;

    let users = UserCrud::new(state.db.clone()).list_all().await?;

    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

pub async fn get_user(
    auth: AuthUser,
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<UserResponse>, ApiError> {
    auth.require(Role::Admin)?;

    let user = UserCrud::new(state.db.clone())
        .find_by_id(&id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Utilisateur introuvable".to_string()))?;

    Ok(Json(user.into()))
}

pub async fn update_user(
    auth: AuthUser,
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<UpdateUserRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    auth.require(Role::Admin)?;

    let crud = UserCrud::new(state.db.clone());
    let mut user = crud
        .find_by_id(&id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Utilisateur introuvable".to_string()))?;

    // Self-modification guards, layered on top of the role gate: an admin can
    // neither demote their own role nor invalidate their own account.
    if user.id == auth.user.id {
        if req.role.is_some_and(|role| role != user.role) {
            return Err(ApiError::Forbidden(
                "Vous ne pouvez pas modifier votre propre rôle".to_string(),
            ));
        }
        if req.validated == Some(false) {
            return Err(ApiError::Forbidden(
                "Vous ne pouvez pas invalider votre propre compte".to_string(),
            ));
        }
    }

    if let Some(first_name) = req.first_name {
        user.first_name = first_name;
    }
    if let Some(last_name) = req.last_name {
        user.last_name = last_name;
    }
    if let Some(phone) = req.phone {
        user.phone = Some(phone);
    }
    if let Some(organization) = req.organization {
        user.organization = Some(organization);
    }
    if let Some(role) = req.role {
        user.role = role;
    }
    if let Some(validated) = req.validated {
        user.validated = validated;
    }
    user.updated_at = Utc::now();

    crud.update(&user).await?;

    Ok(Json(user.into()))
}

/// Self-service profile edit. Only identity fields are accepted here: the
/// request schema has no `role` or `validated`, so a member cannot touch
/// either through this path.
pub async fn update_profile(
    auth: AuthUser,
    State(state): State<Arc<AppState>>,
    Json(req): Json<UpdateProfileRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    let crud = UserCrud::new(state.db.clone());
    let mut user = auth.user;

    if let Some(first_name) = req.first_name {
        user.first_name = first_name;
    }
    if let Some(last_name) = req.last_name {
        user.last_name = last_name;
    }
    if let Some(phone) = req.phone {
        user.phone = Some(phone);
    }
    if let Some(organization) = req.organization {
        user.organization = Some(organization);
    }
    user.updated_at = Utc::now();

    crud.update(&user).await?;

    Ok(Json(user.into()))
}

pub async fn delete_user(
    auth: AuthUser,
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    auth.require(Role::Admin)?;

    if id == auth.user.id {
        return Err(ApiError::Forbidden(
            "Vous ne pouvez pas supprimer votre propre compte".to_string(),
        ));
    }

    let deleted = UserCrud::new(state.db.clone()).delete(&id).await?;
    if !deleted {
        return Err(ApiError::NotFound("Utilisateur introuvable".to_string()));
    }

    Ok(Json(MessageResponse {
        message: "Utilisateur supprimé",
    }))
}
