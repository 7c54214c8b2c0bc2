use axum::{extract::State, Json};
use std::sync::Arc;

use crate::error::ApiError;
use crate::modules::auth::{
    crud::OtpCrud,
    extractor::AuthUser,
    schema::{
        SendOtpRequest, SendOtpResponse, VerifyOtpRequest, VerifyOtpResponse,
        VerifySessionResponse,
    },
};
use crate::modules::user::crud::UserCrud;
use crate::AppState;

pub async fn send_otp(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SendOtpRequest>,
) -> Result<Json<SendOtpResponse>, ApiError> {
    if !req.email.contains('@') {
        return Err(ApiError::Validation("Adresse e-mail invalide".to_string()));
    }

    let user = UserCrud::new(state.db.clone())
        .find_by_email(&req.email)
        .await?
        .ok_or_else(|| {
            ApiError::NotFound("Aucun compte associé à cette adresse e-mail".to_string())
        })?;

    // Admission control: accounts log in only after an administrator has
    // validated them.
    if !user.validated {
        return Err(ApiError::Forbidden(
            "Compte non validé. Contactez un administrateur.".to_string(),
        ));
    }

    let otp = OtpCrud::new(state.db.clone()).issue(&user.id).await?;

    // The code row is already committed at this point. A relay failure leaves
    // it behind as an undeliverable code; the user simply requests a new one.
    if let Err(e) = state
        .mailer
        .send_login_code(&user.email, &user.first_name, &otp.code)
        .await
    {
        tracing::error!("failed to send login code to {}: {}", user.email, e);
        return Err(ApiError::Email(e.to_string()));
    }

    tracing::info!("login code issued for user {}", user.id);

    Ok(Json(SendOtpResponse {
        message: "Un code de connexion vous a été envoyé par e-mail",
    }))
}

pub async fn verify_otp(
    State(state): State<Arc<AppState>>,
    Json(req): Json<VerifyOtpRequest>,
) -> Result<Json<VerifyOtpResponse>, ApiError> {
    // One generic answer for unknown email, wrong code and expired code: a
    // caller probing the endpoint learns nothing about which it was.
    let invalid = || ApiError::Unauthorized("Code invalide ou expiré".to_string());

    let user = UserCrud::new(state.db.clone())
        .find_by_email(&req.email)
        .await?
        .ok_or_else(invalid)?;

    let crud = OtpCrud::new(state.db.clone());
    let otp = crud
        .find_valid(&user.id, &req.otp)
        .await?
        .ok_or_else(invalid)?;

    // A concurrent verification may have consumed it between the SELECT and
    // this UPDATE; the loser gets the same generic rejection.
    if !crud.consume(&otp.id).await? {
        return Err(invalid());
    }

    let token = state
        .jwt_service
        .create_token(&user.id)
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    tracing::info!("user {} logged in", user.id);

    Ok(Json(VerifyOtpResponse { token }))
}

/// `GET /api/auth/verify`. The extractor has already validated the token and
/// re-read the user row; this handler only shapes the response.
pub async fn verify_session(auth: AuthUser) -> Json<VerifySessionResponse> {
    Json(VerifySessionResponse {
        user: auth.user.into(),
    })
}
