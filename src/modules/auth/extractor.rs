use axum::{extract::FromRequestParts, http::header, http::request::Parts};
use std::sync::Arc;

use crate::error::ApiError;
use crate::modules::user::{crud::UserCrud, model::Role, model::User};
use crate::AppState;

/// Resolved principal for a protected request: token checked, then the user
/// row re-read so the CURRENT role and validated flag apply. The token never
/// carries a role, so a demotion or promotion is effective on the very next
/// request.
#[derive(Debug)]
pub struct AuthUser {
    pub user: User,
}

impl AuthUser {
    /// The role gate. Single comparison against the role total order; every
    /// protected handler calls this instead of re-deriving role checks.
    pub fn require(&self, required: Role) -> Result<(), ApiError> {
        if self.user.role.meets_minimum(required) {
            Ok(())
        } else {
            Err(ApiError::Forbidden(
                "Accès refusé : privilèges insuffisants".to_string(),
            ))
        }
    }
}

impl FromRequestParts<Arc<AppState>> for AuthUser {
    type Rejection = ApiError;

    // axum-core defines this as `fn -> impl Future + Send`, not `async fn`;
    // pull the header out synchronously, then move into a 'static future.
    fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let token = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(str::to_owned);
        let state = state.clone();

        async move {
            let token = token.ok_or_else(|| {
                ApiError::Unauthorized("Jeton d'authentification manquant".to_string())
            })?;

            let data = state
                .jwt_service
                .verify_token(&token)
                .map_err(|_| ApiError::Unauthorized("Jeton invalide ou expiré".to_string()))?;

            let user = UserCrud::new(state.db.clone())
                .find_by_id(&data.claims.sub)
                .await?
                .ok_or_else(|| ApiError::Unauthorized("Jeton invalide ou expiré".to_string()))?;

            Ok(AuthUser { user })
        }
    }
}
