use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::controller;
use crate::AppState;

pub fn auth_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/send-otp", post(controller::send_otp))
        .route("/verify-otp", post(controller::verify_otp))
        .route("/auth/verify", get(controller::verify_session))
}
