use axum::{
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;

use super::controller;
use crate::AppState;

pub fn user_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/register", post(controller::register))
        .route("/", get(controller::list_users))
        .route("/me", put(controller::update_profile))
        .route(
            "/{id}",
            get(controller::get_user)
                .put(controller::update_user)
                .delete(controller::delete_user),
        )
}
