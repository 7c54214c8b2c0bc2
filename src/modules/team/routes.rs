use axum::{routing::get, Router};
use std::sync::Arc;

use super::controller;
use crate::AppState;

pub fn team_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/",
            get(controller::list_members).post(controller::create_member),
        )
        .route(
            "/{id}",
            get(controller::get_member)
                .put(controller::update_member)
                .delete(controller::delete_member),
        )
}
