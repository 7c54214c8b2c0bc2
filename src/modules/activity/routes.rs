use axum::{routing::get, Router};
use std::sync::Arc;

use super::controller;
use crate::AppState;

pub fn activity_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/",
            get(controller::list_activities).post(controller::create_activity),
        )
        .route(
            "/{id}",
            get(controller::get_activity)
                .put(controller::update_activity)
                .delete(controller::delete_activity),
        )
}
