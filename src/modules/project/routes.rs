use axum::{routing::get, Router};
use std::sync::Arc;

use super::controller;
use crate::AppState;

pub fn project_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/",
            get(controller::list_projects).post(controller::create_project),
        )
        .route(
            "/{id}",
            get(controller::get_project)
                .put(controller::update_project)
                .delete(controller::delete_project),
        )
}
