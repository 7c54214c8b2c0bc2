use axum::{
    routing::{get, put},
    Router,
};
use std::sync::Arc;

use super::controller;
use crate::AppState;

pub fn worklog_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(controller::list_own).post(controller::create_log))
        .route("/all", get(controller::list_all))
        .route(
            "/{id}",
            put(controller::update_log).delete(controller::delete_log),
        )
}
