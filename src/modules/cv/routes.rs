use axum::{routing::get, Router};
use std::sync::Arc;

use super::controller;
use crate::AppState;

pub fn cv_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/",
            get(controller::list_entries).post(controller::create_entry),
        )
        .route(
            "/{id}",
            get(controller::get_entry)
                .put(controller::update_entry)
                .delete(controller::delete_entry),
        )
}
