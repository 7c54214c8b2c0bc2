use axum::{routing::get, Router};
use std::sync::Arc;

use super::controller;
use crate::AppState;

pub fn partner_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/",
            get(controller::list_partners).post(controller::create_partner),
        )
        .route(
            "/{id}",
            get(controller::get_partner)
                .put(controller::update_partner)
                .delete(controller::delete_partner),
        )
}
