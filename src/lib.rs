pub mod config;
pub mod error;
pub mod modules;
pub mod services;

use axum::{routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer, trace::TraceLayer};

use config::DbPool;
use modules::activity::activity_routes;
use modules::auth::auth_routes;
use modules::cv::cv_routes;
use modules::partner::partner_routes;
use modules::project::project_routes;
use modules::team::team_routes;
use modules::user::user_routes;
use modules::worklog::worklog_routes;
use services::jwt::JwtService;
use services::mailer::Mailer;

pub struct AppState {
    pub db: DbPool,
    pub jwt_service: JwtService,
    pub mailer: Arc<dyn Mailer>,
}

pub async fn create_app(db: DbPool, jwt_service: JwtService, mailer: Arc<dyn Mailer>) -> Router {
    let state = Arc::new(AppState {
        db,
        jwt_service,
        mailer,
    });

    let api = Router::new()
        .merge(auth_routes())
        .nest("/users", user_routes())
        .nest("/projects", project_routes())
        .nest("/activities", activity_routes())
        .nest("/team", team_routes())
        .nest("/partners", partner_routes())
        .nest("/cv", cv_routes())
        .nest("/worklogs", worklog_routes());

    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .nest("/api", api)
        .layer(RequestBodyLimitLayer::new(1024 * 100)) // 100KB max body
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn root() -> &'static str {
    "GIRENAD API"
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
