use std::sync::Arc;

use girenad_api::config::{environment::Config, init_db};
use girenad_api::services::jwt::JwtService;
use girenad_api::services::mailer::{HttpMailer, LogMailer, Mailer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "girenad_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().expect("Failed to load environment configuration");

    let db = init_db(&config.database_url).await;
    tracing::info!("Connected to MySQL");

    sqlx::migrate!("./migrations")
        .run(&db)
        .await
        .expect("Failed to run migrations");

    let jwt_service = JwtService::new(config.jwt_secret);

    let mailer: Arc<dyn Mailer> = match config.mail {
        Some(mail) => Arc::new(HttpMailer::new(mail)),
        None => {
            tracing::warn!("MAIL_API_URL/MAIL_API_KEY not set; login codes will be logged");
            Arc::new(LogMailer)
        }
    };

    let app = girenad_api::create_app(db, jwt_service, mailer).await;

    let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await.unwrap();
    tracing::info!("Server running on http://localhost:3000");
    axum::serve(listener, app).await.unwrap();
}
