use axum::http::StatusCode;
use serial_test::serial;

use crate::common::{test_email, TestContext};

#[tokio::test]
#[serial]
async fn verify_returns_the_resolved_principal() {
    let ctx = TestContext::new().await;
    let email = test_email();
    ctx.seed_user(&email, "USER", true).await;
    let token = ctx.login(&email).await;

    let response = ctx
        .server
        .get("/api/auth/verify")
        .authorization_bearer(&token)
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["user"]["email"], email);
    assert_eq!(body["user"]["role"], "USER");
    assert_eq!(body["user"]["validated"], true);

    ctx.cleanup().await;
}

#[tokio::test]
#[serial]
async fn missing_or_garbage_token_is_unauthorized() {
    let ctx = TestContext::new().await;

    let response = ctx.server.get("/api/auth/verify").await;
    response.assert_status(StatusCode::UNAUTHORIZED);

    let response = ctx
        .server
        .get("/api/auth/verify")
        .authorization_bearer("not-a-token")
        .await;
    response.assert_status(StatusCode::UNAUTHORIZED);

    ctx.cleanup().await;
}

#[tokio::test]
#[serial]
async fn role_change_is_visible_on_the_very_next_request() {
    let ctx = TestContext::new().await;
    let email = test_email();
    let user_id = ctx.seed_user(&email, "USER", true).await;
    let token = ctx.login(&email).await;

    // Promote while the token is still live. The token itself carries no
    // role, so the next lookup must observe the change.
    sqlx::query("UPDATE users SET role = 'MODERATOR' WHERE id = ?")
        .bind(&user_id)
        .execute(&ctx.db)
        .await
        .unwrap();

    let response = ctx
        .server
        .get("/api/auth/verify")
        .authorization_bearer(&token)
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["user"]["role"], "MODERATOR");

    ctx.cleanup().await;
}

#[tokio::test]
#[serial]
async fn token_of_a_deleted_user_stops_working() {
    let ctx = TestContext::new().await;
    let email = test_email();
    let user_id = ctx.seed_user(&email, "USER", true).await;
    let token = ctx.login(&email).await;

    sqlx::query("DELETE FROM users WHERE id = ?")
        .bind(&user_id)
        .execute(&ctx.db)
        .await
        .unwrap();

    let response = ctx
        .server
        .get("/api/auth/verify")
        .authorization_bearer(&token)
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);

    ctx.cleanup().await;
}
