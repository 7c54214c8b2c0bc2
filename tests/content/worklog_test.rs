use axum::http::StatusCode;
use serde_json::json;
use serial_test::serial;

use crate::common::{test_email, TestContext};

#[tokio::test]
#[serial]
async fn author_keeps_a_daily_journal() {
    let ctx = TestContext::new().await;
    let email = test_email();
    ctx.seed_user(&email, "MODERATOR", true).await;
    let token = ctx.login(&email).await;

    let response = ctx
        .server
        .post("/api/worklogs")
        .authorization_bearer(&token)
        .json(&json!({
            "log_date": "2026-08-28",
            "content": "Visite de terrain à Kaédi, suivi des pépinières"
        }))
        .await;
    response.assert_status(StatusCode::CREATED);

    let listing = ctx
        .server
        .get("/api/worklogs")
        .authorization_bearer(&token)
        .await;
    listing.assert_status_ok();
    let listing: serde_json::Value = listing.json();
    assert_eq!(listing.as_array().unwrap().len(), 1);
    assert_eq!(listing[0]["log_date"], "2026-08-28");

    ctx.cleanup().await;
}

#[tokio::test]
#[serial]
async fn a_member_cannot_edit_someone_elses_journal() {
    let ctx = TestContext::new().await;
    let author_email = test_email();
    let other_email = test_email();
    ctx.seed_user(&author_email, "MODERATOR", true).await;
    ctx.seed_user(&other_email, "MODERATOR", true).await;
    let author_token = ctx.login(&author_email).await;
    let other_token = ctx.login(&other_email).await;

    let created = ctx
        .server
        .post("/api/worklogs")
        .authorization_bearer(&author_token)
        .json(&json!({ "log_date": "2026-08-28", "content": "Rédaction du rapport" }))
        .await;
    let created: serde_json::Value = created.json();
    let id = created["id"].as_str().unwrap();

    let refused = ctx
        .server
        .put(&format!("/api/worklogs/{id}"))
        .authorization_bearer(&other_token)
        .json(&json!({ "log_date": "2026-08-29", "content": "Modifié" }))
        .await;
    refused.assert_status(StatusCode::FORBIDDEN);

    ctx.cleanup().await;
}

#[tokio::test]
#[serial]
async fn admin_sees_everything_and_may_edit() {
    let ctx = TestContext::new().await;
    let author_email = test_email();
    let admin_email = test_email();
    ctx.seed_user(&author_email, "MODERATOR", true).await;
    ctx.seed_user(&admin_email, "ADMIN", true).await;
    let author_token = ctx.login(&author_email).await;
    let admin_token = ctx.login(&admin_email).await;

    let created = ctx
        .server
        .post("/api/worklogs")
        .authorization_bearer(&author_token)
        .json(&json!({ "log_date": "2026-08-28", "content": "Atelier de formation" }))
        .await;
    let created: serde_json::Value = created.json();
    let id = created["id"].as_str().unwrap();

    // The aggregate view is admin-only.
    let refused = ctx
        .server
        .get("/api/worklogs/all")
        .authorization_bearer(&author_token)
        .await;
    refused.assert_status(StatusCode::FORBIDDEN);

    let listing = ctx
        .server
        .get("/api/worklogs/all")
        .authorization_bearer(&admin_token)
        .await;
    listing.assert_status_ok();
    let listing: serde_json::Value = listing.json();
    assert_eq!(listing.as_array().unwrap().len(), 1);

    ctx.server
        .put(&format!("/api/worklogs/{id}"))
        .authorization_bearer(&admin_token)
        .json(&json!({ "log_date": "2026-08-28", "content": "Atelier de formation (corrigé)" }))
        .await
        .assert_status_ok();

    ctx.cleanup().await;
}

#[tokio::test]
#[serial]
async fn plain_members_have_no_journal_access() {
    let ctx = TestContext::new().await;
    let email = test_email();
    ctx.seed_user(&email, "USER", true).await;
    let token = ctx.login(&email).await;

    let response = ctx
        .server
        .get("/api/worklogs")
        .authorization_bearer(&token)
        .await;
    response.assert_status(StatusCode::FORBIDDEN);

    ctx.cleanup().await;
}
