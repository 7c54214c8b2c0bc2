use axum::http::StatusCode;
use chrono::{DateTime, Utc};
use serde_json::json;
use serial_test::serial;

use crate::common::{test_email, TestContext};

#[tokio::test]
#[serial]
async fn validated_user_gets_exactly_one_new_code() {
    let ctx = TestContext::new().await;
    let email = test_email();
    let user_id = ctx.seed_user(&email, "USER", true).await;

    let response = ctx
        .server
        .post("/api/send-otp")
        .json(&json!({ "email": &email }))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert!(body.get("message").is_some());

    let rows: Vec<(String, bool, DateTime<Utc>, DateTime<Utc>)> = sqlx::query_as(
        "SELECT code, used, created_at, expires_at FROM one_time_codes WHERE user_id = ?",
    )
    .bind(&user_id)
    .fetch_all(&ctx.db)
    .await
    .unwrap();

    assert_eq!(rows.len(), 1);
    let (code, used, created_at, expires_at) = &rows[0];
    assert_eq!(code.len(), 6);
    assert!(code.chars().all(|c| c.is_ascii_digit()));
    assert!(!used);
    assert_eq!((*expires_at - *created_at).num_seconds(), 300);

    // The same code went out by mail.
    assert_eq!(ctx.last_code_for(&email).as_deref(), Some(code.as_str()));

    ctx.cleanup().await;
}

#[tokio::test]
#[serial]
async fn unvalidated_account_is_rejected_without_mail_or_row() {
    let ctx = TestContext::new().await;
    let email = test_email();
    let user_id = ctx.seed_user(&email, "USER", false).await;

    let response = ctx
        .server
        .post("/api/send-otp")
        .json(&json!({ "email": &email }))
        .await;

    response.assert_status(StatusCode::FORBIDDEN);
    assert_eq!(ctx.outbox_len(), 0);

    let (count,): (i64,) =
        sqlx::query_as("SELECT COUNT(*) FROM one_time_codes WHERE user_id = ?")
            .bind(&user_id)
            .fetch_one(&ctx.db)
            .await
            .unwrap();
    assert_eq!(count, 0);

    ctx.cleanup().await;
}

#[tokio::test]
#[serial]
async fn unknown_email_returns_not_found() {
    let ctx = TestContext::new().await;

    let response = ctx
        .server
        .post("/api/send-otp")
        .json(&json!({ "email": "inconnu@girenad.org" }))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);

    ctx.cleanup().await;
}

#[tokio::test]
#[serial]
async fn malformed_email_returns_bad_request() {
    let ctx = TestContext::new().await;

    let response = ctx
        .server
        .post("/api/send-otp")
        .json(&json!({ "email": "pas-une-adresse" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert!(body.get("error").is_some());

    ctx.cleanup().await;
}

#[tokio::test]
#[serial]
async fn repeated_requests_stack_codes_without_touching_old_ones() {
    let ctx = TestContext::new().await;
    let email = test_email();
    let user_id = ctx.seed_user(&email, "USER", true).await;

    for _ in 0..3 {
        ctx.server
            .post("/api/send-otp")
            .json(&json!({ "email": &email }))
            .await
            .assert_status_ok();
    }

    let rows: Vec<(bool,)> =
        sqlx::query_as("SELECT used FROM one_time_codes WHERE user_id = ?")
            .bind(&user_id)
            .fetch_all(&ctx.db)
            .await
            .unwrap();

    // History is retained: three rows, all still unused.
    assert_eq!(rows.len(), 3);
    assert!(rows.iter().all(|(used,)| !used));

    ctx.cleanup().await;
}
