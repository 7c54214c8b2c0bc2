use axum::http::StatusCode;
use serde_json::json;
use serial_test::serial;

use crate::common::{test_email, TestContext};

#[tokio::test]
#[serial]
async fn registration_creates_an_unvalidated_user_account() {
    let ctx = TestContext::new().await;
    let email = test_email();

    let response = ctx
        .server
        .post("/api/users/register")
        .json(&json!({
            "email": &email,
            "first_name": "Mariam",
            "last_name": "Koné",
            "organization": "GIRENAD"
        }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let body: serde_json::Value = response.json();
    assert_eq!(body["user"]["role"], "USER");
    assert_eq!(body["user"]["validated"], false);

    ctx.cleanup().await;
}

#[tokio::test]
#[serial]
async fn duplicate_email_is_a_conflict() {
    let ctx = TestContext::new().await;
    let email = test_email();
    ctx.seed_user(&email, "USER", false).await;

    let response = ctx
        .server
        .post("/api/users/register")
        .json(&json!({
            "email": &email,
            "first_name": "Mariam",
            "last_name": "Koné"
        }))
        .await;

    response.assert_status(StatusCode::CONFLICT);

    ctx.cleanup().await;
}

#[tokio::test]
#[serial]
async fn invalid_email_is_rejected() {
    let ctx = TestContext::new().await;

    let response = ctx
        .server
        .post("/api/users/register")
        .json(&json!({
            "email": "pas-une-adresse",
            "first_name": "Mariam",
            "last_name": "Koné"
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);

    ctx.cleanup().await;
}

#[tokio::test]
#[serial]
async fn freshly_registered_account_cannot_request_a_code() {
    let ctx = TestContext::new().await;
    let email = test_email();

    ctx.server
        .post("/api/users/register")
        .json(&json!({
            "email": &email,
            "first_name": "Mariam",
            "last_name": "Koné"
        }))
        .await
        .assert_status(StatusCode::CREATED);

    // Not validated yet, so the OTP gate refuses.
    let response = ctx
        .server
        .post("/api/send-otp")
        .json(&json!({ "email": &email }))
        .await;
    response.assert_status(StatusCode::FORBIDDEN);
    assert_eq!(ctx.outbox_len(), 0);

    ctx.cleanup().await;
}
