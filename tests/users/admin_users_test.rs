use axum::http::StatusCode;
use serde_json::json;
use serial_test::serial;

use crate::common::{test_email, TestContext};

#[tokio::test]
#[serial]
async fn listing_users_requires_admin() {
    let ctx = TestContext::new().await;
    let admin_email = test_email();
    let user_email = test_email();
    ctx.seed_user(&admin_email, "ADMIN", true).await;
    ctx.seed_user(&user_email, "USER", true).await;

    let admin_token = ctx.login(&admin_email).await;
    let user_token = ctx.login(&user_email).await;

    ctx.server
        .get("/api/users")
        .authorization_bearer(&admin_token)
        .await
        .assert_status_ok();

    let forbidden = ctx
        .server
        .get("/api/users")
        .authorization_bearer(&user_token)
        .await;
    forbidden.assert_status(StatusCode::FORBIDDEN);

    ctx.cleanup().await;
}

#[tokio::test]
#[serial]
async fn moderator_does_not_pass_the_admin_gate() {
    let ctx = TestContext::new().await;
    let email = test_email();
    ctx.seed_user(&email, "MODERATOR", true).await;
    let token = ctx.login(&email).await;

    let response = ctx
        .server
        .get("/api/users")
        .authorization_bearer(&token)
        .await;
    response.assert_status(StatusCode::FORBIDDEN);

    ctx.cleanup().await;
}

#[tokio::test]
#[serial]
async fn admin_validates_and_promotes_a_member() {
    let ctx = TestContext::new().await;
    let admin_email = test_email();
    let member_email = test_email();
    ctx.seed_user(&admin_email, "ADMIN", true).await;
    let member_id = ctx.seed_user(&member_email, "USER", false).await;
    let admin_token = ctx.login(&admin_email).await;

    let response = ctx
        .server
        .put(&format!("/api/users/{member_id}"))
        .authorization_bearer(&admin_token)
        .json(&json!({ "role": "MODERATOR", "validated": true }))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["role"], "MODERATOR");
    assert_eq!(body["validated"], true);

    // The member can now log in, and the session resolves the new role.
    let member_token = ctx.login(&member_email).await;
    let session = ctx
        .server
        .get("/api/auth/verify")
        .authorization_bearer(&member_token)
        .await;
    session.assert_status_ok();
    let session: serde_json::Value = session.json();
    assert_eq!(session["user"]["role"], "MODERATOR");

    ctx.cleanup().await;
}

#[tokio::test]
#[serial]
async fn admin_cannot_demote_their_own_role() {
    let ctx = TestContext::new().await;
    let email = test_email();
    let admin_id = ctx.seed_user(&email, "ADMIN", true).await;
    let token = ctx.login(&email).await;

    let response = ctx
        .server
        .put(&format!("/api/users/{admin_id}"))
        .authorization_bearer(&token)
        .json(&json!({ "role": "USER" }))
        .await;

    response.assert_status(StatusCode::FORBIDDEN);

    ctx.cleanup().await;
}

#[tokio::test]
#[serial]
async fn admin_cannot_invalidate_their_own_account() {
    let ctx = TestContext::new().await;
    let email = test_email();
    let admin_id = ctx.seed_user(&email, "ADMIN", true).await;
    let token = ctx.login(&email).await;

    let response = ctx
        .server
        .put(&format!("/api/users/{admin_id}"))
        .authorization_bearer(&token)
        .json(&json!({ "validated": false }))
        .await;

    response.assert_status(StatusCode::FORBIDDEN);

    ctx.cleanup().await;
}

#[tokio::test]
#[serial]
async fn self_service_profile_edit_cannot_touch_role_or_validated() {
    let ctx = TestContext::new().await;
    let email = test_email();
    ctx.seed_user(&email, "USER", true).await;
    let token = ctx.login(&email).await;

    // Extra fields are simply ignored by the profile schema.
    let response = ctx
        .server
        .put("/api/users/me")
        .authorization_bearer(&token)
        .json(&json!({
            "first_name": "Fatou",
            "role": "SUPERADMIN",
            "validated": false
        }))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["first_name"], "Fatou");
    assert_eq!(body["role"], "USER");
    assert_eq!(body["validated"], true);

    ctx.cleanup().await;
}

#[tokio::test]
#[serial]
async fn admin_deletes_a_member_but_never_themselves() {
    let ctx = TestContext::new().await;
    let admin_email = test_email();
    let member_email = test_email();
    let admin_id = ctx.seed_user(&admin_email, "ADMIN", true).await;
    let member_id = ctx.seed_user(&member_email, "USER", true).await;
    let token = ctx.login(&admin_email).await;

    let refused = ctx
        .server
        .delete(&format!("/api/users/{admin_id}"))
        .authorization_bearer(&token)
        .await;
    refused.assert_status(StatusCode::FORBIDDEN);

    ctx.server
        .delete(&format!("/api/users/{member_id}"))
        .authorization_bearer(&token)
        .await
        .assert_status_ok();

    let missing = ctx
        .server
        .get(&format!("/api/users/{member_id}"))
        .authorization_bearer(&token)
        .await;
    missing.assert_status(StatusCode::NOT_FOUND);

    ctx.cleanup().await;
}

#[tokio::test]
#[serial]
async fn deleting_a_user_cascades_to_their_codes() {
    let ctx = TestContext::new().await;
    let admin_email = test_email();
    let member_email = test_email();
    ctx.seed_user(&admin_email, "ADMIN", true).await;
    let member_id = ctx.seed_user(&member_email, "USER", true).await;
    let token = ctx.login(&admin_email).await;

    // Leave a code behind, then delete the account.
    ctx.server
        .post("/api/send-otp")
        .json(&json!({ "email": &member_email }))
        .await
        .assert_status_ok();

    ctx.server
        .delete(&format!("/api/users/{member_id}"))
        .authorization_bearer(&token)
        .await
        .assert_status_ok();

    let (count,): (i64,) =
        sqlx::query_as("SELECT COUNT(*) FROM one_time_codes WHERE user_id = ?")
            .bind(&member_id)
            .fetch_one(&ctx.db)
            .await
            .unwrap();
    assert_eq!(count, 0);

    ctx.cleanup().await;
}
