use axum::http::StatusCode;
use serde_json::json;
use serial_test::serial;

use crate::common::{test_email, TestContext};

#[tokio::test]
#[serial]
async fn partner_and_cv_showcase_crud() {
    let ctx = TestContext::new().await;
    let email = test_email();
    ctx.seed_user(&email, "MODERATOR", true).await;
    let token = ctx.login(&email).await;

    let partner = ctx
        .server
        .post("/api/partners")
        .authorization_bearer(&token)
        .json(&json!({
            "name": "UNICEF Mauritanie",
            "website": "https://www.unicef.org/mauritania",
            "position": 1
        }))
        .await;
    partner.assert_status(StatusCode::CREATED);

    let entry = ctx
        .server
        .post("/api/cv")
        .authorization_bearer(&token)
        .json(&json!({
            "section": "Références",
            "title": "Programme d'appui aux coopératives maraîchères",
            "year": "2023",
            "position": 0
        }))
        .await;
    entry.assert_status(StatusCode::CREATED);

    // Both showcases are public.
    let partners = ctx.server.get("/api/partners").await;
    partners.assert_status_ok();
    let partners: serde_json::Value = partners.json();
    assert_eq!(partners[0]["name"], "UNICEF Mauritanie");

    let cv = ctx.server.get("/api/cv").await;
    cv.assert_status_ok();
    let cv: serde_json::Value = cv.json();
    assert_eq!(cv[0]["section"], "Références");

    ctx.cleanup().await;
}

#[tokio::test]
#[serial]
async fn team_roster_is_public_but_write_gated() {
    let ctx = TestContext::new().await;
    let email = test_email();
    ctx.seed_user(&email, "MODERATOR", true).await;
    let token = ctx.login(&email).await;

    let member = ctx
        .server
        .post("/api/team")
        .authorization_bearer(&token)
        .json(&json!({
            "first_name": "Oumar",
            "last_name": "Ba",
            "title": "Coordinateur national",
            "position": 0
        }))
        .await;
    member.assert_status(StatusCode::CREATED);

    let roster = ctx.server.get("/api/team").await;
    roster.assert_status_ok();
    let roster: serde_json::Value = roster.json();
    assert_eq!(roster[0]["last_name"], "Ba");

    let refused = ctx
        .server
        .post("/api/team")
        .json(&json!({ "first_name": "X", "last_name": "Y", "title": "Z" }))
        .await;
    refused.assert_status(StatusCode::UNAUTHORIZED);

    ctx.cleanup().await;
}
