use reqwest::Method;
use session_service::domain::TokenKind;

use crate::helpers::{json_body, test_identity, TestApp};

#[tokio::test]
async fn anonymous_caller_gets_unauthenticated_status() {
    let app = TestApp::new().await;

    let response = app
        .send_with_authorization(Method::GET, "/api/auth/status", None)
        .await;

    assert_eq!(response.status().as_u16(), 200);
    let body = json_body(response).await;
    assert_eq!(body["authenticated"], false);
    assert!(body.get("user").is_none());
}

#[tokio::test]
async fn expired_token_proceeds_without_identity() {
    let app = TestApp::new().await;
    let token = app.expired_token(&test_identity(), TokenKind::Access);

    let response = app
        .send_with_authorization(
            Method::GET,
            "/api/auth/status",
            Some(&format!("Bearer {}", token)),
        )
        .await;

    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(json_body(response).await["authenticated"], false);
}

#[tokio::test]
async fn valid_token_attaches_identity() {
    let app = TestApp::new().await;
    let registered = app.register_random_user().await;

    let response = app
        .send_with_authorization(
            Method::GET,
            "/api/auth/status",
            Some(&format!("Bearer {}", registered.token)),
        )
        .await;

    assert_eq!(response.status().as_u16(), 200);
    let body = json_body(response).await;
    assert_eq!(body["authenticated"], true);
    assert_eq!(body["user"]["email"], registered.user.email.as_str());
}
