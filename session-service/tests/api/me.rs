use reqwest::Method;
use session_service::domain::TokenKind;

use crate::helpers::{json_body, test_identity, TestApp};

#[tokio::test]
async fn should_return_identity_for_valid_access_token() {
    let app = TestApp::new().await;
    let registered = app.register_random_user().await;

    let response = app.get_me(&registered.token).await;

    assert_eq!(response.status().as_u16(), 200);
    let body = json_body(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["user"]["userId"], registered.user.user_id.as_str());
    assert_eq!(body["user"]["email"], registered.user.email.as_str());
    assert_eq!(body["user"]["subscription"], "free");
}

#[tokio::test]
async fn should_return_401_without_authorization_header() {
    let app = TestApp::new().await;

    let response = app
        .send_with_authorization(Method::GET, "/api/auth/me", None)
        .await;

    assert_eq!(response.status().as_u16(), 401);
    let body = json_body(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Access denied. No token provided.");
}

#[tokio::test]
async fn should_return_401_with_wrong_scheme() {
    let app = TestApp::new().await;

    let response = app
        .send_with_authorization(Method::GET, "/api/auth/me", Some("Basic dXNlcjpwYXNz"))
        .await;

    assert_eq!(response.status().as_u16(), 401);
    let body = json_body(response).await;
    assert_eq!(
        body["message"],
        "Invalid token format. Expected 'Bearer <token>'."
    );
}

#[tokio::test]
async fn should_return_401_with_expired_message() {
    let app = TestApp::new().await;
    let token = app.expired_token(&test_identity(), TokenKind::Access);

    let response = app.get_me(&token).await;

    assert_eq!(response.status().as_u16(), 401);
    assert_eq!(
        json_body(response).await["message"],
        "Token has expired. Please refresh your session."
    );
}

#[tokio::test]
async fn should_return_401_for_refresh_token() {
    let app = TestApp::new().await;
    let registered = app.register_random_user().await;

    let response = app.get_me(&registered.refresh_token).await;

    assert_eq!(response.status().as_u16(), 401);
}
