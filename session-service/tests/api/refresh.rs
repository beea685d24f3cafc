use session_service::domain::TokenKind;

use crate::helpers::{json_body, test_identity, TestApp};

#[tokio::test]
async fn should_return_new_access_token_for_valid_refresh_token() {
    let app = TestApp::new().await;
    let registered = app.register_random_user().await;

    let response = app.refresh(&registered.refresh_token).await;

    assert_eq!(response.status().as_u16(), 200);
    let body = json_body(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["expiresIn"], app.config.access_ttl_seconds());

    let token = body["token"].as_str().expect("No access token in response");
    let me = app.get_me(token).await;
    assert_eq!(me.status().as_u16(), 200);
    assert_eq!(
        json_body(me).await["user"]["userId"],
        registered.user.user_id.as_str()
    );
}

#[tokio::test]
async fn should_return_401_for_access_token() {
    let app = TestApp::new().await;
    let registered = app.register_random_user().await;

    let response = app.refresh(&registered.token).await;

    assert_eq!(response.status().as_u16(), 401);
    assert_eq!(json_body(response).await["message"], "Invalid refresh token.");
}

#[tokio::test]
async fn should_return_401_for_expired_refresh_token() {
    let app = TestApp::new().await;
    let token = app.expired_token(&test_identity(), TokenKind::Refresh);

    let response = app.refresh(&token).await;

    assert_eq!(response.status().as_u16(), 401);
    assert_eq!(
        json_body(response).await["message"],
        "Refresh token has expired. Please log in again."
    );
}

#[tokio::test]
async fn should_return_400_if_token_missing() {
    let app = TestApp::new().await;

    let response = app
        .post_json("/api/auth/refresh", &serde_json::json!({}))
        .await;

    assert_eq!(response.status().as_u16(), 400);
    assert_eq!(json_body(response).await["message"], "Refresh token is required.");
}
