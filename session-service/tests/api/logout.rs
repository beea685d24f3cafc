use reqwest::Method;

use crate::helpers::{json_body, TestApp};

#[tokio::test]
async fn should_return_200_if_valid_token() {
    let app = TestApp::new().await;
    let registered = app.register_random_user().await;

    let response = app
        .send_with_authorization(
            Method::POST,
            "/api/auth/logout",
            Some(&format!("Bearer {}", registered.token)),
        )
        .await;

    assert_eq!(response.status().as_u16(), 200);
    let body = json_body(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Logged out successfully");
}

#[tokio::test]
async fn should_return_401_if_no_token() {
    let app = TestApp::new().await;

    let response = app
        .send_with_authorization(Method::POST, "/api/auth/logout", None)
        .await;

    assert_eq!(response.status().as_u16(), 401);
}

#[tokio::test]
async fn token_remains_valid_after_logout() {
    // No server-side revocation: the client is responsible for discarding it.
    let app = TestApp::new().await;
    let registered = app.register_random_user().await;
    let bearer = format!("Bearer {}", registered.token);

    let logout = app
        .send_with_authorization(Method::POST, "/api/auth/logout", Some(&bearer))
        .await;
    assert_eq!(logout.status().as_u16(), 200);

    let me = app.get_me(&registered.token).await;
    assert_eq!(me.status().as_u16(), 200);
}
