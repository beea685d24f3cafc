use crate::helpers::{get_random_email, json_body, TestApp, TEST_PASSWORD};

#[tokio::test]
async fn should_return_400_if_malformed_email() {
    let app = TestApp::new().await;

    let response = app.login("", TEST_PASSWORD).await;

    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn should_return_400_if_password_missing() {
    let app = TestApp::new().await;

    let response = app.login(&get_random_email(), "").await;

    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn should_return_401_if_user_not_found() {
    let app = TestApp::new().await;

    let response = app.login(&get_random_email(), TEST_PASSWORD).await;

    assert_eq!(response.status().as_u16(), 401);
    let body = json_body(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Invalid email or password.");
}

#[tokio::test]
async fn should_return_401_if_wrong_password() {
    let app = TestApp::new().await;
    let email = get_random_email();
    assert_eq!(app.register(&email, TEST_PASSWORD).await.status().as_u16(), 201);

    let response = app.login(&email, "Different123!").await;

    assert_eq!(response.status().as_u16(), 401);
    assert_eq!(json_body(response).await["message"], "Invalid email or password.");
}

#[tokio::test]
async fn should_return_200_and_usable_token_if_valid_credentials() {
    let app = TestApp::new().await;
    let email = get_random_email();
    assert_eq!(app.register(&email, TEST_PASSWORD).await.status().as_u16(), 201);

    let response = app.login(&email, TEST_PASSWORD).await;

    assert_eq!(response.status().as_u16(), 200);
    let body = json_body(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["user"]["email"], email.as_str());

    let token = body["token"].as_str().expect("No access token in response");
    assert!(!token.is_empty());

    let me = app.get_me(token).await;
    assert_eq!(me.status().as_u16(), 200);
}
