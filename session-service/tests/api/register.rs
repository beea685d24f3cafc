use session_service::domain::TokenKind;

use crate::helpers::{get_random_email, json_body, TestApp, TEST_PASSWORD};

#[tokio::test]
async fn should_return_201_and_tokens_for_new_user() {
    let app = TestApp::new().await;
    let email = get_random_email();

    let response = app.register(&email, TEST_PASSWORD).await;

    assert_eq!(response.status().as_u16(), 201);
    let body = json_body(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["user"]["email"], email.as_str());
    assert_eq!(body["user"]["subscription"], "free");
    assert!(body["user"]["userId"].as_str().is_some());

    let token = body["token"].as_str().expect("access token missing");
    let claims = app
        .token_service
        .verify(token, TokenKind::Access)
        .expect("issued access token should verify");
    assert_eq!(claims.identity.email, email);

    let refresh = body["refreshToken"].as_str().expect("refresh token missing");
    assert!(app.token_service.verify(refresh, TokenKind::Refresh).is_ok());
}

#[tokio::test]
async fn should_return_409_if_email_already_exists() {
    let app = TestApp::new().await;
    let email = get_random_email();

    let first = app.register(&email, TEST_PASSWORD).await;
    assert_eq!(first.status().as_u16(), 201);

    let second = app.register(&email.to_uppercase(), TEST_PASSWORD).await;
    assert_eq!(second.status().as_u16(), 409);
    let body = json_body(second).await;
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn should_return_400_if_invalid_input() {
    let app = TestApp::new().await;

    let test_cases = [
        ("not-an-email", TEST_PASSWORD),
        ("", TEST_PASSWORD),
        ("weak@example.com", "short"),
        ("weak@example.com", "alllowercase!"),
    ];

    for (email, password) in test_cases {
        let response = app.register(email, password).await;
        assert_eq!(
            response.status().as_u16(),
            400,
            "Failed for input: {:?}",
            (email, password)
        );
        assert_eq!(json_body(response).await["success"], false);
    }
}

#[tokio::test]
async fn should_return_400_if_malformed_json() {
    let app = TestApp::new().await;

    let response = app.post_raw("/api/auth/register", "{\"email\":").await;

    assert_eq!(response.status().as_u16(), 400);
    assert_eq!(json_body(response).await["success"], false);
}
