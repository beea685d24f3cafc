use crate::helpers::{json_body, TestApp};

#[tokio::test]
async fn health_returns_ok() {
    let app = TestApp::new().await;

    let response = app.get_health().await;

    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(json_body(response).await["status"], "ok");
}
