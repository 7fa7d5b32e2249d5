use crate::helpers::TestApp;

#[tokio::test]
async fn healthcheck_works() {
    let app = TestApp::spawn().await;

    let response = app
        .api_client
        .get(format!("{}/healthcheck", &app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());
    assert_eq!(response.content_length(), Some(0));
}
